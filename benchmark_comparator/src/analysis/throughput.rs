//!
//! Throughput changes.
//!

///
/// Returns the relative throughput change `new / old - 1`.
///
/// The change is undefined if the reference throughput is not positive.
///
pub fn delta(old: f64, new: f64) -> Option<f64> {
    if old > 0.0 {
        Some(new / old - 1.0)
    } else {
        None
    }
}

///
/// Returns the arithmetic mean of the defined changes.
///
/// Undefined changes are excluded from both the sum and the count.
/// The average is undefined if no change is defined.
///
pub fn average<I>(deltas: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = deltas
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), delta| (sum + delta, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / (count as f64))
    }
}
