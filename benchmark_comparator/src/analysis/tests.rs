//!
//! The benchmark comparison tests.
//!

#![cfg(test)]

use proptest::prelude::*;
use serde_json::json;

use crate::input::Input;
use crate::model::report::Report;
use crate::results::anomaly::Anomaly;
use crate::results::row::Evaluation;

use super::compare;
use super::durations::iteration_durations;
use super::pairing::Error as PairingError;
use super::pairing::Pairing;
use super::significance::verdict::Caveat;
use super::significance::Evaluator;

const SECOND: f64 = 1_000_000_000.0;

///
/// Builds a benchmark whose iterations have a single statement executing in `durations[i]` ns.
///
fn benchmark(name: &str, items_per_second: f64, durations: &[f64]) -> serde_json::Value {
    let metrics: Vec<serde_json::Value> = durations
        .iter()
        .map(|duration| {
            json!({
                "parse_duration": 0,
                "statements": [ {
                    "sql_translation_duration": 0,
                    "optimization_duration": 0,
                    "lqp_translation_duration": 0,
                    "plan_execution_duration": duration,
                } ]
            })
        })
        .collect();
    json!({ "name": name, "items_per_second": items_per_second, "metrics": metrics })
}

fn report(benchmarks: Vec<serde_json::Value>) -> Report {
    let input: Input =
        serde_json::from_value(json!({ "benchmarks": benchmarks })).expect("Valid test document");
    Report::try_from(input).expect("Valid test report")
}

fn nanoseconds() -> impl Strategy<Value = f64> {
    (0u64..10_000_000_000).prop_map(|value| value as f64)
}

fn samples(base: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|index| base + step * (index as f64)).collect()
}

#[test]
fn durations_sum_parts() {
    let report = report(vec![json!({
        "name": "q",
        "items_per_second": 1.0,
        "metrics": [
            {
                "parse_duration": 7,
                "statements": [
                    { "sql_translation_duration": 1, "optimization_duration": 2,
                      "lqp_translation_duration": 3, "plan_execution_duration": 4 },
                    { "sql_translation_duration": 10, "optimization_duration": 20,
                      "lqp_translation_duration": 30, "plan_execution_duration": 40 }
                ]
            },
            { "parse_duration": 5, "statements": [] },
            { "parse_duration": 0.5, "statements": [
                { "sql_translation_duration": 0.25, "optimization_duration": 0.125,
                  "lqp_translation_duration": 0.0625, "plan_execution_duration": 1e9 }
            ] }
        ]
    })]);

    let durations = iteration_durations(report.benchmarks[0].iterations());
    assert_eq!(durations.len(), 3);
    assert_eq!(durations[0], 117.0);
    assert_eq!(durations[1], 5.0);
    assert!((durations[2] - (1e9 + 0.9375)).abs() < 1e-6);
}

#[test]
fn durations_empty() {
    let report = report(vec![json!({ "name": "failed", "items_per_second": 0.0 })]);
    assert!(iteration_durations(report.benchmarks[0].iterations()).is_empty());
}

#[test]
fn end_to_end_significant() {
    let reference = report(vec![benchmark(
        "Q1",
        1000.0,
        samples(6.0 * SECOND, 0.01 * SECOND, 12).as_slice(),
    )]);
    let candidate = report(vec![benchmark(
        "Q1",
        1200.0,
        samples(5.0 * SECOND, 0.01 * SECOND, 12).as_slice(),
    )]);

    let comparison = compare(
        &reference,
        &candidate,
        &Evaluator::default(),
        Pairing::Positional,
    )
    .expect("Comparable runs");

    assert_eq!(comparison.rows.len(), 1);
    let row = &comparison.rows[0];
    assert_eq!(row.name, "Q1");
    assert_eq!(row.reference_runs, 12);
    assert_eq!(row.candidate_runs, 12);
    assert!((row.delta.expect("Defined delta") - 0.2).abs() < 1e-12);
    assert!(row.evaluation.p_value().expect("Evaluated") < 0.001);
    assert!(row.evaluation.is_significant());
    assert!(row.evaluation.caveats().is_empty());
    assert!((comparison.average_delta.expect("Defined average") - 0.2).abs() < 1e-12);
    assert!(comparison.anomalies.is_empty());
}

#[test]
fn end_to_end_not_significant() {
    let before = samples(6.0 * SECOND, 0.01 * SECOND, 12);
    let after: Vec<f64> = before.iter().map(|value| value + 1_000_000.0).collect();
    let reference = report(vec![benchmark("Q1", 1000.0, before.as_slice())]);
    let candidate = report(vec![benchmark("Q1", 1001.0, after.as_slice())]);

    let comparison = compare(
        &reference,
        &candidate,
        &Evaluator::default(),
        Pairing::Positional,
    )
    .expect("Comparable runs");

    let row = &comparison.rows[0];
    assert!(row.evaluation.p_value().expect("Evaluated") > 0.5);
    assert!(!row.evaluation.is_significant());
}

#[test]
fn empty_run_is_isolated() {
    let reference = report(vec![
        benchmark("Q1", 1000.0, &[]),
        benchmark("Q2", 100.0, samples(6.0 * SECOND, 0.01 * SECOND, 12).as_slice()),
    ]);
    let candidate = report(vec![
        benchmark("Q1", 1000.0, &[]),
        benchmark("Q2", 150.0, samples(5.0 * SECOND, 0.01 * SECOND, 12).as_slice()),
    ]);

    let comparison = compare(
        &reference,
        &candidate,
        &Evaluator::default(),
        Pairing::Positional,
    )
    .expect("Comparable runs");

    assert_eq!(
        comparison.rows[0].evaluation,
        Evaluation::InsufficientData {
            caveats: vec![Caveat::RunTimeTooShort, Caveat::NotEnoughRuns],
        }
    );
    assert!(comparison.rows[1].evaluation.is_significant());
}

#[test]
fn undefined_delta_excluded_from_average() {
    let durations = samples(6.0 * SECOND, 0.01 * SECOND, 12);
    let reference = report(vec![
        benchmark("Q1", 100.0, durations.as_slice()),
        benchmark("Q2", 0.0, durations.as_slice()),
    ]);
    let candidate = report(vec![
        benchmark("Q1", 150.0, durations.as_slice()),
        benchmark("Q2", 150.0, durations.as_slice()),
    ]);

    let comparison = compare(
        &reference,
        &candidate,
        &Evaluator::default(),
        Pairing::Positional,
    )
    .expect("Comparable runs");

    assert_eq!(comparison.rows[0].delta, Some(0.5));
    assert_eq!(comparison.rows[1].delta, None);
    assert_eq!(comparison.average_delta, Some(0.5));
}

#[test]
fn positional_name_mismatch_label() {
    let durations = samples(6.0 * SECOND, 0.01 * SECOND, 12);
    let reference = report(vec![benchmark("Q1", 100.0, durations.as_slice())]);
    let candidate = report(vec![benchmark("Q1b", 100.0, durations.as_slice())]);

    let comparison = compare(
        &reference,
        &candidate,
        &Evaluator::default(),
        Pairing::Positional,
    )
    .expect("Comparable runs");

    assert_eq!(comparison.rows[0].name, "Q1 -> Q1b");
}

#[test]
fn positional_length_mismatch() {
    let durations = samples(6.0 * SECOND, 0.01 * SECOND, 12);
    let reference = report(vec![
        benchmark("Q1", 100.0, durations.as_slice()),
        benchmark("Q2", 100.0, durations.as_slice()),
    ]);
    let candidate = report(vec![benchmark("Q1", 100.0, durations.as_slice())]);

    let comparison = compare(
        &reference,
        &candidate,
        &Evaluator::default(),
        Pairing::Positional,
    )
    .expect("Comparable runs");

    assert_eq!(comparison.rows.len(), 1);
    assert_eq!(
        comparison.anomalies,
        vec![Anomaly::LengthMismatch {
            reference: 2,
            candidate: 1
        }]
    );
}

#[test]
fn name_pairing_reordered() {
    let reference = report(vec![
        benchmark("Q1", 100.0, &[1.0, 2.0]),
        benchmark("Q2", 200.0, &[1.0, 2.0]),
    ]);
    let candidate = report(vec![
        benchmark("Q2", 100.0, &[1.0, 2.0]),
        benchmark("Q1", 200.0, &[1.0, 2.0]),
    ]);

    let comparison = compare(&reference, &candidate, &Evaluator::default(), Pairing::Name)
        .expect("Comparable runs");

    assert_eq!(comparison.rows[0].name, "Q1");
    assert_eq!(comparison.rows[0].delta, Some(1.0));
    assert_eq!(comparison.rows[1].name, "Q2");
    assert_eq!(comparison.rows[1].delta, Some(-0.5));
}

#[test]
fn error_name_pairing_unmatched() {
    let reference = report(vec![
        benchmark("Q1", 100.0, &[1.0]),
        benchmark("Q2", 100.0, &[1.0]),
    ]);
    let candidate = report(vec![
        benchmark("Q1", 100.0, &[1.0]),
        benchmark("Q3", 100.0, &[1.0]),
    ]);

    let result = compare(&reference, &candidate, &Evaluator::default(), Pairing::Name);
    assert_eq!(
        result,
        Err(PairingError::Unmatched {
            reference: vec!["Q2".to_owned()],
            candidate: vec!["Q3".to_owned()],
        })
    );
}

#[test]
fn error_name_pairing_duplicate() {
    let reference = report(vec![
        benchmark("Q1", 100.0, &[1.0]),
        benchmark("Q1", 100.0, &[1.0]),
    ]);
    let candidate = report(vec![benchmark("Q1", 100.0, &[1.0])]);

    let result = compare(&reference, &candidate, &Evaluator::default(), Pairing::Name);
    assert_eq!(
        result,
        Err(PairingError::Duplicate {
            name: "Q1".to_owned()
        })
    );
}

#[test]
fn pairing_from_str() {
    assert_eq!("positional".parse::<Pairing>().ok(), Some(Pairing::Positional));
    assert_eq!("NAME".parse::<Pairing>().ok(), Some(Pairing::Name));
    assert!("random".parse::<Pairing>().is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_durations_sum_parts(
        iterations in prop::collection::vec(
            (nanoseconds(), prop::collection::vec(prop::array::uniform4(nanoseconds()), 0..5)),
            0..20,
        ),
    ) {
        let metrics: Vec<serde_json::Value> = iterations
            .iter()
            .map(|(parse_duration, statements)| {
                let statements: Vec<serde_json::Value> = statements
                    .iter()
                    .map(|[sql, optimization, lqp, plan]| {
                        json!({
                            "sql_translation_duration": sql,
                            "optimization_duration": optimization,
                            "lqp_translation_duration": lqp,
                            "plan_execution_duration": plan,
                        })
                    })
                    .collect();
                json!({ "parse_duration": parse_duration, "statements": statements })
            })
            .collect();
        let report = report(vec![json!({ "name": "q", "items_per_second": 1.0, "metrics": metrics })]);

        let durations = iteration_durations(report.benchmarks[0].iterations());
        prop_assert_eq!(durations.len(), iterations.len());
        for (duration, (parse_duration, statements)) in durations.iter().zip(iterations.iter()) {
            let expected = statements
                .iter()
                .fold(0.0, |total, [sql, optimization, lqp, plan]| {
                    total + (sql + optimization + lqp + plan)
                })
                + parse_duration;
            prop_assert_eq!(*duration, expected);
            prop_assert!(*duration >= 0.0);
        }
    }
}
