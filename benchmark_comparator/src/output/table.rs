//!
//! ASCII table rendering of the comparison results.
//!

use colored::Color;
use colored::Colorize;

use crate::results::row::Evaluation;
use crate::results::row::Row;
use crate::results::Comparison;

///
/// Cell text alignment.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

///
/// A table cell. The color is applied after padding so that the widths stay correct.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The plain text.
    pub text: String,
    /// The optional foreground color.
    pub color: Option<Color>,
}

impl Cell {
    ///
    /// An uncolored cell.
    ///
    pub fn plain<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            text: text.into(),
            color: None,
        }
    }

    ///
    /// A colored cell.
    ///
    pub fn colored<S>(text: S, color: Color) -> Self
    where
        S: Into<String>,
    {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn render(&self, width: usize, alignment: Alignment) -> String {
        let padded = match alignment {
            Alignment::Left => format!("{:<width$}", self.text),
            Alignment::Right => format!("{:>width$}", self.text),
        };
        match self.color {
            Some(color) => padded.color(color).to_string(),
            None => padded,
        }
    }
}

///
/// ASCII table of the comparison results.
///
#[derive(Debug, Clone)]
pub struct Table {
    /// The column titles.
    pub header: Vec<Cell>,
    /// The body rows, including the trailing average row.
    pub rows: Vec<Vec<Cell>>,
    /// The column alignments.
    pub alignments: Vec<Alignment>,
    /// The lines printed below the table.
    pub notes: Vec<Cell>,
}

impl Table {
    /// The p-value column index.
    pub const P_VALUE_COLUMN: usize = 6;

    ///
    /// Renders the table.
    ///
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.header.iter().map(Cell::width).collect();
        for row in self.rows.iter() {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(cell.width());
            }
        }

        let border = format!(
            "+{}+",
            widths
                .iter()
                .map(|width| "-".repeat(width + 2))
                .collect::<Vec<String>>()
                .join("+")
        );

        let mut output = String::new();
        output.push('\n');
        output.push_str(border.as_str());
        output.push('\n');
        self.write_row(&mut output, self.header.as_slice(), widths.as_slice());
        output.push_str(border.as_str());
        output.push('\n');
        for row in self.rows.iter() {
            self.write_row(&mut output, row.as_slice(), widths.as_slice());
        }
        output.push_str(border.as_str());
        output.push('\n');
        for note in self.notes.iter() {
            output.push_str(note.render(0, Alignment::Left).as_str());
            output.push('\n');
        }
        output.push('\n');
        output
    }

    fn write_row(&self, output: &mut String, cells: &[Cell], widths: &[usize]) {
        let rendered: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .zip(self.alignments.iter())
            .map(|((cell, width), alignment)| cell.render(*width, *alignment))
            .collect();
        output.push_str(format!("| {} |\n", rendered.join(" | ")).as_str());
    }

    ///
    /// Formats and colorizes a throughput change.
    ///
    pub fn format_delta(delta: Option<f64>) -> Cell {
        match delta {
            None => Cell::plain("N/A"),
            Some(delta) if delta >= 0.0 => {
                Cell::colored(format!("+{:.0}%", delta * 100.0), Color::Green)
            }
            Some(delta) => Cell::colored(format!("{:.0}%", delta * 100.0), Color::Red),
        }
    }

    ///
    /// Formats and colorizes a p-value with its caveats.
    ///
    pub fn format_p_value(evaluation: &Evaluation) -> Cell {
        let mut text: String = evaluation
            .caveats()
            .iter()
            .map(|caveat| format!("({caveat}) "))
            .collect();
        match evaluation.p_value() {
            Some(p_value) => text.push_str(format!("{p_value:.4}").as_str()),
            None => text.push_str("N/A"),
        }
        if evaluation.is_significant() {
            Cell::colored(text, Color::Green)
        } else {
            Cell::colored(text, Color::White)
        }
    }

    fn row(row: &Row) -> Vec<Cell> {
        vec![
            Cell::plain(row.name.as_str()),
            Cell::plain(row.reference_items_per_second.to_string()),
            Cell::plain(row.reference_runs.to_string()),
            Cell::plain(row.candidate_items_per_second.to_string()),
            Cell::plain(row.candidate_runs.to_string()),
            Self::format_delta(row.delta),
            Self::format_p_value(&row.evaluation),
        ]
    }
}

impl From<&Comparison> for Table {
    fn from(comparison: &Comparison) -> Self {
        let header = [
            "Benchmark".to_owned(),
            "prev. iter/s".to_owned(),
            "runs".to_owned(),
            "new iter/s".to_owned(),
            "runs".to_owned(),
            "change".to_owned(),
            format!(
                "p-value (significant if <{})",
                comparison.significance_level
            ),
        ]
        .into_iter()
        .map(Cell::plain)
        .collect();

        let mut rows: Vec<Vec<Cell>> = comparison.rows.iter().map(Self::row).collect();
        let mut average = vec![Cell::plain("average")];
        average.extend((0..4).map(|_| Cell::plain("")));
        average.push(Self::format_delta(comparison.average_delta));
        average.push(Cell::plain(""));
        rows.push(average);

        let mut alignments = vec![Alignment::Left; 7];
        alignments[Self::P_VALUE_COLUMN] = Alignment::Right;

        let notes = comparison
            .anomalies
            .iter()
            .map(|anomaly| Cell::colored(format!("Warning: {anomaly}"), Color::Yellow))
            .collect();

        Self {
            header,
            rows,
            alignments,
            notes,
        }
    }
}
