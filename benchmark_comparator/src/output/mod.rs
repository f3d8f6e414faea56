//!
//! Benchmark comparator output.
//!

pub mod format;
pub mod json;
pub mod table;

use std::io::Write;
use std::path::PathBuf;

use crate::results::Comparison;

use self::format::Format;
use self::json::Json;
use self::table::Table;

///
/// Rendered comparison results.
///
#[derive(Debug)]
pub enum Output {
    /// A human-readable table.
    Table(String),
    /// A JSON document.
    Json(String),
}

impl Output {
    ///
    /// Returns the rendered content.
    ///
    pub fn content(&self) -> &str {
        match self {
            Output::Table(content) => content.as_str(),
            Output::Json(content) => content.as_str(),
        }
    }

    ///
    /// Writes the rendered results to a file.
    ///
    pub fn write_to_file(&self, path: PathBuf) -> anyhow::Result<()> {
        std::fs::write(path.as_path(), self.content())
            .map_err(|error| anyhow::anyhow!("Comparison file {path:?} writing: {error}"))?;
        Ok(())
    }

    ///
    /// Writes the rendered results to `stdout`.
    ///
    pub fn print(&self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.content().as_bytes())?;
        if let Output::Json(_) = self {
            writeln!(stdout)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl TryFrom<(&Comparison, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((comparison, format): (&Comparison, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Table => Table::from(comparison).into(),
            Format::Json => Json::try_from(comparison)?.into(),
        })
    }
}

impl From<Table> for Output {
    fn from(value: Table) -> Self {
        Output::Table(value.render())
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::Json(value.content)
    }
}
