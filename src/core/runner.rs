use crate::core::{Classifier, Line};
use crate::utils::error::{FizzBuzzError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const DEFAULT_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// JSON Lines, one object per number
    Json,
    /// CSV with an `n,output` header
    Csv,
}

/// Drives a classifier over `1..=limit` and writes the results.
pub struct Runner<C: Classifier> {
    classifier: C,
    limit: i64,
    format: OutputFormat,
}

impl<C: Classifier> Runner<C> {
    pub fn new(classifier: C, limit: i64) -> Self {
        Self {
            classifier,
            limit,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = Result<Line>> + '_ {
        (1..=self.limit).map(move |n| {
            self.classifier
                .render(n)
                .map(|output| Line { n, output })
        })
    }

    /// Writes every line to `out` and returns how many were written.
    pub fn run<W: Write>(&self, out: W) -> Result<usize> {
        if self.limit < 1 {
            return Err(FizzBuzzError::InvalidConfigValueError {
                field: "limit".to_string(),
                value: self.limit.to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }

        tracing::debug!("Running 1..={} as {:?}", self.limit, self.format);

        let written = match self.format {
            OutputFormat::Text => self.write_text(out)?,
            OutputFormat::Json => self.write_json(out)?,
            OutputFormat::Csv => self.write_csv(out)?,
        };

        tracing::debug!("Wrote {} lines", written);
        Ok(written)
    }

    fn write_text<W: Write>(&self, mut out: W) -> Result<usize> {
        let mut count = 0;
        for line in self.lines() {
            writeln!(out, "{}", line?.output)?;
            count += 1;
        }
        out.flush()?;
        Ok(count)
    }

    fn write_json<W: Write>(&self, mut out: W) -> Result<usize> {
        let mut count = 0;
        for line in self.lines() {
            serde_json::to_writer(&mut out, &line?)?;
            out.write_all(b"\n")?;
            count += 1;
        }
        out.flush()?;
        Ok(count)
    }

    fn write_csv<W: Write>(&self, out: W) -> Result<usize> {
        let mut writer = csv::Writer::from_writer(out);
        let mut count = 0;
        for line in self.lines() {
            writer.serialize(line?)?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }
}
