//! Indicator Result: a named bundle of index-aligned output lines.

use serde::{Deserialize, Serialize};

use crate::primitives::Series;

/// One named output line of an indicator (e.g. MACD's `dea`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub name: String,
    pub values: Series,
}

/// Output of one indicator call: one to four lines, all of the input length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    name: String,
    lines: Vec<Line>,
}

impl IndicatorResult {
    /// Bundle `lines` under `name`. All lines must share one length.
    pub fn new(name: impl Into<String>, lines: Vec<(&str, Series)>) -> Self {
        let lines: Vec<Line> = lines
            .into_iter()
            .map(|(line, values)| Line {
                name: line.to_string(),
                values,
            })
            .collect();
        debug_assert!(
            lines.windows(2).all(|w| w[0].values.len() == w[1].values.len()),
            "indicator lines must be index-aligned"
        );
        Self {
            name: name.into(),
            lines,
        }
    }

    /// A bundle holding a single line.
    pub fn single(name: impl Into<String>, line: &str, values: Series) -> Self {
        Self::new(name, vec![(line, values)])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Names of the lines, in output order.
    pub fn line_names(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.name.as_str()).collect()
    }

    /// Full series for a named line.
    pub fn line(&self, name: &str) -> Option<&[f64]> {
        self.lines
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.values.as_slice())
    }

    /// Value of a named line at a bar index.
    pub fn get(&self, name: &str, bar_index: usize) -> Option<f64> {
        self.line(name).and_then(|v| v.get(bar_index).copied())
    }

    /// Number of bars covered (0 for an empty bundle).
    pub fn len(&self) -> usize {
        self.lines.first().map_or(0, |l| l.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply `f` to every line, keeping names.
    pub fn map_lines(mut self, f: impl Fn(&[f64]) -> Series) -> Self {
        for line in &mut self.lines {
            line.values = f(&line.values);
        }
        self
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}
