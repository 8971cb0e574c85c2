use serde::{Deserialize, Serialize};
use std::fmt;

/// Finished drive table: the truncated samples plus the parameters that
/// shaped them.
///
/// Renders as the bracketed integer list the firmware tooling consumes,
/// one entry per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizedTable {
    pub values: Vec<i64>,
    pub steps: usize,
    pub amplitude: f64,
}

impl QuantizedTable {
    pub fn new(values: Vec<i64>, steps: usize, amplitude: f64) -> Self {
        Self {
            values,
            steps,
            amplitude,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for QuantizedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_as_bracketed_list() {
        let table = QuantizedTable::new(vec![0, 6, -12], 3, -400.0);
        assert_eq!(format!("{}", table), "[0, 6, -12]");
    }

    #[test]
    fn empty_table_renders_as_empty_brackets() {
        let table = QuantizedTable::new(Vec::new(), 0, 400.0);
        assert!(table.is_empty());
        assert_eq!(format!("{}", table), "[]");
    }

    #[test]
    fn len_tracks_entry_count() {
        let table = QuantizedTable::new(vec![1, 2, 3, 4], 4, 400.0);
        assert_eq!(table.len(), 4);
    }
}
