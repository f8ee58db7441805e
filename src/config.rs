use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Sequence of numbers to analyze.
///
/// Loaded from a TOML file with a single `numbers` array.
/// See [`InputSet::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct InputSet {
    /// Numbers in their original order.
    pub numbers: Vec<f64>,
}

impl InputSet {
    /// Load an [`InputSet`] from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let input: InputSet = toml::from_str(&contents).context("failed to deserialize input")?;

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integer_and_float_literals() {
        let input: InputSet = toml::from_str("numbers = [1, -2.5, 3]").unwrap();
        assert_eq!(input.numbers, vec![1.0, -2.5, 3.0]);
    }

    #[test]
    fn accepts_empty_array() {
        let input: InputSet = toml::from_str("numbers = []").unwrap();
        assert!(input.numbers.is_empty());
    }

    #[test]
    fn rejects_missing_numbers() {
        assert!(toml::from_str::<InputSet>("values = [1, 2]").is_err());
    }
}
