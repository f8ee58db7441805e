//! Occurrence counts of names.

use indexmap::IndexMap;

/// Counts how many times each name was recorded.
///
/// Names keep the order in which they were first recorded.
pub struct Tally {
    counts: IndexMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Record one occurrence of `name` and return its updated count.
    pub fn add(&mut self, name: &str) -> usize {
        let count = self.counts.entry(name.to_owned()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        let mut tally = Self::new();
        for name in names {
            tally.add(name.as_ref());
        }
        tally
    }
}
