//! Street-name vocabulary of the classifier.
//!
//! The classifier was trained on integer street codes.  A code is the
//! position of the name in the sorted, de-duplicated list of training street
//! names, so the same vocabulary always yields the same codes regardless of
//! the order names were supplied in.

use rustc_hash::FxHashMap;

/// Bidirectional street name ↔ code table.  Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct StreetVocabulary {
    names: Vec<String>,
    codes: FxHashMap<String, u32>,
}

impl StreetVocabulary {
    /// Build from any collection of names.  Names are trimmed; blanks and
    /// repeats are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_owned())
            .filter(|n| !n.is_empty())
            .collect();
        names.sort_unstable();
        names.dedup();

        let codes = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i as u32))
            .collect();

        Self { names, codes }
    }

    /// Model code of `name` (surrounding whitespace ignored).
    pub fn code(&self, name: &str) -> Option<u32> {
        self.codes.get(name.trim()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name.trim())
    }

    pub fn name(&self, code: u32) -> Option<&str> {
        self.names.get(code as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in code order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
