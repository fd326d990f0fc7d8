// Variable name -> secret reference mapping

use indexmap::map::Iter;
use indexmap::IndexMap;

/// Insertion-ordered mapping from variable name to secret reference.
/// Re-inserting an existing name replaces the reference but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretMapping {
    entries: IndexMap<String, String>,
}

impl SecretMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous reference if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, reference: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), reference.into())
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SecretMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (name, reference) in iter {
            mapping.insert(name, reference);
        }
        mapping
    }
}
