use std::collections::BTreeMap;

/// Placeholder names understood by the built-in templates.
pub mod names {
    pub const CITY: &str = "city";
    pub const LOCALITY: &str = "locality";
    pub const URL: &str = "url";
    pub const METADATA: &str = "metadata";
    pub const SELECT_FONT: &str = "select_font";
    pub const TARGET_LANGUAGE: &str = "target_language";
    pub const TEXT: &str = "text";
}

/// Mapping from placeholder name to the literal value substituted for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderBindings {
    values: BTreeMap<String, String>,
}

impl PlaceholderBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PlaceholderBindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}
