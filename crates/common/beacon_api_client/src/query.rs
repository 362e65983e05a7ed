use std::fmt::Display;

use url::form_urlencoded;

/// Ordered set of query parameters. Only parameters the caller actually supplied are ever
/// inserted, so an absent value never reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn insert_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Inserts a comma joined list. `Some(&[])` is kept as a present key with an empty value.
    pub fn insert_list<T: Display>(
        &mut self,
        key: &'static str,
        values: Option<&[T]>,
    ) -> &mut Self {
        if let Some(values) = values {
            let joined = values
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",");
            self.insert(key, joined);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Form encoded query string without the leading `?`, or `None` when empty.
    pub fn to_query_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        Some(
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.iter())
                .finish(),
        )
    }
}
