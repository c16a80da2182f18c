use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Rect;

/// Mapping from layout key to the rectangle the geometry source computed
/// for it. Recomputed on every resize or drag event.
///
/// Serializes as a plain JSON object:
/// `{"leftContent": {"x": 0, "y": 36, "width": 400, "height": 600}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(BTreeMap<String, Rect>);

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Rect> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, rect: Rect) {
        self.0.insert(key.into(), rect);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn with(mut self, key: impl Into<String>, rect: Rect) -> Self {
        self.insert(key, rect);
        self
    }
}

impl<K: Into<String>> FromIterator<(K, Rect)> for Layout {
    fn from_iter<I: IntoIterator<Item = (K, Rect)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, r)| (k.into(), r)).collect())
    }
}
