use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::host::ContentLocator;
use crate::preload::PreloadSet;

/// A request to show content in a deck.
///
/// Every field is optional. Empty strings count as absent, and a request
/// with neither `url` nor `file` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenRequest {
    pub url: Option<String>,
    /// Path relative to the content root.
    pub file: Option<String>,
    /// Give keyboard focus to the view once it is current.
    pub focus: bool,
    /// Build new views with the privileged preload. Ignored on reuse.
    pub trusted: bool,
    /// Attach without stealing focus, even when `focus` is set.
    pub background: bool,
    /// Application key. When absent the deck generates `"{deck}-{n}"`.
    pub key: Option<String>,
}

impl OpenRequest {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Default::default()
        }
    }

    pub fn trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    pub fn focused(mut self) -> Self {
        self.focus = true;
        self
    }

    pub fn in_background(mut self) -> Self {
        self.background = true;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The content to load. A non-empty `url` wins over `file`.
    pub fn locator(&self) -> Option<ContentLocator> {
        if let Some(url) = non_empty(&self.url) {
            return Some(ContentLocator::Url(url.to_string()));
        }
        non_empty(&self.file).map(|f| ContentLocator::File(f.into()))
    }

    /// The explicit key, if one was given and is not blank.
    pub fn explicit_key(&self) -> Option<&str> {
        non_empty(&self.key)
    }

    pub(crate) fn wants_focus(&self) -> bool {
        self.focus && !self.background
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Tunables for [`super::ViewDeckManager`].
#[derive(Debug, Clone, Default)]
pub struct ManagerOptions {
    /// Per-deck view cache size. `None` keeps every view for the life of
    /// the process.
    pub max_views_per_deck: Option<NonZeroUsize>,
    pub preloads: PreloadSet,
}

impl ManagerOptions {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.max_views_per_deck = NonZeroUsize::new(capacity);
        self
    }

    pub fn with_preloads(mut self, preloads: PreloadSet) -> Self {
        self.preloads = preloads;
        self
    }
}
