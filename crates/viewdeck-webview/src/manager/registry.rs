use std::num::NonZeroUsize;

use lru::LruCache;

use super::deck::View;

/// The views of one deck, keyed by application key and ordered by recency.
///
/// With a capacity set, inserting past it evicts least-recently-used views.
/// The caller names one key that must survive (the view about to become
/// current), so the visible view is never evicted.
pub struct ViewRegistry<S> {
    views: LruCache<String, View<S>>,
    capacity: Option<NonZeroUsize>,
}

impl<S> ViewRegistry<S> {
    pub fn new(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            views: LruCache::unbounded(),
            capacity,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.views.contains(key)
    }

    /// Look up without touching recency.
    pub fn peek(&self, key: &str) -> Option<&View<S>> {
        self.views.peek(key)
    }

    pub fn peek_mut(&mut self, key: &str) -> Option<&mut View<S>> {
        self.views.peek_mut(key)
    }

    /// Look up and mark as most recently used.
    pub fn touch(&mut self, key: &str) -> Option<&mut View<S>> {
        self.views.get_mut(key)
    }

    /// Insert a view and return whatever the capacity forced out.
    pub fn insert(&mut self, view: View<S>, keep: &str) -> Vec<View<S>> {
        self.views.put(view.key().to_string(), view);

        let mut evicted = Vec::new();
        let Some(capacity) = self.capacity else {
            return evicted;
        };
        while self.views.len() > capacity.get() {
            let victim = self
                .views
                .iter()
                .rev()
                .map(|(k, _)| k)
                .find(|k| k.as_str() != keep)
                .cloned();
            match victim.and_then(|k| self.views.pop(&k)) {
                Some(view) => evicted.push(view),
                None => break,
            }
        }
        evicted
    }

    /// Remove every view, least recently used first.
    pub fn drain(&mut self) -> Vec<View<S>> {
        let mut drained = Vec::with_capacity(self.views.len());
        while let Some((_, view)) = self.views.pop_lru() {
            drained.push(view);
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &View<S>> {
        self.views.iter().map(|(_, v)| v)
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }
}
