//! One in-memory entity collection plus its load status.

use chrono::{DateTime, Utc};
use storefront_client::{ClientError, FailureKind};

/// Why the most recent fetch of a collection failed.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    /// Rendered [`ClientError`] message.
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Load state of a [`Collection`].
///
/// `Errored` says nothing about the contents: a collection that loaded once
/// and then failed to refresh still holds the earlier snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CollectionStatus {
    /// Never fetched.
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(FetchFailure),
}

/// An insertion-ordered collection, replaced wholesale on every successful fetch.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    status: CollectionStatus,
    loaded_at: Option<DateTime<Utc>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: CollectionStatus::Idle,
            loaded_at: None,
        }
    }
}

impl<T> Collection<T> {
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn status(&self) -> &CollectionStatus {
        &self.status
    }

    /// Time of the last successful fetch.
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The failure recorded by the most recent fetch, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&FetchFailure> {
        match &self.status {
            CollectionStatus::Errored(failure) => Some(failure),
            _ => None,
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = CollectionStatus::Loading;
    }

    /// Applies the outcome of a fetch. Success replaces the contents; failure
    /// is logged and recorded while the previous contents stay in place.
    pub(crate) fn settle(&mut self, name: &'static str, result: Result<Vec<T>, ClientError>) {
        match result {
            Ok(items) => {
                tracing::info!(collection = name, count = items.len(), "collection loaded");
                self.replace(items);
            }
            Err(e) => {
                tracing::warn!(
                    collection = name,
                    error = %e,
                    kept = self.items.len(),
                    "fetch failed; keeping previous contents"
                );
                self.status = CollectionStatus::Errored(FetchFailure {
                    kind: e.kind(),
                    message: e.to_string(),
                    at: Utc::now(),
                });
            }
        }
    }

    pub(crate) fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.status = CollectionStatus::Loaded;
        self.loaded_at = Some(Utc::now());
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(status: u16) -> ClientError {
        ClientError::HttpStatus {
            status,
            url: "http://localhost:3000/api/groups".to_string(),
            message: None,
        }
    }

    #[test]
    fn new_collection_is_idle_and_empty() {
        let collection: Collection<u8> = Collection::default();
        assert_eq!(collection.status(), &CollectionStatus::Idle);
        assert!(collection.is_empty());
        assert!(collection.loaded_at().is_none());
    }

    #[test]
    fn successful_settle_replaces_and_marks_loaded() {
        let mut collection = Collection::default();
        collection.begin_loading();
        assert_eq!(collection.status(), &CollectionStatus::Loading);

        collection.settle("numbers", Ok(vec![1, 2, 3]));
        assert_eq!(collection.items(), &[1, 2, 3]);
        assert_eq!(collection.status(), &CollectionStatus::Loaded);
        assert!(collection.loaded_at().is_some());
    }

    #[test]
    fn failed_settle_keeps_previous_contents() {
        let mut collection = Collection::default();
        collection.settle("numbers", Ok(vec![7]));
        let first_load = collection.loaded_at();

        collection.begin_loading();
        collection.settle("numbers", Err(http_error(503)));

        assert_eq!(collection.items(), &[7]);
        assert_eq!(collection.loaded_at(), first_load);
        let failure = collection.last_error().expect("expected recorded failure");
        assert_eq!(failure.kind, FailureKind::HttpStatus(503));
        assert!(failure.message.contains("503"));
    }

    #[test]
    fn last_error_clears_after_successful_refresh() {
        let mut collection = Collection::default();
        collection.settle("numbers", Err::<Vec<u8>, _>(http_error(500)));
        assert!(collection.last_error().is_some());

        collection.settle("numbers", Ok(vec![1]));
        assert!(collection.last_error().is_none());
    }
}
