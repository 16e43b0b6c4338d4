//! Incremental post feed
//!
//! A `Feed` accumulates listing pages fetched from the content
//! repository. It only ever appends: each advance follows the current
//! opaque cursor, extends the loaded posts in page order, and replaces
//! the cursor with whatever the repository returned. A missing cursor is
//! terminal. Advances take `&mut self`, so two cannot overlap on one
//! feed; callers that expose a trigger disable it while a fetch is in
//! flight.

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::cms::RepositoryError;
use crate::content::PostSummary;

/// One page of post summaries plus the cursor for the next page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub results: Vec<PostSummary>,
    pub next_page: Option<String>,
}

/// An append-only list of loaded post summaries and the cursor for
/// whatever has not been loaded yet
#[derive(Debug, Clone)]
pub struct Feed {
    loaded: Vec<PostSummary>,
    cursor: Option<String>,
}

impl Feed {
    /// Initialize the feed from the first fetched page
    pub fn new(page: PostPage) -> Self {
        Self {
            loaded: page.results,
            cursor: page.next_page,
        }
    }

    /// The posts loaded so far, in the order the repository returned them
    pub fn loaded(&self) -> &[PostSummary] {
        &self.loaded
    }

    /// The cursor for the next page, `None` once the feed is exhausted
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Whether every page has been loaded
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Load the next page through `fetch` and append it.
    ///
    /// Returns `Ok(false)` without calling `fetch` when the feed is
    /// exhausted. Otherwise `fetch` is called exactly once with the
    /// current cursor; on success the results are appended in order and
    /// the cursor is replaced, on error the feed is left unchanged. An
    /// empty page with a live cursor is legal: the new cursor is still
    /// recorded and further advances stay possible.
    pub async fn advance<F, Fut>(&mut self, fetch: F) -> Result<bool, RepositoryError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<PostPage, RepositoryError>>,
    {
        let cursor = match self.cursor.clone() {
            Some(cursor) => cursor,
            None => return Ok(false),
        };

        let page = fetch(cursor).await?;
        self.loaded.extend(page.results);
        self.cursor = page.next_page;
        Ok(true)
    }
}
