//! Older/newer post resolution
//!
//! The detail page fetches a small newest-first batch of summaries and
//! locates the current post inside it. Fields are named strictly
//! chronologically: in a newest-first batch, entries before the current
//! post are more recent, entries after it are older. Neighbors outside
//! the batch are reported as absent; the batch is never widened.

use super::PostSummary;

/// The chronological neighbors of a post within a fetched batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighbors {
    /// The next-newer post, shown as "next post"
    pub newer: Option<PostSummary>,
    /// The next-older post, shown as "previous post"
    pub older: Option<PostSummary>,
}

impl Neighbors {
    /// Resolve neighbors with a single scan over a newest-first batch.
    ///
    /// The last entry seen before the current post becomes `newer`, the
    /// first entry after it becomes `older`. If the current post is not
    /// in the batch, both are absent.
    pub fn resolve(batch: &[PostSummary], current_uid: &str) -> Self {
        let mut newer = None;
        let mut older = None;
        let mut passed_current = false;

        for post in batch {
            if post.uid == current_uid {
                passed_current = true;
            } else if !passed_current {
                newer = Some(post.clone());
            } else {
                older = Some(post.clone());
                break;
            }
        }

        if !passed_current {
            return Self::default();
        }

        Self { newer, older }
    }
}
