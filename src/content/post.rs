//! Post models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::RichText;

/// A post as it appears in listings and neighbor batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Stable unique identifier, used in the detail page path
    pub uid: String,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Post author
    pub author: String,

    /// First publication date, absent for unpublished documents
    pub published_at: Option<DateTime<FixedOffset>>,
}

/// A full post as rendered on its detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    /// Stable unique identifier
    pub uid: String,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Post author
    pub author: String,

    /// First publication date
    pub published_at: Option<DateTime<FixedOffset>>,

    /// Last publication date, absent when the post was never edited
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// Banner image URL
    pub banner: Option<String>,

    /// Ordered content sections
    pub content: Vec<ContentBlock>,
}

/// One section of a post: a heading plus a rich-text body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: RichText,
}
