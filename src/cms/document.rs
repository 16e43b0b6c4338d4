//! Raw repository documents and their adaptation into content models
//!
//! The repository's document shape is adapted permissively: absent
//! optional fields become `None` or empty values rather than errors.
//! Duplicate uids within one batch are a source integrity violation;
//! they are logged and passed through, never deduplicated.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::collections::HashSet;

use crate::content::{ContentBlock, PostDetail, PostSummary, RichText};

/// A document as delivered by the repository's search API
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub last_publication_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub data: DocumentData,
}

/// The custom fields of a post document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub title: Option<TextField>,
    #[serde(default)]
    pub subtitle: Option<TextField>,
    #[serde(default)]
    pub author: Option<TextField>,
    #[serde(default)]
    pub banner: Option<ImageField>,
    #[serde(default)]
    pub content: Vec<RawBlock>,
}

/// A text field, delivered either as a plain string or as rich text
/// depending on how the repository schema declares it
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    Plain(String),
    Rich(RichText),
}

impl TextField {
    fn as_text(&self) -> String {
        match self {
            TextField::Plain(text) => text.clone(),
            TextField::Rich(body) => body.as_text(),
        }
    }
}

/// An image field; the url may be missing even when the field is present
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageField {
    #[serde(default)]
    pub url: Option<String>,
}

/// One content section as delivered by the repository
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlock {
    #[serde(default)]
    pub heading: Option<TextField>,
    #[serde(default)]
    pub body: RichText,
}

impl RawDocument {
    /// The identifier used in URLs; falls back to the document id for
    /// documents without a uid
    pub fn uid(&self) -> String {
        self.uid.clone().unwrap_or_else(|| self.id.clone())
    }

    /// Shape this document into a listing summary
    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            uid: self.uid(),
            title: text_or_empty(&self.data.title),
            subtitle: text_or_empty(&self.data.subtitle),
            author: text_or_empty(&self.data.author),
            published_at: self.first_publication_date,
        }
    }

    /// Shape this document into a full detail-page post
    pub fn to_detail(&self) -> PostDetail {
        let content = self
            .data
            .content
            .iter()
            .map(|block| ContentBlock {
                heading: text_or_empty(&block.heading),
                body: block.body.clone(),
            })
            .collect();

        PostDetail {
            uid: self.uid(),
            title: text_or_empty(&self.data.title),
            subtitle: text_or_empty(&self.data.subtitle),
            author: text_or_empty(&self.data.author),
            published_at: self.first_publication_date,
            updated_at: self.last_publication_date,
            banner: self.data.banner.as_ref().and_then(|b| b.url.clone()),
            content,
        }
    }
}

fn text_or_empty(field: &Option<TextField>) -> String {
    field.as_ref().map(TextField::as_text).unwrap_or_default()
}

/// Log duplicate uids within one batch as a data-source violation
pub fn warn_on_duplicate_uids(posts: &[PostSummary]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.uid.as_str()) {
            tracing::warn!("repository batch contains duplicate uid: {}", post.uid);
        }
    }
}
