//! Page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping is
//! off: user-sourced values are escaped while the context is built, and
//! rich-text bodies arrive as already-rendered trusted HTML.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::BlogConfig;
use crate::content::{Neighbors, PostDetail, PostSummary, ReadingTime};
use crate::helpers::date::time_tag;
use crate::helpers::html::html_escape;

/// Template renderer with the embedded page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Values are escaped while building the context, and rich-text
        // bodies are inserted as rendered HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("voyage/layout.html")),
            ("index.html", include_str!("voyage/index.html")),
            ("post.html", include_str!("voyage/post.html")),
            ("not_found.html", include_str!("voyage/not_found.html")),
            ("error.html", include_str!("voyage/error.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render the listing page
    pub fn listing(
        &self,
        config: &BlogConfig,
        posts: &[PostSummary],
        cursor: Option<&str>,
    ) -> Result<String> {
        let cards: Vec<PostCardData> = posts.iter().map(PostCardData::from_summary).collect();

        let mut context = base_context(config);
        context.insert("posts", &cards);
        context.insert("cursor", &cursor.map(html_escape));

        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render a post detail page
    pub fn post(
        &self,
        config: &BlogConfig,
        post: &PostDetail,
        reading: ReadingTime,
        neighbors: &Neighbors,
    ) -> Result<String> {
        let mut context = base_context(config);
        context.insert("post", &PostData::from_detail(post, reading));
        context.insert(
            "older",
            &neighbors.older.as_ref().map(NeighborData::from_summary),
        );
        context.insert(
            "newer",
            &neighbors.newer.as_ref().map(NeighborData::from_summary),
        );

        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the "post unavailable" page
    pub fn not_found(&self, config: &BlogConfig, uid: &str) -> Result<String> {
        let mut context = base_context(config);
        context.insert("uid", &html_escape(uid));
        Ok(self.tera.render("not_found.html", &context)?)
    }

    /// Render the generic fetch-failure page
    pub fn error_page(&self, config: &BlogConfig) -> Result<String> {
        Ok(self.tera.render("error.html", &base_context(config))?)
    }
}

fn base_context(config: &BlogConfig) -> Context {
    let mut context = Context::new();
    context.insert("config", &ConfigData::from_config(config));
    context
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
struct ConfigData {
    title: String,
    description: String,
    language: String,
}

impl ConfigData {
    fn from_config(config: &BlogConfig) -> Self {
        Self {
            title: html_escape(&config.title),
            description: html_escape(&config.description),
            language: html_escape(&config.language),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PostCardData {
    uid: String,
    title: String,
    subtitle: String,
    /// Pre-rendered `<time>` element, empty for unpublished posts
    date: String,
    author: String,
}

impl PostCardData {
    fn from_summary(post: &PostSummary) -> Self {
        Self {
            uid: html_escape(&post.uid),
            title: html_escape(&post.title),
            subtitle: html_escape(&post.subtitle),
            date: post.published_at.as_ref().map(time_tag).unwrap_or_default(),
            author: html_escape(&post.author),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PostData {
    title: String,
    author: String,
    banner: Option<String>,
    date: String,
    updated: String,
    reading_time: String,
    sections: Vec<SectionData>,
}

#[derive(Debug, Clone, Serialize)]
struct SectionData {
    heading: String,
    /// Rendered rich-text HTML, inserted unescaped
    body: String,
}

impl PostData {
    fn from_detail(post: &PostDetail, reading: ReadingTime) -> Self {
        let sections = post
            .content
            .iter()
            .map(|block| SectionData {
                heading: html_escape(&block.heading),
                body: block.body.as_html(),
            })
            .collect();

        Self {
            title: html_escape(&post.title),
            author: html_escape(&post.author),
            banner: post.banner.as_deref().map(html_escape),
            date: post.published_at.as_ref().map(time_tag).unwrap_or_default(),
            updated: post
                .updated_at
                .as_ref()
                .map(time_tag)
                .unwrap_or_default(),
            reading_time: reading.to_string(),
            sections,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct NeighborData {
    uid: String,
    title: String,
}

impl NeighborData {
    fn from_summary(post: &PostSummary) -> Self {
        Self {
            uid: html_escape(&post.uid),
            title: html_escape(&post.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new().unwrap()
    }

    fn summary(uid: &str, title: &str) -> PostSummary {
        PostSummary {
            uid: uid.to_string(),
            title: title.to_string(),
            subtitle: "sub".to_string(),
            author: "author".to_string(),
            published_at: None,
        }
    }

    fn detail(uid: &str, title: &str) -> PostDetail {
        PostDetail {
            uid: uid.to_string(),
            title: title.to_string(),
            subtitle: String::new(),
            author: "author".to_string(),
            published_at: None,
            updated_at: None,
            banner: None,
            content: Vec::new(),
        }
    }

    #[test]
    fn test_listing_escapes_titles() {
        let config = BlogConfig::default();
        let posts = vec![summary("p1", "On <script> safety")];
        let html = renderer().listing(&config, &posts, None).unwrap();
        assert!(html.contains("On &lt;script&gt; safety"));
        assert!(!html.contains("On <script> safety"));
    }

    #[test]
    fn test_listing_with_cursor_shows_button() {
        let config = BlogConfig::default();
        let html = renderer()
            .listing(&config, &[], Some("https://example.com/page2"))
            .unwrap();
        assert!(html.contains("Load more posts"));
        assert!(html.contains(r#"data-cursor="https://example.com/page2""#));
    }

    #[test]
    fn test_listing_without_cursor_hides_button() {
        let config = BlogConfig::default();
        let html = renderer().listing(&config, &[], None).unwrap();
        assert!(!html.contains("Load more posts"));
    }

    #[test]
    fn test_listing_dates_render_as_time_elements() {
        let config = BlogConfig::default();
        let mut post = summary("p1", "Dated post");
        post.published_at = Some(
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2021, 3, 5, 10, 0, 0)
                .unwrap(),
        );
        let html = renderer().listing(&config, &[post], None).unwrap();
        assert!(html.contains(r#"<time datetime="2021-03-05T10:00:00+00:00">05 Mar 2021</time>"#));
    }

    #[test]
    fn test_layout_emits_description_meta() {
        let mut config = BlogConfig::default();
        config.description = "A travel log".to_string();
        let html = renderer().listing(&config, &[], None).unwrap();
        assert!(html.contains(r#"<meta name="description" content="A travel log">"#));
    }

    #[test]
    fn test_empty_description_emits_no_meta() {
        let config = BlogConfig::default();
        let html = renderer().listing(&config, &[], None).unwrap();
        assert!(!html.contains(r#"name="description""#));
    }

    #[test]
    fn test_post_page_links_neighbors() {
        let config = BlogConfig::default();
        let neighbors = Neighbors {
            newer: Some(summary("newer-post", "Newer")),
            older: Some(summary("older-post", "Older")),
        };

        let html = renderer()
            .post(&config, &detail("current", "Current"), ReadingTime::Short, &neighbors)
            .unwrap();
        assert!(html.contains(r#"href="/post/newer-post""#));
        assert!(html.contains("Next post"));
        assert!(html.contains(r#"href="/post/older-post""#));
        assert!(html.contains("Previous post"));
        assert!(html.contains("quick read"));
    }

    #[test]
    fn test_post_page_without_neighbors_has_no_nav() {
        let config = BlogConfig::default();
        let html = renderer()
            .post(
                &config,
                &detail("lonely", "Lonely"),
                ReadingTime::Minutes(3),
                &Neighbors::default(),
            )
            .unwrap();
        assert!(!html.contains(r#"<nav class="neighbors">"#));
        assert!(html.contains("3 min"));
    }

    #[test]
    fn test_not_found_mentions_uid() {
        let config = BlogConfig::default();
        let html = renderer().not_found(&config, "missing-post").unwrap();
        assert!(html.contains("Post unavailable"));
        assert!(html.contains("missing-post"));
    }
}
