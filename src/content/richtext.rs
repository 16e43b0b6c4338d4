//! Structured rich-text documents and their rendering
//!
//! The content repository delivers post bodies as ordered sequences of
//! typed text blocks rather than markup. `as_text` flattens a document
//! for word counting, `as_html` renders it for display.

use serde::{Deserialize, Serialize};

use crate::helpers::html::html_escape;

/// A rich-text document: an ordered sequence of text-bearing blocks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Block>);

/// One block of a rich-text document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type", default)]
    pub kind: BlockKind,

    #[serde(default)]
    pub text: String,

    /// Image source, only present on image blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Image alt text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// The block types the repository emits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    ListItem,
    OListItem,
    Preformatted,
    Image,
    #[serde(other)]
    Other,
}

impl RichText {
    /// Flatten the document to plain text, one line per text block.
    /// Image blocks carry no words and are skipped.
    pub fn as_text(&self) -> String {
        self.0
            .iter()
            .filter(|b| b.kind != BlockKind::Image)
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the document as HTML. Block text is escaped; consecutive
    /// list items are grouped into a single list element.
    pub fn as_html(&self) -> String {
        let mut html = String::new();
        let blocks = &self.0;
        let mut i = 0;

        while i < blocks.len() {
            let block = &blocks[i];
            match block.kind {
                BlockKind::Paragraph | BlockKind::Other => {
                    html.push_str(&format!("<p>{}</p>", html_escape(&block.text)));
                    i += 1;
                }
                BlockKind::Heading1
                | BlockKind::Heading2
                | BlockKind::Heading3
                | BlockKind::Heading4
                | BlockKind::Heading5
                | BlockKind::Heading6 => {
                    let level = heading_level(block.kind);
                    html.push_str(&format!(
                        "<h{}>{}</h{}>",
                        level,
                        html_escape(&block.text),
                        level
                    ));
                    i += 1;
                }
                BlockKind::Preformatted => {
                    html.push_str(&format!("<pre>{}</pre>", html_escape(&block.text)));
                    i += 1;
                }
                BlockKind::Image => {
                    if let Some(url) = &block.url {
                        html.push_str(&format!(
                            r#"<img src="{}" alt="{}">"#,
                            html_escape(url),
                            html_escape(block.alt.as_deref().unwrap_or(""))
                        ));
                    }
                    i += 1;
                }
                BlockKind::ListItem | BlockKind::OListItem => {
                    let tag = if block.kind == BlockKind::ListItem {
                        "ul"
                    } else {
                        "ol"
                    };
                    let kind = block.kind;
                    html.push_str(&format!("<{}>", tag));
                    while i < blocks.len() && blocks[i].kind == kind {
                        html.push_str(&format!("<li>{}</li>", html_escape(&blocks[i].text)));
                        i += 1;
                    }
                    html.push_str(&format!("</{}>", tag));
                }
            }
        }

        html
    }
}

fn heading_level(kind: BlockKind) -> u8 {
    match kind {
        BlockKind::Heading1 => 1,
        BlockKind::Heading2 => 2,
        BlockKind::Heading3 => 3,
        BlockKind::Heading4 => 4,
        BlockKind::Heading5 => 5,
        BlockKind::Heading6 => 6,
        _ => 6,
    }
}

impl Block {
    /// A plain paragraph block
    pub fn paragraph(text: &str) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.to_string(),
            url: None,
            alt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text_joins_blocks() {
        let body = RichText(vec![Block::paragraph("first"), Block::paragraph("second")]);
        assert_eq!(body.as_text(), "first\nsecond");
    }

    #[test]
    fn test_as_text_skips_images() {
        let body = RichText(vec![
            Block::paragraph("visible"),
            Block {
                kind: BlockKind::Image,
                text: String::new(),
                url: Some("https://example.com/a.png".to_string()),
                alt: Some("not words".to_string()),
            },
        ]);
        assert_eq!(body.as_text(), "visible");
    }

    #[test]
    fn test_as_html_paragraph_and_heading() {
        let body = RichText(vec![
            Block {
                kind: BlockKind::Heading2,
                text: "Section".to_string(),
                url: None,
                alt: None,
            },
            Block::paragraph("Hello <world>"),
        ]);
        assert_eq!(
            body.as_html(),
            "<h2>Section</h2><p>Hello &lt;world&gt;</p>"
        );
    }

    #[test]
    fn test_as_html_groups_list_items() {
        let item = |text: &str| Block {
            kind: BlockKind::ListItem,
            text: text.to_string(),
            url: None,
            alt: None,
        };
        let body = RichText(vec![item("one"), item("two"), Block::paragraph("after")]);
        assert_eq!(
            body.as_html(),
            "<ul><li>one</li><li>two</li></ul><p>after</p>"
        );
    }

    #[test]
    fn test_deserialize_repository_shape() {
        let json = r#"[
            {"type": "paragraph", "text": "hello", "spans": []},
            {"type": "o-list-item", "text": "step", "spans": []},
            {"type": "image", "url": "https://example.com/x.png", "alt": "x"}
        ]"#;
        let body: RichText = serde_json::from_str(json).unwrap();
        assert_eq!(body.0.len(), 3);
        assert_eq!(body.0[0].kind, BlockKind::Paragraph);
        assert_eq!(body.0[1].kind, BlockKind::OListItem);
        assert_eq!(body.0[2].kind, BlockKind::Image);
    }

    #[test]
    fn test_unknown_block_kind_is_tolerated() {
        let json = r#"[{"type": "embed", "text": ""}]"#;
        let body: RichText = serde_json::from_str(json).unwrap();
        assert_eq!(body.0[0].kind, BlockKind::Other);
    }
}
