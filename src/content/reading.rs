//! Reading-time estimation
//!
//! Word counts come from block headings plus the plain-text rendering of
//! block bodies; a word is any whitespace-separated run of characters.
//! The estimate rounds minutes up, which slightly overstates reading
//! time for short posts.

use std::fmt;

use super::ContentBlock;

/// Fixed reading speed used for the estimate
pub const WORDS_PER_MINUTE: u64 = 200;

/// An estimated reading duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingTime {
    /// Sub-minute read. Only reachable at word count zero under ceiling
    /// rounding; kept to match the original behavior.
    Short,
    /// Whole minutes, 1 to 59
    Minutes(u64),
    /// Whole hours, remainder minutes are not reported
    Hours(u64),
}

impl ReadingTime {
    /// Estimate the reading time of a post's content sections
    pub fn estimate(content: &[ContentBlock]) -> Self {
        Self::from_word_count(word_count(content))
    }

    /// Classify a word count into a reading duration
    pub fn from_word_count(words: u64) -> Self {
        let minutes = words.div_ceil(WORDS_PER_MINUTE);
        if minutes < 1 {
            ReadingTime::Short
        } else if minutes < 60 {
            ReadingTime::Minutes(minutes)
        } else {
            ReadingTime::Hours(minutes / 60)
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingTime::Short => write!(f, "quick read"),
            ReadingTime::Minutes(m) => write!(f, "{} min", m),
            ReadingTime::Hours(h) => write!(f, "{} h", h),
        }
    }
}

/// Count the words of every section heading and body
pub fn word_count(content: &[ContentBlock]) -> u64 {
    content
        .iter()
        .map(|block| count_words(&block.heading) + count_words(&block.body.as_text()))
        .sum()
}

fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, RichText};

    fn block_with_words(n: usize) -> ContentBlock {
        let text = vec!["word"; n].join(" ");
        ContentBlock {
            heading: String::new(),
            body: RichText(vec![Block::paragraph(&text)]),
        }
    }

    #[test]
    fn test_empty_content_is_a_quick_read() {
        assert_eq!(ReadingTime::estimate(&[]), ReadingTime::Short);
        assert_eq!(ReadingTime::from_word_count(0), ReadingTime::Short);
    }

    #[test]
    fn test_minute_boundaries() {
        assert_eq!(ReadingTime::from_word_count(1), ReadingTime::Minutes(1));
        assert_eq!(ReadingTime::from_word_count(200), ReadingTime::Minutes(1));
        assert_eq!(ReadingTime::from_word_count(201), ReadingTime::Minutes(2));
        assert_eq!(ReadingTime::from_word_count(11_800), ReadingTime::Minutes(59));
    }

    #[test]
    fn test_hour_boundaries() {
        // 12,000 words is exactly 60 minutes, reported as one hour
        assert_eq!(ReadingTime::from_word_count(12_000), ReadingTime::Hours(1));
        assert_eq!(ReadingTime::from_word_count(11_801), ReadingTime::Hours(1));
        // Partial hours are dropped
        assert_eq!(ReadingTime::from_word_count(30_000), ReadingTime::Hours(2));
    }

    #[test]
    fn test_word_splitting_ignores_extra_whitespace() {
        let block = ContentBlock {
            heading: "  Hello   World  ".to_string(),
            body: RichText::default(),
        };
        assert_eq!(word_count(&[block]), 2);
    }

    #[test]
    fn test_heading_and_body_both_count() {
        let block = ContentBlock {
            heading: "two words".to_string(),
            body: RichText(vec![Block::paragraph("three more words")]),
        };
        assert_eq!(word_count(&[block]), 5);
    }

    #[test]
    fn test_estimate_matches_manual_count() {
        let content = vec![block_with_words(150), block_with_words(150)];
        assert_eq!(word_count(&content), 300);
        assert_eq!(ReadingTime::estimate(&content), ReadingTime::Minutes(2));
    }

    #[test]
    fn test_estimate_is_pure() {
        let content = vec![block_with_words(450)];
        assert_eq!(
            ReadingTime::estimate(&content),
            ReadingTime::estimate(&content)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadingTime::Short.to_string(), "quick read");
        assert_eq!(ReadingTime::Minutes(4).to_string(), "4 min");
        assert_eq!(ReadingTime::Hours(2).to_string(), "2 h");
    }
}
