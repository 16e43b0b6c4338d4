//! Content models and pure content operations

mod neighbors;
mod post;
mod reading;
mod richtext;

pub use neighbors::Neighbors;
pub use post::{ContentBlock, PostDetail, PostSummary};
pub use reading::ReadingTime;
pub use richtext::{Block, BlockKind, RichText};
