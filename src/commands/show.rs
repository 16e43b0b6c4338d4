//! Show a single post

use anyhow::Result;

use crate::cms::ContentRepository;
use crate::content::ReadingTime;
use crate::helpers::date::short_date;
use crate::Voyage;

/// Print a post's metadata and plain-text content
pub async fn run(voyage: &Voyage, uid: &str) -> Result<()> {
    let client = voyage.client()?;

    let Some(document) = client.get_by_uid(uid).await? else {
        anyhow::bail!("post not found: {}", uid);
    };

    let post = document.to_detail();
    let reading = ReadingTime::estimate(&post.content);

    println!("{}", post.title);
    if !post.subtitle.is_empty() {
        println!("{}", post.subtitle);
    }
    if let Some(date) = &post.published_at {
        println!("published {} by {} ({})", short_date(date), post.author, reading);
    } else {
        println!("unpublished, by {} ({})", post.author, reading);
    }
    if let Some(updated) = &post.updated_at {
        println!("edited {}", short_date(updated));
    }

    for block in &post.content {
        println!();
        if !block.heading.is_empty() {
            println!("# {}", block.heading);
        }
        println!("{}", block.body.as_text());
    }

    Ok(())
}
