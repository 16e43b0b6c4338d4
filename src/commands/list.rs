//! List posts from the content repository

use anyhow::Result;

use crate::cms::{ContentRepository, QueryOptions};
use crate::feed::Feed;
use crate::helpers::date::short_date;
use crate::Voyage;

/// List posts; with `all`, follow cursors until the repository is
/// exhausted
pub async fn run(voyage: &Voyage, all: bool) -> Result<()> {
    let client = voyage.client()?;
    let opts = QueryOptions::new(voyage.config.page_size);

    let mut feed = Feed::new(client.query_page(&opts).await?);

    if all {
        let client_ref = &client;
        while feed
            .advance(|cursor| async move { client_ref.fetch_url(&cursor).await })
            .await?
        {}
    }

    println!("Posts ({}):", feed.loaded().len());
    for post in feed.loaded() {
        let date = post
            .published_at
            .map(|d| short_date(&d))
            .unwrap_or_else(|| "unpublished".to_string());
        println!("  {} - {} [{}]", date, post.title, post.uid);
    }

    if let Some(cursor) = feed.cursor() {
        println!("More posts available (cursor: {})", cursor);
    }

    Ok(())
}
