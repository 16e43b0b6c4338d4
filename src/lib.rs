//! voyage: a blog front-end for headless CMS content
//!
//! This crate fetches blog posts from a Prismic-style content repository,
//! shapes them into typed models, and serves a listing page with
//! incremental "load more" pagination plus post detail pages with
//! reading-time estimates and older/newer navigation.

pub mod cms;
pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main voyage application
#[derive(Clone)]
pub struct Voyage {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Voyage {
    /// Create a new Voyage instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_voyage.yml");

        let mut config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };
        config.apply_env();

        Ok(Self { config, base_dir })
    }

    /// Build a content repository client from the configuration
    pub fn client(&self) -> Result<cms::PrismicClient> {
        Ok(cms::PrismicClient::new(&self.config)?)
    }
}
