//! Content repository client
//!
//! `ContentRepository` is the seam the rest of the crate works against;
//! `PrismicClient` is the HTTP implementation. The client resolves the
//! repository's master ref before each query and treats the `next_page`
//! value in responses as an opaque cursor, following it verbatim.

use async_trait::async_trait;
use serde::Deserialize;

use super::document::{warn_on_duplicate_uids, RawDocument};
use super::error::RepositoryError;
use crate::config::BlogConfig;
use crate::feed::PostPage;

/// Options for a listing query
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Number of documents per page
    pub page_size: usize,
    /// Fields to fetch, e.g. `post.title`; empty means all fields
    pub fetch: Vec<String>,
}

impl QueryOptions {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            fetch: Vec::new(),
        }
    }

    pub fn with_fetch(mut self, fields: Vec<String>) -> Self {
        self.fetch = fields;
        self
    }
}

/// Read access to the content repository
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch the first listing page, newest first
    async fn query_page(&self, opts: &QueryOptions) -> Result<PostPage, RepositoryError>;

    /// Follow an opaque pagination cursor verbatim
    async fn fetch_url(&self, url: &str) -> Result<PostPage, RepositoryError>;

    /// Fetch a single document by uid; unknown uids are `Ok(None)`
    async fn get_by_uid(&self, uid: &str) -> Result<Option<RawDocument>, RepositoryError>;
}

/// HTTP client for a Prismic-style repository API
pub struct PrismicClient {
    http: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
    document_type: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    next_page: Option<String>,
    #[serde(default)]
    results: Vec<RawDocument>,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master: bool,
}

impl PrismicClient {
    /// Create a client from the blog configuration. The endpoint and
    /// token are explicit constructor input, never global state.
    pub fn new(config: &BlogConfig) -> Result<Self, RepositoryError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("voyage/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            document_type: config.document_type.clone(),
        })
    }

    /// Resolve the ref pointing at the currently published content
    async fn master_ref(&self) -> Result<String, RepositoryError> {
        let mut request = self.http.get(&self.api_url);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        let info: ApiInfo = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info.refs
            .into_iter()
            .find(|r| r.is_master)
            .map(|r| r.reference)
            .ok_or_else(|| {
                RepositoryError::Repository("api metadata has no master ref".to_string())
            })
    }

    async fn search(
        &self,
        predicate: String,
        opts: &QueryOptions,
    ) -> Result<SearchResponse, RepositoryError> {
        let reference = self.master_ref().await?;

        let mut params: Vec<(&str, String)> = vec![
            ("ref", reference),
            ("q", predicate),
            ("pageSize", opts.page_size.to_string()),
            (
                "orderings",
                "[document.first_publication_date desc]".to_string(),
            ),
        ];
        if !opts.fetch.is_empty() {
            params.push(("fetch", opts.fetch.join(",")));
        }
        if let Some(token) = &self.access_token {
            params.push(("access_token", token.clone()));
        }

        let url = format!("{}/documents/search", self.api_url);
        tracing::debug!("querying repository: {}", url);

        let response: SearchResponse = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response)
    }

    fn to_page(response: SearchResponse) -> PostPage {
        let results: Vec<_> = response.results.iter().map(RawDocument::to_summary).collect();
        warn_on_duplicate_uids(&results);
        PostPage {
            results,
            next_page: response.next_page,
        }
    }
}

#[async_trait]
impl ContentRepository for PrismicClient {
    async fn query_page(&self, opts: &QueryOptions) -> Result<PostPage, RepositoryError> {
        let response = self
            .search(type_predicate(&self.document_type), opts)
            .await?;
        Ok(Self::to_page(response))
    }

    async fn fetch_url(&self, url: &str) -> Result<PostPage, RepositoryError> {
        tracing::debug!("following cursor: {}", url);

        let response: SearchResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Self::to_page(response))
    }

    async fn get_by_uid(&self, uid: &str) -> Result<Option<RawDocument>, RepositoryError> {
        let opts = QueryOptions::new(1);
        let response = self
            .search(uid_predicate(&self.document_type, uid), &opts)
            .await?;
        Ok(response.results.into_iter().next())
    }
}

/// Predicate selecting every document of a type
fn type_predicate(document_type: &str) -> String {
    format!("[[at(document.type,\"{}\")]]", document_type)
}

/// Predicate selecting a single document by uid
fn uid_predicate(document_type: &str, uid: &str) -> String {
    format!("[[at(my.{}.uid,\"{}\")]]", document_type, uid)
}
