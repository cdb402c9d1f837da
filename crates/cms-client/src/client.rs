//! HTTP client for the CMS REST API.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, FailureMode};
use crate::error::{CmsError, Result};
use crate::types::{ListResponse, Media, MenuCategory, MenuItem, Page, SingleResponse, SiteSettings};

/// Read-only client for the café CMS.
///
/// The client is cheaply cloneable; clones share one connection pool and can
/// be used from concurrent tasks.
///
/// # Examples
///
/// ```rust,ignore
/// use cms_client::{CmsClient, ClientConfig, MenuCategory};
///
/// let client = CmsClient::new(ClientConfig::from_env()?)?;
///
/// let (drinks, settings) = tokio::join!(
///     client.menu_items_by_category(MenuCategory::Drink),
///     client.site_settings(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl CmsClient {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(CmsError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_token: config.api_token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Create a client configured from `STRAPI_URL` and `STRAPI_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The backend origin requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.api_token.as_ref().map(|t| format!("Bearer {t}"))
    }

    /// Perform a GET against `endpoint` and decode the JSON body as `T`.
    ///
    /// This is the request helper underneath every accessor. It ignores the
    /// endpoint's [`FailureMode`]; see [`CmsClient::settle`].
    ///
    /// # Errors
    ///
    /// * [`CmsError::Network`] - No response was received
    /// * [`CmsError::Status`] - The backend answered with a non-success status
    /// * [`CmsError::Decode`] - The body does not have the shape of `T`
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = endpoint.url(&self.base_url);
        debug!(
            endpoint = %endpoint,
            url = %url,
            authenticated = self.api_token.is_some(),
            "Fetching from CMS"
        );

        let mut request = self.http.get(url).header(CONTENT_TYPE, "application/json");
        if let Some(auth) = self.auth_header() {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request.send().await.map_err(|source| CmsError::Network {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %endpoint, status = status.as_u16(), "CMS returned an error status");
            return Err(CmsError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|source| CmsError::Network {
            endpoint: endpoint.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| CmsError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Apply `endpoint`'s [`FailureMode`] to the outcome of a request.
    ///
    /// [`FailureMode::Propagate`] returns `result` untouched.
    /// [`FailureMode::Degrade`] logs any error and replaces it with
    /// `T::default()` (`None` for single records).
    pub fn settle<T: Default>(endpoint: &Endpoint, result: Result<T>) -> Result<T> {
        match (endpoint.failure_mode(), result) {
            (_, Ok(value)) => Ok(value),
            (FailureMode::Propagate, Err(err)) => Err(err),
            (FailureMode::Degrade, Err(err)) => {
                error!(endpoint = %endpoint, error = %err, "CMS request failed, continuing without data");
                Ok(T::default())
            }
        }
    }

    async fn request<T, R, F>(&self, endpoint: Endpoint, extract: F) -> Result<R>
    where
        T: DeserializeOwned,
        R: Default,
        F: FnOnce(T) -> R,
    {
        let result = self.fetch::<T>(&endpoint).await.map(extract);
        Self::settle(&endpoint, result)
    }

    /// All menu items, with their image expanded.
    ///
    /// # Errors
    ///
    /// Propagates any [`CmsError`] from the request.
    pub async fn menu_items(&self) -> Result<Vec<MenuItem>> {
        let items = self
            .request(Endpoint::menu_items(), ListResponse::<MenuItem>::into_data)
            .await?;
        debug!(count = items.len(), "Fetched menu items");
        Ok(items)
    }

    /// Menu items in one category, with their image expanded.
    ///
    /// # Errors
    ///
    /// Propagates any [`CmsError`] from the request.
    pub async fn menu_items_by_category(&self, category: MenuCategory) -> Result<Vec<MenuItem>> {
        let items = self
            .request(
                Endpoint::menu_items_by_category(category),
                ListResponse::<MenuItem>::into_data,
            )
            .await?;
        debug!(%category, count = items.len(), "Fetched menu items");
        Ok(items)
    }

    /// All content pages.
    ///
    /// # Errors
    ///
    /// Propagates any [`CmsError`] from the request.
    pub async fn pages(&self) -> Result<Vec<Page>> {
        let pages = self
            .request(Endpoint::pages(), ListResponse::<Page>::into_data)
            .await?;
        debug!(count = pages.len(), "Fetched pages");
        Ok(pages)
    }

    /// The page with the given slug, or `None` if no page matches.
    ///
    /// # Errors
    ///
    /// Propagates any [`CmsError`] from the request. A missing page is not an error.
    pub async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>> {
        self.request(Endpoint::page_by_slug(slug), ListResponse::<Page>::into_first)
            .await
    }

    /// The site settings singleton.
    ///
    /// Returns `None` when the settings have not been configured *or* the
    /// request failed for any reason; failures are logged, never returned.
    pub async fn site_settings(&self) -> Option<SiteSettings> {
        // Degrading endpoints settle every error into `None`.
        self.request(Endpoint::site_settings(), |response: SingleResponse<SiteSettings>| {
            response.data
        })
        .await
        .unwrap_or_default()
    }

    /// Absolute URL for an uploaded asset.
    ///
    /// Locally stored uploads come back as paths (`/uploads/...`) and are
    /// appended to the base URL, keeping any path prefix it has
    /// (`https://host/cms` gives `https://host/cms/uploads/...`). Absolute
    /// and protocol-relative URLs are resolved as usual.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::InvalidUrl`] if the media URL cannot be parsed.
    pub fn media_url(&self, media: &Media) -> Result<Url> {
        match Url::parse(&media.url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) if media.url.starts_with("//") => {
                Ok(self.base_url.join(&media.url)?)
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let mut base = self.base_url.clone();
                let prefix = self.base_url.path().trim_end_matches('/');
                base.set_path(&format!("{prefix}/"));
                base.set_query(None);
                base.set_fragment(None);
                Ok(base.join(media.url.trim_start_matches('/'))?)
            }
            Err(e) => Err(e.into()),
        }
    }
}
