//! Endpoint definitions for the CMS REST API.
//!
//! Every accessor on [`CmsClient`](crate::CmsClient) is backed by one of the
//! constructors here. An [`Endpoint`] carries the path below `/api`, the
//! query parameters (in order) and the [`FailureMode`] that decides what the
//! accessor does when the request fails.

use std::fmt;

use url::Url;

use crate::types::MenuCategory;

/// What an accessor does with a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Return the error to the caller.
    Propagate,
    /// Log the error and return `None`. Callers treat the record as not configured.
    Degrade,
}

/// A GET request against the CMS, relative to `<base-url>/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
    failure_mode: FailureMode,
}

impl Endpoint {
    /// Create an endpoint for `path`. A missing leading `/` is added.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        Self {
            path,
            query: Vec::new(),
            failure_mode: FailureMode::Propagate,
        }
    }

    /// Append a query parameter. Key and value are percent-encoded when the URL is built.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the failure mode.
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// `/menu-items?populate=image`
    pub fn menu_items() -> Self {
        Self::new("/menu-items").with_query("populate", "image")
    }

    /// `/menu-items?filters[type][$eq]=<category>&populate=image`
    pub fn menu_items_by_category(category: MenuCategory) -> Self {
        Self::new("/menu-items")
            .with_query("filters[type][$eq]", category.as_str())
            .with_query("populate", "image")
    }

    /// `/pages`
    pub fn pages() -> Self {
        Self::new("/pages")
    }

    /// `/pages?filters[slug][$eq]=<slug>`
    pub fn page_by_slug(slug: &str) -> Self {
        Self::new("/pages").with_query("filters[slug][$eq]", slug)
    }

    /// `/site-setting?populate=*`, degrading to `None` on failure.
    pub fn site_settings() -> Self {
        Self::new("/site-setting")
            .with_query("populate", "*")
            .with_failure_mode(FailureMode::Degrade)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    /// Build the absolute request URL below `base`.
    ///
    /// Any path on `base` is kept as a prefix (`https://host/cms` gives
    /// `https://host/cms/api/...`); its query and fragment are dropped.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let prefix = base.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}/api{}", self.path));
        url.set_query(None);
        url.set_fragment(None);

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        url
    }
}

/// Human-readable form used in logs and error messages, e.g.
/// `/menu-items?filters[type][$eq]=drink&populate=image`. Not encoded.
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:1337").unwrap()
    }

    #[test]
    fn test_menu_items_url() {
        let endpoint = Endpoint::menu_items();
        assert_eq!(
            endpoint.url(&base()).as_str(),
            "http://localhost:1337/api/menu-items?populate=image"
        );
        assert_eq!(endpoint.to_string(), "/menu-items?populate=image");
        assert_eq!(endpoint.failure_mode(), FailureMode::Propagate);
    }

    #[test]
    fn test_menu_items_by_category_encodes_filter_key() {
        let endpoint = Endpoint::menu_items_by_category(MenuCategory::Drink);
        assert_eq!(
            endpoint.url(&base()).as_str(),
            "http://localhost:1337/api/menu-items?filters%5Btype%5D%5B%24eq%5D=drink&populate=image"
        );
        assert_eq!(
            endpoint.to_string(),
            "/menu-items?filters[type][$eq]=drink&populate=image"
        );
    }

    #[test]
    fn test_every_category_lands_in_query() {
        for category in MenuCategory::ALL {
            let url = Endpoint::menu_items_by_category(category).url(&base());
            let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            assert_eq!(
                pairs,
                vec![
                    ("filters[type][$eq]".to_string(), category.to_string()),
                    ("populate".to_string(), "image".to_string()),
                ]
            );
        }
    }

    #[test]
    fn test_pages_url_has_no_query() {
        let url = Endpoint::pages().url(&base());
        assert_eq!(url.as_str(), "http://localhost:1337/api/pages");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_page_by_slug_escapes_special_characters() {
        let slug = "menu & prices #2";
        let url = Endpoint::page_by_slug(slug).url(&base());

        assert_eq!(
            url.as_str(),
            "http://localhost:1337/api/pages?filters%5Bslug%5D%5B%24eq%5D=menu+%26+prices+%232"
        );
        assert!(url.fragment().is_none());
        let (_, value) = url.query_pairs().next().unwrap();
        assert_eq!(value, slug);
    }

    #[test]
    fn test_site_settings_degrades() {
        let endpoint = Endpoint::site_settings();
        assert_eq!(endpoint.failure_mode(), FailureMode::Degrade);
        assert_eq!(
            endpoint.url(&base()).as_str(),
            "http://localhost:1337/api/site-setting?populate=*"
        );
    }

    #[test]
    fn test_base_path_is_kept_as_prefix() {
        let base = Url::parse("https://example.com/cms/?stale=1#frag").unwrap();
        assert_eq!(
            Endpoint::pages().url(&base).as_str(),
            "https://example.com/cms/api/pages"
        );
    }

    #[test]
    fn test_new_adds_leading_slash() {
        assert_eq!(Endpoint::new("pages").path(), "/pages");
        assert_eq!(Endpoint::new("/pages").path(), "/pages");
    }
}
