//! # Café CMS Client
//!
//! Typed, read-only client for the headless CMS behind the café website.
//!
//! ## Features
//!
//! - **Menu**: all menu items, or the items of one [`MenuCategory`]
//! - **Pages**: every content page, or a single page looked up by slug
//! - **Site settings**: the singleton settings record, which degrades to
//!   `None` instead of failing
//! - **Media**: resolution of relative upload paths against the backend origin
//!
//! Requests are plain `GET`s against `<base-url>/api/...`. When an API token is
//! configured it is sent as a bearer credential. Responses are checked against
//! the typed records and a mismatch is reported as [`CmsError::Decode`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use cms_client::{ClientConfig, CmsClient};
//!
//! #[tokio::main]
//! async fn main() -> cms_client::Result<()> {
//!     let config = ClientConfig::new("http://localhost:1337")?.with_token("cms_xxx");
//!     let client = CmsClient::new(config)?;
//!
//!     for item in client.menu_items().await? {
//!         println!("{} - {:.2}", item.name, item.price);
//!     }
//!
//!     if let Some(page) = client.page_by_slug("about").await? {
//!         println!("{}", page.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

pub use client::CmsClient;
pub use config::ClientConfig;
pub use endpoint::{Endpoint, FailureMode};
pub use error::{CmsError, Result};
pub use types::*;

/// Version of the client library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
