//! Records returned by the CMS and the envelopes that wrap them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu section an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    /// Coffee, tea, juices.
    Drink,
    /// Food.
    Bite,
    /// Anything else sold over the counter.
    Other,
}

impl MenuCategory {
    /// All categories, in menu order.
    pub const ALL: [MenuCategory; 3] = [MenuCategory::Drink, MenuCategory::Bite, MenuCategory::Other];

    /// Wire value used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuCategory::Drink => "drink",
            MenuCategory::Bite => "bite",
            MenuCategory::Other => "other",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `drink`, `bite` or `other`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu category '{0}', expected one of: drink, bite, other")]
pub struct ParseCategoryError(String);

impl FromStr for MenuCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drink" => Ok(MenuCategory::Drink),
            "bite" => Ok(MenuCategory::Bite),
            "other" => Ok(MenuCategory::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// An uploaded asset (image) attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Either absolute (CDN) or relative to the backend origin (`/uploads/...`).
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A sellable item on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    pub document_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: MenuCategory,
    pub price: f64,
    pub available: bool,
    #[serde(default)]
    pub image: Option<Media>,
}

/// A content page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: u64,
    pub document_id: String,
    pub title: String,
    pub slug: String,
    /// Rich text / markup body.
    pub content: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Site-wide settings. At most one exists on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: u64,
    pub document_id: String,
    pub site_name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub our_story_text: String,
    #[serde(default)]
    pub about_page_content: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub tiktok_url: Option<String>,
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default)]
    pub hero_image: Option<Media>,
}

/// Pagination block of a list envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub page_count: u64,
    pub total: u64,
}

/// Metadata of a list envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Envelope returned by collection endpoints: `{ data: [...], meta: { pagination } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: ListMeta,
}

impl<T> ListResponse<T> {
    /// The records, in server order.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// The first record, if any.
    pub fn into_first(self) -> Option<T> {
        self.data.into_iter().next()
    }
}

/// Envelope returned by singleton endpoints: `{ data: {...}, meta: {} }`.
///
/// `data` is `null` when the singleton has never been saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub meta: serde_json::Value,
}
