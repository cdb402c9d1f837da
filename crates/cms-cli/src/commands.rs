//! CLI command implementations.

use std::io::Write;

use cms_client::{CmsClient, MenuCategory};
use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline.
fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// List menu items, optionally restricted to one category.
pub async fn menu(
    client: &CmsClient,
    category: Option<MenuCategory>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let items = match category {
        Some(category) => client.menu_items_by_category(category).await?,
        None => client.menu_items().await?,
    };
    tracing::info!(count = items.len(), "Fetched menu");
    print_json(out, &items)
}

/// List content pages.
pub async fn pages(client: &CmsClient, out: &mut impl Write) -> anyhow::Result<()> {
    let pages = client.pages().await?;
    print_json(out, &pages)
}

/// Show a single page; prints `null` when no page has the slug.
pub async fn page(client: &CmsClient, slug: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let page = client.page_by_slug(slug).await?;
    if page.is_none() {
        tracing::info!(%slug, "No page with this slug");
    }
    print_json(out, &page)
}

/// Show site settings; prints `null` when they are missing or unavailable.
pub async fn settings(client: &CmsClient, out: &mut impl Write) -> anyhow::Result<()> {
    let settings = client.site_settings().await;
    print_json(out, &settings)
}
