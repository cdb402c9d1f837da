//! Café CMS CLI - inspect menu items, pages and site settings from the terminal.

use std::time::Duration;

use clap::{Parser, Subcommand};
use cms_client::{ClientConfig, CmsClient, MenuCategory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Café CMS - read content from the headless CMS
#[derive(Parser, Debug)]
#[command(name = "cafe-cms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend origin
    #[arg(long, env = "STRAPI_URL", default_value = cms_client::config::DEFAULT_BASE_URL)]
    url: String,

    /// API token sent as a bearer credential
    #[arg(long, env = "STRAPI_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List menu items
    Menu {
        /// Only show one category (drink, bite, other)
        #[arg(short, long)]
        category: Option<MenuCategory>,
    },

    /// List content pages
    Pages,

    /// Show a single page
    Page {
        /// Page slug
        slug: String,
    },

    /// Show site settings
    Settings,

    /// Show version information
    Version,
}

impl Cli {
    fn client_config(&self) -> cms_client::Result<ClientConfig> {
        let mut config = ClientConfig::new(&self.url)?;
        if let Some(token) = &self.token {
            config = config.with_token(token.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("cms_client={log_level},cafe_cms={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Version = cli.command {
        println!("cafe-cms {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let client = CmsClient::new(cli.client_config()?)?;
    tracing::info!(url = %client.base_url(), "Using CMS backend");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Menu { category } => commands::menu(&client, category, &mut out).await,
        Commands::Pages => commands::pages(&client, &mut out).await,
        Commands::Page { slug } => commands::page(&client, &slug, &mut out).await,
        Commands::Settings => commands::settings(&client, &mut out).await,
        Commands::Version => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_with_category() {
        let cli = Cli::try_parse_from([
            "cafe-cms",
            "--url",
            "http://cms.local:1337",
            "menu",
            "--category",
            "bite",
        ])
        .unwrap();

        assert_eq!(cli.url, "http://cms.local:1337");
        assert!(matches!(
            cli.command,
            Commands::Menu {
                category: Some(MenuCategory::Bite)
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = Cli::try_parse_from(["cafe-cms", "menu", "--category", "dessert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_page_slug() {
        let cli = Cli::try_parse_from(["cafe-cms", "-vv", "page", "about-us"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Page { ref slug } if slug == "about-us"));
    }

    #[test]
    fn test_client_config_from_flags() {
        let cli = Cli::try_parse_from([
            "cafe-cms",
            "--url",
            "https://cms.example.com",
            "--token",
            "abc",
            "--timeout-secs",
            "3",
            "settings",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.base_url.as_str(), "https://cms.example.com/");
        assert_eq!(config.api_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_client_config_rejects_bad_url() {
        let cli = Cli::try_parse_from(["cafe-cms", "--url", "not a url", "pages"]).unwrap();
        assert!(cli.client_config().is_err());
    }
}
