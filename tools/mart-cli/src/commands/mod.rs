//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod feed;
pub mod home;
pub mod hot;
pub mod login;
pub mod order;
pub mod pay;

use clap::{Args, Subcommand, ValueEnum};
use mart_commerce::catalog::DistributionSite;

/// Banner placement.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SiteArg {
    #[default]
    Home,
    Category,
}

impl From<SiteArg> for DistributionSite {
    fn from(site: SiteArg) -> Self {
        match site {
            SiteArg::Home => DistributionSite::Home,
            SiteArg::Category => DistributionSite::Category,
        }
    }
}

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Banner placement.
    #[arg(long, value_enum, default_value_t = SiteArg::Home)]
    pub site: SiteArg,
}

/// Arguments for the feed command.
#[derive(Args)]
pub struct FeedArgs {
    /// Number of pages to load (default: feed.pages from config).
    #[arg(short, long)]
    pub pages: Option<u32>,
}

/// Arguments for the hot command.
#[derive(Args)]
pub struct HotArgs {
    /// Hot-list path, e.g. /hot/preference.
    pub path: String,

    /// Tab to page through.
    #[arg(short, long)]
    pub sub_type: Option<String>,

    /// Number of pages to load for the tab.
    #[arg(short, long, default_value = "1")]
    pub pages: u32,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// List cart lines.
    List,
    /// Add a SKU.
    Add {
        /// SKU ID.
        sku: String,
        /// Quantity to add.
        #[arg(long, default_value = "1")]
        count: i64,
    },
    /// Remove one or more SKUs.
    Remove {
        /// SKU IDs.
        #[arg(required = true)]
        skus: Vec<String>,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Change quantity or selection of one line.
    Update {
        /// SKU ID.
        sku: String,
        /// New quantity.
        #[arg(long)]
        count: Option<i64>,
        /// New selection flag.
        #[arg(long)]
        selected: Option<bool>,
    },
    /// Select every line.
    SelectAll {
        /// Deselect every line instead.
        #[arg(long)]
        clear: bool,
    },
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Order ID; lists orders when omitted.
    pub id: Option<String>,

    /// Only orders in this state (1-6).
    #[arg(short, long)]
    pub state: Option<i64>,

    /// Page to list.
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

/// Arguments for the pay command.
#[derive(Args)]
pub struct PayArgs {
    /// Order ID.
    pub order_id: String,

    /// Use the development mock payment.
    #[arg(long)]
    pub mock: bool,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Log in with a phone number (development backends).
    #[arg(long, conflicts_with = "code", required_unless_present = "code")]
    pub phone: Option<String>,

    /// Log in with a mini-program login code.
    #[arg(long)]
    pub code: Option<String>,

    /// Write the token to the config file.
    #[arg(long)]
    pub save: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
