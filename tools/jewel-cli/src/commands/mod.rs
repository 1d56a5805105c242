//! CLI command implementations.

pub mod browse;
pub mod check;
pub mod link;
pub mod render;
pub mod show;

use clap::Args;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Fail when the config still holds placeholder values.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Diamond group (white, color, melee, fancy).
    #[arg(short, long, default_value = "white")]
    pub group: String,

    /// Shapes, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub shape: Vec<String>,

    /// Color grades, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub color: Vec<String>,

    /// Clarity grades, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub clarity: Vec<String>,

    /// Cut grades, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub cut: Vec<String>,

    /// Certifications, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub cert: Vec<String>,

    /// Minimum carat weight.
    #[arg(long)]
    pub carat_min: Option<String>,

    /// Maximum carat weight.
    #[arg(long)]
    pub carat_max: Option<String>,

    /// Only diamonds in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (featured, price-asc, price-desc, carat-asc, carat-desc).
    #[arg(short, long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Diamond id, e.g. LJ-W-001.
    pub id: String,
}

/// Arguments for the link command.
#[derive(Args)]
pub struct LinkArgs {
    /// Diamond id to ask about. Without it the general link is built.
    #[arg(long)]
    pub id: Option<String>,

    /// Filter summary to include, e.g. "Round, 1-2ct".
    #[arg(long)]
    pub filters: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Path and query, e.g. "/diamonds?group=color".
    #[arg(default_value = "/")]
    pub path: String,

    /// Language code to render in.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// List section names instead of printing HTML.
    #[arg(long)]
    pub sections: bool,
}
