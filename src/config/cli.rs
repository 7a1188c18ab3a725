use std::{num::NonZeroU32, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the aviators-seo binary.
#[derive(Debug, Parser)]
#[command(
    name = "aviators-seo",
    version,
    about = "SEO metadata, JSON-LD and editorial scoring for the Aviators Training Centre blog"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "AVIATORS_SEO_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SiteOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the SEO metadata for a content record.
    Metadata(RecordArgs),
    /// Print the SEO metadata for a blog listing page.
    Listing(ListingArgs),
    /// Validate and score a content record.
    Report(RecordArgs),
    /// Build sitemap entries for a list of content records.
    Sitemap(SitemapArgs),
    /// Print robots.txt.
    Robots,
    /// Fill in a draft post and write it as a markdown file with front matter.
    Populate(PopulateArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct SiteOverrides {
    /// Override the public base URL of the site.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Override the site name used in titles and publisher blocks.
    #[arg(long = "site-name", value_name = "NAME", global = true)]
    pub site_name: Option<String>,

    /// Override the Twitter/X handle.
    #[arg(long = "twitter-handle", value_name = "HANDLE", global = true)]
    pub twitter_handle: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Clone)]
pub struct RecordArgs {
    /// Content record as JSON.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListingArgs {
    /// Restrict the listing to a category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Listing page number, starting at 1.
    #[arg(long, value_name = "N")]
    pub page: Option<NonZeroU32>,
}

#[derive(Debug, Args, Clone)]
pub struct SitemapArgs {
    /// JSON array of content records.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Emit sitemap XML instead of JSON entries.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub xml: bool,
}

#[derive(Debug, Args, Clone)]
pub struct PopulateArgs {
    /// Draft post as JSON.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Directory receiving the generated markdown file.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "content/blog",
        value_hint = ValueHint::DirPath
    )]
    pub output_dir: PathBuf,

    /// Print the generated document instead of writing a file.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub print: bool,
}
