use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::translation::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text specification sheet
    Text,
    /// Analysis as pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the catalog JSON file (raw materials and products)
    #[arg(short, long, env = "PRODUCT_SPEC_CATALOG")]
    pub catalog: PathBuf,

    /// Path to a pl/en dictionary CSV used for English documents
    #[arg(short, long, env = "PRODUCT_SPEC_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// EAN of the product to analyze; every product when omitted
    #[arg(short, long)]
    pub ean: Option<String>,

    /// Language of the rendered sheet
    #[arg(short, long, value_enum, default_value_t = Language::Pl)]
    pub lang: Language,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
