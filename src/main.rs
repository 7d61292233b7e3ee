use anyhow::{Context, Result};
use product_spec::analysis::analyze_product;
use product_spec::bom::Catalog;
use product_spec::cli::{parse_args, OutputFormat};
use product_spec::report::render;
use product_spec::translation::{load_dictionary, Dictionary};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok(); // Load .env for catalog/dictionary paths

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli_args = parse_args();

    let catalog_json = fs::read_to_string(&cli_args.catalog)
        .await
        .with_context(|| format!("Failed to read catalog file {:?}", cli_args.catalog))?;
    let catalog = Catalog::from_json_str(&catalog_json)
        .with_context(|| format!("Failed to load catalog from {:?}", cli_args.catalog))?;

    let dictionary = match &cli_args.dictionary {
        Some(path) => load_dictionary(path)
            .with_context(|| format!("Failed to load dictionary from {:?}", path))?,
        None => {
            info!("no dictionary configured, English names pass through untranslated");
            Dictionary::new()
        }
    };

    let eans: Vec<String> = match &cli_args.ean {
        Some(ean) => vec![ean.clone()],
        None => catalog.products().iter().map(|product| product.ean.clone()).collect(),
    };
    if eans.is_empty() {
        warn!("catalog contains no products");
    }

    let mut analyses = Vec::with_capacity(eans.len());
    for ean in &eans {
        let analysis = analyze_product(&catalog, ean, &dictionary)
            .with_context(|| format!("Failed to analyze product {}", ean))?;
        analyses.push(analysis);
    }

    match cli_args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analyses).context("Failed to serialize analysis")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for analysis in &analyses {
                println!("{}", render(analysis, cli_args.lang));
            }
        }
    }

    Ok(())
}
