use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::Translate;

const CATEGORY_COL: &str = "category";
const PL_COL: &str = "pl";
const EN_COL: &str = "en";

/// Polish -> English glossary (ingredient names, countries, units, allergens).
///
/// Loaded once by the caller and handed to the aggregators; there is no
/// process-wide copy.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    exact: HashMap<String, String>,
    folded: HashMap<String, String>,
    categories: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, pl: &str, en: &str) {
        let (pl, en) = (pl.trim(), en.trim());
        if pl.is_empty() || en.is_empty() {
            return;
        }
        self.exact.insert(pl.to_string(), en.to_string());
        self.folded.insert(pl.to_lowercase(), en.to_string());
        *self.categories.entry(category.trim().to_lowercase()).or_default() += 1;
    }

    /// Exact match on the trimmed name first, then case-insensitive.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&name.to_lowercase()))
            .map(String::as_str)
    }

    /// Number of entries loaded under `category`.
    pub fn category_len(&self, category: &str) -> usize {
        self.categories.get(&category.to_lowercase()).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

impl Translate for Dictionary {
    fn translate(&self, name: &str) -> String {
        self.lookup(name).map(str::to_string).unwrap_or_else(|| name.to_string())
    }
}

/// Loads a dictionary from a CSV file with a `pl` and an `en` column and an
/// optional `category` column. Rows with a blank side are skipped.
pub fn load_dictionary(csv_path: &Path) -> Result<Dictionary> {
    if !csv_path.exists() {
        return Err(anyhow!("Dictionary CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open dictionary CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
    let pl_idx = column(PL_COL).ok_or_else(|| anyhow!("Column '{}' not found", PL_COL))?;
    let en_idx = column(EN_COL).ok_or_else(|| anyhow!("Column '{}' not found", EN_COL))?;
    let category_idx = column(CATEGORY_COL);

    let mut dictionary = Dictionary::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read dictionary record at row index {}", row_index))?;
        let category = category_idx.and_then(|idx| record.get(idx)).unwrap_or("");
        let pl = record.get(pl_idx).unwrap_or("");
        let en = record.get(en_idx).unwrap_or("");
        dictionary.insert(category, pl, en);
    }

    info!(entries = dictionary.len(), path = ?csv_path, "dictionary loaded");
    Ok(dictionary)
}
