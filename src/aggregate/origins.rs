use serde::Serialize;
use std::collections::BTreeSet;

use super::composition::{resolve, Naming};
use super::{round_to, Accumulator};
use crate::bom::BillOfMaterials;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct IngredientOrigin {
    pub name: String,
    /// Share of the product, rounded to 4 decimals.
    pub percent: f64,
    /// Distinct countries, ascending.
    pub countries: Vec<String>,
}

/// Country-of-origin attribution per declared ingredient, sorted by share
/// descending.
///
/// Breakdown entries take their countries from the raw material's origin
/// table (looked up by the untranslated name); raw materials declared as a
/// whole contribute their own country list.
pub fn ingredient_origins(bom: &BillOfMaterials<'_>, naming: &Naming<'_>) -> Vec<IngredientOrigin> {
    let mut totals: Accumulator<(f64, BTreeSet<String>)> = Accumulator::new();

    for contribution in resolve(bom, naming) {
        let countries = contribution.countries();
        let (percent, known) = totals.entry(contribution.display_name);
        *percent += contribution.percent;
        known.extend(countries);
    }

    let mut origins: Vec<IngredientOrigin> = totals
        .into_entries()
        .into_iter()
        .map(|(name, (percent, countries))| IngredientOrigin {
            name,
            percent: round_to(percent, 4),
            countries: countries.into_iter().collect(),
        })
        .collect();
    origins.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    origins
}
