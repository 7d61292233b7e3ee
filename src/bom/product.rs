use serde::{Deserialize, Serialize};
use tracing::debug;

use super::nested::{null_as_zero, CompositionEntry, OriginTable};
use super::raw_material::RawMaterial;

/// Bill-of-materials edge: a raw material's share of the finished product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductIngredient {
    #[serde(alias = "surowiec_id")]
    pub raw_material_id: u32,
    /// Share of the finished product, 0-100.
    #[serde(default, alias = "procent", deserialize_with = "null_as_zero")]
    pub percent: f64,
    #[serde(default, alias = "kolejnosc")]
    pub position: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub ean: String,
    #[serde(default, alias = "nazwa_pl")]
    pub name: String,
    #[serde(default, alias = "nazwa_en")]
    pub name_en: Option<String>,
    #[serde(default, alias = "skladniki")]
    pub ingredients: Vec<ProductIngredient>,
}

/// One materialized edge. The nested fields of the raw material are parsed
/// here, once, so the aggregators only see typed data.
#[derive(Debug, Clone)]
pub struct BomLine<'a> {
    pub percent: f64,
    pub position: i32,
    pub raw_material: Option<&'a RawMaterial>,
    breakdown: Option<Vec<CompositionEntry>>,
    origins: OriginTable,
}

impl<'a> BomLine<'a> {
    pub fn new(raw_material: Option<&'a RawMaterial>, percent: f64, position: i32) -> Self {
        let (breakdown, origins) = match raw_material {
            Some(raw) => (raw.composition_breakdown(), raw.origin_table()),
            None => (None, OriginTable::new()),
        };
        Self { percent, position, raw_material, breakdown, origins }
    }

    /// The composition breakdown, if the raw material has a usable one.
    pub fn breakdown(&self) -> Option<&[CompositionEntry]> {
        self.breakdown.as_deref()
    }

    /// Countries recorded for a sub-ingredient, keyed by its untranslated name.
    pub fn origin_countries(&self, source_name: &str) -> &[String] {
        self.origins.get(source_name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A product's ingredient edges with their raw materials resolved.
#[derive(Debug, Clone, Default)]
pub struct BillOfMaterials<'a> {
    lines: Vec<BomLine<'a>>,
}

impl<'a> BillOfMaterials<'a> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Materializes `product` against a raw material lookup. References the
    /// lookup cannot resolve are kept as unresolved lines.
    pub fn from_product<F>(product: &Product, lookup: F) -> Self
    where
        F: Fn(u32) -> Option<&'a RawMaterial>,
    {
        let lines = product
            .ingredients
            .iter()
            .map(|ingredient| {
                let raw_material = lookup(ingredient.raw_material_id);
                if raw_material.is_none() {
                    debug!(
                        ean = %product.ean,
                        raw_material_id = ingredient.raw_material_id,
                        "raw material not found, line will be skipped"
                    );
                }
                BomLine::new(raw_material, ingredient.percent, ingredient.position)
            })
            .collect();
        Self { lines }
    }

    /// Appends a resolved line; the position follows insertion order.
    pub fn with(mut self, raw_material: &'a RawMaterial, percent: f64) -> Self {
        let position = self.lines.len() as i32;
        self.lines.push(BomLine::new(Some(raw_material), percent, position));
        self
    }

    /// Appends a line whose raw material could not be resolved.
    pub fn with_unresolved(mut self, percent: f64) -> Self {
        let position = self.lines.len() as i32;
        self.lines.push(BomLine::new(None, percent, position));
        self
    }

    pub fn lines(&self) -> &[BomLine<'a>] {
        &self.lines
    }

    /// Lines with a resolved raw material, in stored order.
    pub fn resolved(&self) -> impl Iterator<Item = (&BomLine<'a>, &'a RawMaterial)> + '_ {
        self.lines
            .iter()
            .filter_map(|line| line.raw_material.map(|raw| (line, raw)))
    }

    /// Lines sorted by their ordering index, for display.
    pub fn ordered_lines(&self) -> Vec<&BomLine<'a>> {
        let mut ordered: Vec<_> = self.lines.iter().collect();
        ordered.sort_by_key(|line| line.position);
        ordered
    }

    /// Sum of every line's percentage, resolved or not.
    pub fn total_percent(&self) -> f64 {
        self.lines.iter().map(|line| line.percent).sum()
    }
}
