use serde::Serialize;
use tracing::info;

use crate::aggregate::{aggregate_allergens, calculate_nutrition, composition_text, ingredient_origins, IngredientOrigin, Naming};
use crate::bom::{AllergenProfile, BillOfMaterials, Catalog, NutritionFacts};
use crate::error::CatalogError;
use crate::translation::{Language, Translate};

/// Everything a specification document derives from a product's recipe.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductAnalysis {
    pub ean: String,
    pub nutrition: NutritionFacts,
    pub allergens: AllergenProfile,
    pub ingredients_pl: String,
    pub ingredients_en: String,
    pub ingredient_origins: Vec<IngredientOrigin>,
}

impl ProductAnalysis {
    pub fn ingredients(&self, language: Language) -> &str {
        match language {
            Language::Pl => &self.ingredients_pl,
            Language::En => &self.ingredients_en,
        }
    }
}

/// Runs every aggregator over `bom`. Origins are attributed under the names
/// the records are kept in.
pub fn analyze(ean: &str, bom: &BillOfMaterials<'_>, translator: &dyn Translate) -> ProductAnalysis {
    let english = Naming::new(Language::En, translator);
    let primary = Naming::primary();

    ProductAnalysis {
        ean: ean.to_string(),
        nutrition: calculate_nutrition(bom),
        allergens: aggregate_allergens(bom),
        ingredients_pl: composition_text(bom, &primary),
        ingredients_en: composition_text(bom, &english),
        ingredient_origins: ingredient_origins(bom, &primary),
    }
}

pub fn analyze_product(catalog: &Catalog, ean: &str, translator: &dyn Translate) -> Result<ProductAnalysis, CatalogError> {
    let product = catalog.product(ean)?;
    info!(ean = %product.ean, lines = product.ingredients.len(), "analyzing product");
    let bom = catalog.bill_of_materials(product);
    Ok(analyze(&product.ean, &bom, translator))
}
