//! Bill-of-materials model: raw materials, products and their ingredient
//! edges, plus the materialized view the aggregators read.

pub mod allergen;
pub mod catalog;
pub mod nested;
pub mod nutrition;
pub mod product;
pub mod raw_material;

pub use allergen::{Allergen, AllergenProfile, AllergenStatus};
pub use catalog::Catalog;
pub use nested::{CompositionEntry, OriginTable};
pub use nutrition::{Nutrient, NutritionFacts};
pub use product::{BillOfMaterials, BomLine, Product, ProductIngredient};
pub use raw_material::RawMaterial;
