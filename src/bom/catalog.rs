use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::product::{BillOfMaterials, Product};
use super::raw_material::RawMaterial;
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default, alias = "surowce")]
    raw_materials: Vec<RawMaterial>,
    #[serde(default, alias = "produkty")]
    products: Vec<Product>,
}

/// Raw materials and products as handed over by the record store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    raw_materials: HashMap<u32, RawMaterial>,
    products: Vec<Product>,
    product_index: HashMap<String, usize>,
}

impl Catalog {
    /// Stored EANs are trimmed, so lookups and duplicate checks see the same key.
    pub fn from_parts(raw_materials: Vec<RawMaterial>, mut products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(raw_materials.len());
        for raw in raw_materials {
            let id = raw.id;
            if by_id.insert(id, raw).is_some() {
                return Err(CatalogError::DuplicateRawMaterial(id));
            }
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter_mut().enumerate() {
            if product.ean.trim().len() != product.ean.len() {
                product.ean = product.ean.trim().to_string();
            }
            if product_index.insert(product.ean.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateProduct(product.ean.clone()));
            }
        }

        Ok(Self { raw_materials: by_id, products, product_index })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::from_parts(document.raw_materials, document.products)?;
        info!(
            raw_materials = catalog.raw_materials.len(),
            products = catalog.products.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn raw_material(&self, id: u32) -> Option<&RawMaterial> {
        self.raw_materials.get(&id)
    }

    pub fn product(&self, ean: &str) -> Result<&Product, CatalogError> {
        let ean = ean.trim();
        self.product_index
            .get(ean)
            .map(|&idx| &self.products[idx])
            .ok_or_else(|| CatalogError::ProductNotFound(ean.to_string()))
    }

    /// Products in document order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn bill_of_materials(&self, product: &Product) -> BillOfMaterials<'_> {
        BillOfMaterials::from_product(product, |id| self.raw_material(id))
    }
}
