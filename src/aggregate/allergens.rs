use crate::bom::{AllergenProfile, BillOfMaterials};

/// Combined allergen declaration: for every allergen, the highest status found
/// among the resolved raw materials (`Absent < MayContain < Contains`).
/// Commutative and idempotent, so line order never matters.
pub fn aggregate_allergens(bom: &BillOfMaterials<'_>) -> AllergenProfile {
    bom.resolved().fold(AllergenProfile::default(), |mut declaration, (_, raw)| {
        declaration.merge(&raw.allergens);
        declaration
    })
}
