use crate::bom::{BillOfMaterials, NutritionFacts};

/// Nutrition facts per 100g of product: each raw material's facts weighted by
/// its share of the product. Unresolved lines are skipped.
///
/// The shares are used as given; a product whose percentages do not add up to
/// 100 yields proportionally scaled figures.
pub fn calculate_nutrition(bom: &BillOfMaterials<'_>) -> NutritionFacts {
    let mut total = NutritionFacts::default();

    if bom.total_percent() == 0.0 {
        return total;
    }

    for (line, raw) in bom.resolved() {
        let factor = line.percent / 100.0;
        let facts = &raw.nutrition;
        macro_rules! add_weighted {
            ($($field:ident),+) => {
                $( total.$field += facts.$field * factor; )+
            };
        }
        add_weighted!(energy_kj, energy_kcal, fat, saturated_fat, carbohydrate, sugars, protein, salt, fiber);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::RawMaterial;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_weighted_sum() {
        let sugar = RawMaterial::new(1, "Cukier").with_nutrition(NutritionFacts {
            energy_kj: 1700.0,
            energy_kcal: 400.0,
            carbohydrate: 100.0,
            sugars: 100.0,
            ..Default::default()
        });
        let cocoa = RawMaterial::new(2, "Kakao").with_nutrition(NutritionFacts {
            energy_kcal: 230.0,
            fat: 11.0,
            saturated_fat: 6.5,
            protein: 20.0,
            fiber: 33.0,
            salt: 0.05,
            ..Default::default()
        });
        let bom = BillOfMaterials::new().with(&sugar, 75.0).with(&cocoa, 25.0);

        let total = calculate_nutrition(&bom);
        assert_close(total.energy_kj, 1275.0);
        assert_close(total.energy_kcal, 357.5);
        assert_close(total.fat, 2.75);
        assert_close(total.saturated_fat, 1.625);
        assert_close(total.carbohydrate, 75.0);
        assert_close(total.sugars, 75.0);
        assert_close(total.protein, 5.0);
        assert_close(total.salt, 0.0125);
        assert_close(total.fiber, 8.25);
    }

    #[test]
    fn test_unresolved_lines_are_skipped() {
        let sugar = RawMaterial::new(1, "Cukier").with_nutrition(NutritionFacts { sugars: 100.0, ..Default::default() });
        let bom = BillOfMaterials::new().with(&sugar, 50.0).with_unresolved(50.0);
        assert_close(calculate_nutrition(&bom).sugars, 50.0);
    }

    #[test]
    fn test_empty_product_is_all_zero() {
        assert_eq!(calculate_nutrition(&BillOfMaterials::new()), NutritionFacts::default());

        let sugar = RawMaterial::new(1, "Cukier").with_nutrition(NutritionFacts { sugars: 100.0, ..Default::default() });
        let bom = BillOfMaterials::new().with(&sugar, 0.0);
        assert_eq!(calculate_nutrition(&bom), NutritionFacts::default());
    }
}
