use serde::{Deserialize, Serialize};

use super::nested::null_as_zero;

/// Nutrition facts per 100g. Used both for raw materials and for the
/// aggregated product.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct NutritionFacts {
    #[serde(default, alias = "energia_kj", deserialize_with = "null_as_zero")]
    pub energy_kj: f64,
    #[serde(default, alias = "energia_kcal", deserialize_with = "null_as_zero")]
    pub energy_kcal: f64,
    #[serde(default, alias = "tluszcz", deserialize_with = "null_as_zero")]
    pub fat: f64,
    #[serde(default, alias = "kwasy_nasycone", deserialize_with = "null_as_zero")]
    pub saturated_fat: f64,
    #[serde(default, alias = "weglowodany", deserialize_with = "null_as_zero")]
    pub carbohydrate: f64,
    #[serde(default, alias = "cukry", deserialize_with = "null_as_zero")]
    pub sugars: f64,
    #[serde(default, alias = "bialko", deserialize_with = "null_as_zero")]
    pub protein: f64,
    #[serde(default, alias = "sol", deserialize_with = "null_as_zero")]
    pub salt: f64,
    #[serde(default, alias = "blonnik", deserialize_with = "null_as_zero")]
    pub fiber: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    EnergyKj,
    EnergyKcal,
    Fat,
    SaturatedFat,
    Carbohydrate,
    Sugars,
    Protein,
    Salt,
    Fiber,
}

impl Nutrient {
    /// Declaration order on a nutrition panel.
    pub const ALL: [Nutrient; 9] = [
        Nutrient::EnergyKj,
        Nutrient::EnergyKcal,
        Nutrient::Fat,
        Nutrient::SaturatedFat,
        Nutrient::Carbohydrate,
        Nutrient::Sugars,
        Nutrient::Protein,
        Nutrient::Salt,
        Nutrient::Fiber,
    ];
}

impl NutritionFacts {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::EnergyKj => self.energy_kj,
            Nutrient::EnergyKcal => self.energy_kcal,
            Nutrient::Fat => self.fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugars => self.sugars,
            Nutrient::Protein => self.protein,
            Nutrient::Salt => self.salt,
            Nutrient::Fiber => self.fiber,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |nutrient| (nutrient, self.get(nutrient)))
    }
}
