//! Human-readable labels for specification documents.

use crate::bom::{Allergen, AllergenStatus, Nutrient};
use crate::translation::Language;

impl Nutrient {
    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Pl => match self {
                Nutrient::EnergyKj => "Energia (kJ)",
                Nutrient::EnergyKcal => "Energia (kcal)",
                Nutrient::Fat => "Tłuszcz",
                Nutrient::SaturatedFat => "w tym kwasy nasycone",
                Nutrient::Carbohydrate => "Węglowodany",
                Nutrient::Sugars => "w tym cukry",
                Nutrient::Protein => "Białko",
                Nutrient::Salt => "Sól",
                Nutrient::Fiber => "Błonnik",
            },
            Language::En => match self {
                Nutrient::EnergyKj => "Energy (kJ)",
                Nutrient::EnergyKcal => "Energy (kcal)",
                Nutrient::Fat => "Fat",
                Nutrient::SaturatedFat => "of which saturates",
                Nutrient::Carbohydrate => "Carbohydrate",
                Nutrient::Sugars => "of which sugars",
                Nutrient::Protein => "Protein",
                Nutrient::Salt => "Salt",
                Nutrient::Fiber => "Fibre",
            },
        }
    }
}

impl Allergen {
    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Pl => match self {
                Allergen::Gluten => "Gluten",
                Allergen::Crustaceans => "Skorupiaki",
                Allergen::Eggs => "Jaja",
                Allergen::Fish => "Ryby",
                Allergen::Peanuts => "Orzeszki ziemne",
                Allergen::Soybeans => "Soja",
                Allergen::Milk => "Mleko",
                Allergen::Nuts => "Orzechy",
                Allergen::Celery => "Seler",
                Allergen::Mustard => "Gorczyca",
                Allergen::Sesame => "Sezam",
                Allergen::Sulphites => "Dwutlenek siarki i siarczyny",
                Allergen::Lupin => "Łubin",
                Allergen::Molluscs => "Mięczaki",
            },
            Language::En => match self {
                Allergen::Gluten => "Gluten",
                Allergen::Crustaceans => "Crustaceans",
                Allergen::Eggs => "Eggs",
                Allergen::Fish => "Fish",
                Allergen::Peanuts => "Peanuts",
                Allergen::Soybeans => "Soybeans",
                Allergen::Milk => "Milk",
                Allergen::Nuts => "Nuts",
                Allergen::Celery => "Celery",
                Allergen::Mustard => "Mustard",
                Allergen::Sesame => "Sesame seeds",
                Allergen::Sulphites => "Sulphur dioxide and sulphites",
                Allergen::Lupin => "Lupin",
                Allergen::Molluscs => "Molluscs",
            },
        }
    }
}

impl AllergenStatus {
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Pl, AllergenStatus::Absent) => "Nie zawiera",
            (Language::Pl, AllergenStatus::MayContain) => "Może zawierać",
            (Language::Pl, AllergenStatus::Contains) => "Zawiera",
            (Language::En, AllergenStatus::Absent) => "Does not contain",
            (Language::En, AllergenStatus::MayContain) => "May contain",
            (Language::En, AllergenStatus::Contains) => "Contains",
        }
    }
}
