use serde::{Deserialize, Serialize};

use super::allergen::{Allergen, AllergenProfile, AllergenStatus};
use super::nested::{self, CompositionEntry, OriginTable};
use super::nutrition::NutritionFacts;
use crate::translation::Language;

/// A reusable ingredient catalog entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawMaterial {
    pub id: u32,
    #[serde(alias = "nazwa")]
    pub name: String,
    #[serde(default, alias = "nazwa_en")]
    pub name_en: Option<String>,
    #[serde(default, alias = "kategoria")]
    pub category: Option<String>,
    /// Delimited country list, only used when there is no composition breakdown.
    #[serde(default, alias = "kraj_pochodzenia")]
    pub country_of_origin: Option<String>,
    /// Serialized composition breakdown, `[{"nazwa": .., "procent": ..}, ..]`.
    #[serde(default, alias = "sklad_procentowy", deserialize_with = "nested::text_or_inline")]
    pub composition: Option<String>,
    /// Serialized origin table, `[{"nazwa": .., "kraje": ..}, ..]`.
    #[serde(default, alias = "pochodzenie_skladnikow", deserialize_with = "nested::text_or_inline")]
    pub ingredient_origins: Option<String>,
    #[serde(default, alias = "wartosci_odzywcze")]
    pub nutrition: NutritionFacts,
    #[serde(default, alias = "alergeny")]
    pub allergens: AllergenProfile,
}

impl RawMaterial {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            name_en: None,
            category: None,
            country_of_origin: None,
            composition: None,
            ingredient_origins: None,
            nutrition: NutritionFacts::default(),
            allergens: AllergenProfile::default(),
        }
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn with_country_of_origin(mut self, countries: impl Into<String>) -> Self {
        self.country_of_origin = Some(countries.into());
        self
    }

    pub fn with_composition(mut self, composition: impl Into<String>) -> Self {
        self.composition = Some(composition.into());
        self
    }

    pub fn with_ingredient_origins(mut self, origins: impl Into<String>) -> Self {
        self.ingredient_origins = Some(origins.into());
        self
    }

    pub fn with_nutrition(mut self, nutrition: NutritionFacts) -> Self {
        self.nutrition = nutrition;
        self
    }

    pub fn with_allergen(mut self, allergen: Allergen, status: AllergenStatus) -> Self {
        self.allergens.set(allergen, status);
        self
    }

    /// Name used when declaring this raw material as a whole. The secondary
    /// language falls back to the primary name when no translation is stored.
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Pl => self.name.as_str(),
            Language::En => self
                .name_en
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(self.name.as_str()),
        }
    }

    pub fn composition_breakdown(&self) -> Option<Vec<CompositionEntry>> {
        self.composition.as_deref().and_then(nested::parse_composition)
    }

    pub fn origin_table(&self) -> OriginTable {
        self.ingredient_origins
            .as_deref()
            .map(nested::parse_origin_table)
            .unwrap_or_default()
    }

    pub fn countries(&self) -> Vec<String> {
        self.country_of_origin
            .as_deref()
            .map(nested::split_countries)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_source_record() {
        let raw: RawMaterial = serde_json::from_str(
            r#"{
                "id": 7,
                "nazwa": "Czekolada mleczna",
                "nazwa_en": "Milk chocolate",
                "kraj_pochodzenia": "Polska, Belgia",
                "sklad_procentowy": "[{\"nazwa\": \"Cukier\", \"procent\": 45}]",
                "pochodzenie_skladnikow": [{"nazwa": "Cukier", "kraje": ["Polska"]}],
                "wartosci_odzywcze": {"energia_kcal": 540},
                "alergeny": {"mleko": "Zawiera"}
            }"#,
        )
        .unwrap();
        assert_eq!(raw.display_name(Language::En), "Milk chocolate");
        assert_eq!(raw.countries(), vec!["Polska", "Belgia"]);
        assert_eq!(raw.composition_breakdown().unwrap()[0].name, "Cukier");
        assert_eq!(raw.origin_table()["Cukier"], vec!["Polska"]);
        assert_eq!(raw.nutrition.energy_kcal, 540.0);
        assert_eq!(raw.allergens.get(Allergen::Milk), AllergenStatus::Contains);
    }

    #[test]
    fn test_display_name_falls_back_to_primary() {
        let raw = RawMaterial::new(1, "Cukier").with_name_en("  ");
        assert_eq!(raw.display_name(Language::En), "Cukier");
        assert_eq!(raw.display_name(Language::Pl), "Cukier");
    }
}
