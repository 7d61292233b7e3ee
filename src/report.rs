//! Plain-text specification sheet.

use std::fmt::{self, Write};

use crate::aggregate::IngredientOrigin;
use crate::analysis::ProductAnalysis;
use crate::translation::Language;

fn heading(language: Language, pl: &'static str, en: &'static str) -> &'static str {
    match language {
        Language::Pl => pl,
        Language::En => en,
    }
}

/// Formats a share with at most 2 decimals; Polish documents use a decimal comma.
fn format_percent(percent: f64, language: Language) -> String {
    let rendered = format!("{}", (percent * 100.0).round() / 100.0);
    match language {
        Language::Pl => rendered.replace('.', ","),
        Language::En => rendered,
    }
}

fn origin_row(origin: &IngredientOrigin, language: Language) -> String {
    let countries = if origin.countries.is_empty() {
        "-".to_string()
    } else {
        origin.countries.join(", ")
    };
    format!("  {} | {}% | {}", origin.name, format_percent(origin.percent, language), countries)
}

pub fn render(analysis: &ProductAnalysis, language: Language) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sheet(&mut out, analysis, language);
    out
}

fn write_sheet(out: &mut impl Write, analysis: &ProductAnalysis, language: Language) -> fmt::Result {
    writeln!(out, "{} {}", heading(language, "SPECYFIKACJA PRODUKTU", "PRODUCT SPECIFICATION"), analysis.ean)?;
    writeln!(out)?;

    writeln!(out, "{}", heading(language, "WARTOŚCI ODŻYWCZE (100g)", "NUTRITIONAL VALUES (100g)"))?;
    for (nutrient, value) in analysis.nutrition.iter() {
        writeln!(out, "  {}: {:.1}", nutrient.label(language), value)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", heading(language, "SKŁAD", "INGREDIENTS"))?;
    writeln!(out, "  {}", analysis.ingredients(language))?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        heading(
            language,
            "PROCENTOWY UDZIAŁ SKŁADNIKÓW I KRAJE POCHODZENIA",
            "INGREDIENT PERCENTAGE AND COUNTRIES OF ORIGIN"
        )
    )?;
    for origin in &analysis.ingredient_origins {
        writeln!(out, "{}", origin_row(origin, language))?;
    }
    writeln!(out)?;

    writeln!(out, "{}", heading(language, "ALERGENY", "ALLERGENS"))?;
    for (allergen, status) in analysis.allergens.iter() {
        writeln!(out, "  {} – {}", allergen.label(language), status.label(language))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::{Allergen, AllergenProfile, AllergenStatus, NutritionFacts};

    fn analysis() -> ProductAnalysis {
        ProductAnalysis {
            ean: "5901234123457".to_string(),
            nutrition: NutritionFacts { energy_kcal: 387.26, ..Default::default() },
            allergens: AllergenProfile::default().with(Allergen::Milk, AllergenStatus::Contains),
            ingredients_pl: "Cukier (62.5%), Mleko (37.5%)".to_string(),
            ingredients_en: "Sugar (62.5%), Milk (37.5%)".to_string(),
            ingredient_origins: vec![
                IngredientOrigin { name: "Cukier".to_string(), percent: 62.5, countries: vec!["Polska".to_string()] },
                IngredientOrigin { name: "Mleko".to_string(), percent: 37.5, countries: vec![] },
            ],
        }
    }

    #[test]
    fn test_render_polish_sheet() {
        let sheet = render(&analysis(), Language::Pl);
        assert!(sheet.contains("SPECYFIKACJA PRODUKTU 5901234123457"));
        assert!(sheet.contains("  Energia (kcal): 387.3\n"));
        assert!(sheet.contains("  Cukier (62.5%), Mleko (37.5%)"));
        assert!(sheet.contains("  Cukier | 62,5% | Polska"));
        assert!(sheet.contains("  Mleko | 37,5% | -"));
        assert!(sheet.contains("  Mleko – Zawiera"));
        assert!(sheet.contains("  Gluten – Nie zawiera"));
    }

    #[test]
    fn test_render_english_sheet() {
        let sheet = render(&analysis(), Language::En);
        assert!(sheet.contains("INGREDIENTS"));
        assert!(sheet.contains("  Sugar (62.5%), Milk (37.5%)"));
        assert!(sheet.contains("  Cukier | 62.5% | Polska"));
        assert!(sheet.contains("  Milk – Contains"));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.3456, Language::Pl), "12,35");
        assert_eq!(format_percent(40.0, Language::En), "40");
    }
}
