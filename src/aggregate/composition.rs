use serde::Serialize;
use std::fmt;

use super::{round_to, Accumulator};
use crate::bom::{BillOfMaterials, BomLine, RawMaterial};
use crate::translation::{Identity, Language, Translate};

/// Target language plus the translation hook used for secondary-language
/// documents.
#[derive(Clone, Copy)]
pub struct Naming<'t> {
    language: Language,
    translator: &'t dyn Translate,
}

impl<'t> Naming<'t> {
    pub fn new(language: Language, translator: &'t dyn Translate) -> Self {
        Self { language, translator }
    }

    /// Primary language, names as recorded.
    pub fn primary() -> Naming<'static> {
        Naming { language: Language::Pl, translator: &Identity }
    }

    fn display(&self, name: &str) -> String {
        if self.language.is_primary() {
            name.to_string()
        } else {
            self.translator.translate(name)
        }
    }
}

impl fmt::Debug for Naming<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Naming").field("language", &self.language).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    /// An entry of the raw material's composition breakdown.
    SubIngredient,
    /// The raw material itself, used when it has no usable breakdown.
    RawMaterial,
}

/// One resolved share of the product. `source_name` is the untranslated key
/// (origin tables are keyed by it); `display_name` is what gets declared.
#[derive(Debug, Clone)]
pub struct Contribution<'b> {
    pub source_name: &'b str,
    pub display_name: String,
    pub percent: f64,
    pub kind: ContributionKind,
    line: &'b BomLine<'b>,
}

impl Contribution<'_> {
    /// Countries attributed to this contribution: the origin table entry for a
    /// sub-ingredient, the raw material's own country list otherwise.
    pub fn countries(&self) -> Vec<String> {
        match self.kind {
            ContributionKind::SubIngredient => self.line.origin_countries(self.source_name).to_vec(),
            ContributionKind::RawMaterial => self
                .line
                .raw_material
                .map(RawMaterial::countries)
                .unwrap_or_default(),
        }
    }
}

/// Expands every resolved line into its declared contributions, in line order.
///
/// A line whose raw material has a usable breakdown contributes
/// `q / 100 * p` per breakdown entry; any other line contributes its full
/// share `p` under the raw material's own name.
pub fn resolve<'b>(bom: &'b BillOfMaterials<'_>, naming: &Naming<'_>) -> Vec<Contribution<'b>> {
    let mut contributions = Vec::new();

    for (line, raw) in bom.resolved() {
        match line.breakdown() {
            Some(entries) => contributions.extend(entries.iter().map(|entry| Contribution {
                source_name: entry.name.as_str(),
                display_name: naming.display(&entry.name),
                percent: entry.percent * line.percent / 100.0,
                kind: ContributionKind::SubIngredient,
                line,
            })),
            None => contributions.push(Contribution {
                source_name: raw.name.as_str(),
                display_name: naming.display(raw.display_name(naming.language)),
                percent: line.percent,
                kind: ContributionKind::RawMaterial,
                line,
            }),
        }
    }

    contributions
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DeclaredIngredient {
    pub name: String,
    pub percent: f64,
}

/// The declared composition: contributions summed per display name, positive
/// shares only, sorted by share descending. Exact ties keep first-seen order.
pub fn composition_entries(bom: &BillOfMaterials<'_>, naming: &Naming<'_>) -> Vec<DeclaredIngredient> {
    let mut totals: Accumulator<f64> = Accumulator::new();
    for contribution in resolve(bom, naming) {
        *totals.entry(contribution.display_name) += contribution.percent;
    }

    let mut declared: Vec<DeclaredIngredient> = totals
        .into_entries()
        .into_iter()
        .filter(|(_, percent)| *percent > 0.0)
        .map(|(name, percent)| DeclaredIngredient { name, percent })
        .collect();
    declared.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    declared
}

/// Renders the declared composition as `"name (percent%)"` items joined by
/// `", "`, percentages rounded to 2 decimals. Empty when nothing is declared.
pub fn composition_text(bom: &BillOfMaterials<'_>, naming: &Naming<'_>) -> String {
    composition_entries(bom, naming)
        .iter()
        .map(|ingredient| format!("{} ({}%)", ingredient.name, round_to(ingredient.percent, 2)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::Dictionary;

    fn chocolate_mass() -> RawMaterial {
        RawMaterial::new(1, "Masa czekoladowa")
            .with_name_en("Chocolate mass")
            .with_composition(r#"[{"nazwa": "Cukier", "procent": 80}, {"nazwa": "Kakao", "procent": 20}]"#)
    }

    #[test]
    fn test_breakdown_is_weighted_by_line_share() {
        let raw = RawMaterial::new(1, "R").with_composition(r#"[{"nazwa": "A", "procent": 60}, {"nazwa": "B", "procent": 40}]"#);
        let bom = BillOfMaterials::new().with(&raw, 50.0);

        let contributions = resolve(&bom, &Naming::primary());
        assert_eq!(contributions.len(), 2);
        assert_eq!(contributions[0].display_name, "A");
        assert!((contributions[0].percent - 30.0).abs() < 1e-9);
        assert!((contributions[1].percent - 20.0).abs() < 1e-9);
        assert_eq!(contributions[0].kind, ContributionKind::SubIngredient);
    }

    #[test]
    fn test_sorted_descending_text() {
        let mass = chocolate_mass();
        let milk = RawMaterial::new(2, "Mleko w proszku");
        let bom = BillOfMaterials::new().with(&mass, 60.0).with(&milk, 40.0);

        assert_eq!(
            composition_text(&bom, &Naming::primary()),
            "Cukier (48%), Mleko w proszku (40%), Kakao (12%)"
        );
    }

    #[test]
    fn test_same_name_accumulates_across_lines() {
        let mass = chocolate_mass();
        let sugar = RawMaterial::new(2, "Cukier");
        let bom = BillOfMaterials::new().with(&mass, 50.0).with(&sugar, 50.0);

        let entries = composition_entries(&bom, &Naming::primary());
        assert_eq!(entries[0].name, "Cukier");
        assert!((entries[0].percent - 90.0).abs() < 1e-9);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_exact_ties_keep_first_seen_order() {
        let b = RawMaterial::new(1, "B");
        let a = RawMaterial::new(2, "A");
        let c = RawMaterial::new(3, "C");
        let bom = BillOfMaterials::new().with(&b, 25.0).with(&c, 50.0).with(&a, 25.0);
        assert_eq!(composition_text(&bom, &Naming::primary()), "C (50%), B (25%), A (25%)");

        let swapped = BillOfMaterials::new().with(&a, 25.0).with(&c, 50.0).with(&b, 25.0);
        assert_eq!(composition_text(&swapped, &Naming::primary()), "C (50%), A (25%), B (25%)");
    }

    #[test]
    fn test_non_positive_shares_are_dropped() {
        let water = RawMaterial::new(1, "Woda");
        let aroma = RawMaterial::new(2, "Aromat").with_composition(r#"[{"nazwa": "Wanilina", "procent": 0}]"#);
        let sugar = RawMaterial::new(3, "Cukier");
        let bom = BillOfMaterials::new().with(&water, 0.0).with(&aroma, 5.0).with(&sugar, 95.0);
        assert_eq!(composition_text(&bom, &Naming::primary()), "Cukier (95%)");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let raw = RawMaterial::new(1, "R").with_composition(r#"[{"nazwa": "A", "procent": 33.333}]"#);
        let bom = BillOfMaterials::new().with(&raw, 10.0);
        assert_eq!(composition_text(&bom, &Naming::primary()), "A (3.33%)");
    }

    #[test]
    fn test_empty_product_renders_empty_text() {
        assert_eq!(composition_text(&BillOfMaterials::new(), &Naming::primary()), "");
    }

    #[test]
    fn test_malformed_breakdown_falls_back_to_raw_material_name() {
        let broken = RawMaterial::new(1, "Nadzienie").with_composition(r#"[{"nazwa": "Cukier", "procent": 5"#);
        let absent = RawMaterial::new(1, "Nadzienie");
        let bom_broken = BillOfMaterials::new().with(&broken, 100.0);
        let bom_absent = BillOfMaterials::new().with(&absent, 100.0);

        assert_eq!(composition_text(&bom_broken, &Naming::primary()), "Nadzienie (100%)");
        assert_eq!(
            composition_entries(&bom_broken, &Naming::primary()),
            composition_entries(&bom_absent, &Naming::primary())
        );
    }

    #[test]
    fn test_secondary_language_translates_both_paths() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("nazwa", "Cukier", "Sugar");
        dictionary.insert("nazwa", "Kakao", "Cocoa");
        let mass = chocolate_mass();
        let milk = RawMaterial::new(2, "Mleko w proszku");
        let bom = BillOfMaterials::new().with(&mass, 60.0).with(&milk, 40.0);

        let naming = Naming::new(Language::En, &dictionary);
        assert_eq!(
            composition_text(&bom, &naming),
            "Sugar (48%), Mleko w proszku (40%), Cocoa (12%)"
        );

        let shout = |name: &str| name.to_uppercase();
        let naming = Naming::new(Language::En, &shout);
        let contributions = resolve(&bom, &naming);
        assert_eq!(contributions[0].source_name, "Cukier");
        assert_eq!(contributions[0].display_name, "CUKIER");
    }

    #[test]
    fn test_secondary_language_prefers_stored_english_name() {
        let butter = RawMaterial::new(1, "Masło kakaowe").with_name_en("Cocoa butter");
        let bom = BillOfMaterials::new().with(&butter, 100.0);
        assert_eq!(composition_text(&bom, &Naming::new(Language::En, &Identity)), "Cocoa butter (100%)");
        assert_eq!(composition_text(&bom, &Naming::primary()), "Masło kakaowe (100%)");
    }

    #[test]
    fn test_primary_language_never_translates() {
        let shout = |name: &str| name.to_uppercase();
        let raw = RawMaterial::new(1, "Cukier");
        let bom = BillOfMaterials::new().with(&raw, 100.0);
        assert_eq!(composition_text(&bom, &Naming::new(Language::Pl, &shout)), "Cukier (100%)");
    }
}
