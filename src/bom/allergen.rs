use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// The fourteen allergens that must be declared on a specification.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Gluten,
    Crustaceans,
    Eggs,
    Fish,
    Peanuts,
    Soybeans,
    Milk,
    Nuts,
    Celery,
    Mustard,
    Sesame,
    Sulphites,
    Lupin,
    Molluscs,
}

impl Allergen {
    pub const ALL: [Allergen; 14] = [
        Allergen::Gluten,
        Allergen::Crustaceans,
        Allergen::Eggs,
        Allergen::Fish,
        Allergen::Peanuts,
        Allergen::Soybeans,
        Allergen::Milk,
        Allergen::Nuts,
        Allergen::Celery,
        Allergen::Mustard,
        Allergen::Sesame,
        Allergen::Sulphites,
        Allergen::Lupin,
        Allergen::Molluscs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Allergen::Gluten => "gluten",
            Allergen::Crustaceans => "crustaceans",
            Allergen::Eggs => "eggs",
            Allergen::Fish => "fish",
            Allergen::Peanuts => "peanuts",
            Allergen::Soybeans => "soybeans",
            Allergen::Milk => "milk",
            Allergen::Nuts => "nuts",
            Allergen::Celery => "celery",
            Allergen::Mustard => "mustard",
            Allergen::Sesame => "sesame",
            Allergen::Sulphites => "sulphites",
            Allergen::Lupin => "lupin",
            Allergen::Molluscs => "molluscs",
        }
    }

    /// Field id used by the existing Polish records.
    pub fn source_key(self) -> &'static str {
        match self {
            Allergen::Gluten => "gluten",
            Allergen::Crustaceans => "skorupiaki",
            Allergen::Eggs => "jaja",
            Allergen::Fish => "ryby",
            Allergen::Peanuts => "orzeszki_ziemne",
            Allergen::Soybeans => "soja",
            Allergen::Milk => "mleko",
            Allergen::Nuts => "orzechy",
            Allergen::Celery => "seler",
            Allergen::Mustard => "gorczyca",
            Allergen::Sesame => "sezam",
            Allergen::Sulphites => "dwutlenek_siarki",
            Allergen::Lupin => "lubin",
            Allergen::Molluscs => "mieczaki",
        }
    }

    /// Resolves either key form, with or without the `alergen_` column prefix.
    pub fn from_key(key: &str) -> Option<Allergen> {
        let key = key.trim().to_lowercase();
        let key = key.strip_prefix("alergen_").unwrap_or(&key);
        Allergen::ALL
            .into_iter()
            .find(|allergen| allergen.key() == key || allergen.source_key() == key)
    }
}

/// Tri-state allergen status. The derived ordering is the precedence lattice
/// `Absent < MayContain < Contains`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum AllergenStatus {
    #[default]
    Absent,
    MayContain,
    Contains,
}

const MAY_MARKERS: &[&str] = &["może", "moze", "śladow", "sladow", "ślad", "slad", "may", "trace"];
const NEGATIVE_EXACT: &[&str] = &["-", "0", "nie", "no", "brak", "none", "false"];
const NEGATIVE_PREFIXES: &[&str] = &["nie zawiera", "brak", "does not", "free from", "no "];
const CONTAINS_MARKERS: &[&str] = &["zawiera", "contains", "tak", "yes", "1", "true"];

impl AllergenStatus {
    /// Join in the precedence lattice.
    pub fn join(self, other: AllergenStatus) -> AllergenStatus {
        self.max(other)
    }

    /// Normalizes canonical keys, the record labels and free text. Text that
    /// cannot be classified is treated as a possible trace.
    pub fn from_label(label: &str) -> AllergenStatus {
        let text = label.trim().to_lowercase();
        match text.as_str() {
            "" | "absent" | "nie zawiera" | "does not contain" => return AllergenStatus::Absent,
            "may_contain" | "może zawierać" | "may contain" => return AllergenStatus::MayContain,
            "contains" | "zawiera" => return AllergenStatus::Contains,
            _ => {}
        }

        if NEGATIVE_EXACT.contains(&text.as_str())
            || NEGATIVE_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
        {
            AllergenStatus::Absent
        } else if MAY_MARKERS.iter().any(|marker| text.contains(marker)) {
            AllergenStatus::MayContain
        } else if CONTAINS_MARKERS.contains(&text.as_str())
            || text.contains("zawiera")
            || text.contains("contains")
        {
            AllergenStatus::Contains
        } else {
            debug!(label = %label, "unrecognized allergen status, assuming may contain");
            AllergenStatus::MayContain
        }
    }
}

impl From<Option<String>> for AllergenStatus {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(AllergenStatus::from_label).unwrap_or_default()
    }
}

/// A status for every allergen. Missing entries are `Absent`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(
    from = "BTreeMap<String, AllergenStatus>",
    into = "BTreeMap<Allergen, AllergenStatus>"
)]
pub struct AllergenProfile {
    statuses: BTreeMap<Allergen, AllergenStatus>,
}

impl Default for AllergenProfile {
    fn default() -> Self {
        Self {
            statuses: Allergen::ALL
                .into_iter()
                .map(|allergen| (allergen, AllergenStatus::Absent))
                .collect(),
        }
    }
}

impl AllergenProfile {
    pub fn get(&self, allergen: Allergen) -> AllergenStatus {
        self.statuses.get(&allergen).copied().unwrap_or_default()
    }

    pub fn set(&mut self, allergen: Allergen, status: AllergenStatus) {
        self.statuses.insert(allergen, status);
    }

    pub fn with(mut self, allergen: Allergen, status: AllergenStatus) -> Self {
        self.set(allergen, status);
        self
    }

    /// Joins `other` into `self`, allergen by allergen.
    pub fn merge(&mut self, other: &AllergenProfile) {
        for allergen in Allergen::ALL {
            let joined = self.get(allergen).join(other.get(allergen));
            self.set(allergen, joined);
        }
    }

    /// Iterates in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Allergen, AllergenStatus)> + '_ {
        Allergen::ALL.into_iter().map(move |allergen| (allergen, self.get(allergen)))
    }
}

impl From<BTreeMap<String, AllergenStatus>> for AllergenProfile {
    fn from(raw: BTreeMap<String, AllergenStatus>) -> Self {
        let mut profile = AllergenProfile::default();
        for (key, status) in raw {
            match Allergen::from_key(&key) {
                Some(allergen) => profile.set(allergen, status),
                None => debug!(key = %key, "ignoring unknown allergen"),
            }
        }
        profile
    }
}

impl From<AllergenProfile> for BTreeMap<Allergen, AllergenStatus> {
    fn from(profile: AllergenProfile) -> Self {
        profile.statuses
    }
}
