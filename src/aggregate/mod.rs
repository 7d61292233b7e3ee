//! Recipe aggregation: turns a bill of materials into the derived facts of a
//! product specification. Every function here is pure and total.

pub mod allergens;
pub mod composition;
pub mod nutrition;
pub mod origins;

pub use allergens::aggregate_allergens;
pub use composition::{
    composition_entries, composition_text, resolve, Contribution, ContributionKind, DeclaredIngredient, Naming,
};
pub use nutrition::calculate_nutrition;
pub use origins::{ingredient_origins, IngredientOrigin};

use std::collections::HashMap;

/// Name-keyed multiset that remembers first-seen order, so exact ties sort
/// deterministically.
#[derive(Debug)]
pub(crate) struct Accumulator<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T: Default> Accumulator<T> {
    pub(crate) fn new() -> Self {
        Self { index: HashMap::new(), entries: Vec::new() }
    }

    pub(crate) fn entry(&mut self, name: String) -> &mut T {
        let idx = match self.index.get(&name) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(name.clone(), idx);
                self.entries.push((name, T::default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub(crate) fn into_entries(self) -> Vec<(String, T)> {
        self.entries
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
