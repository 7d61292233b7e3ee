//! Defensive parsing of the loosely-typed nested fields stored on raw materials.
//!
//! Composition breakdowns and origin tables arrive as serialized JSON text
//! (sometimes inline JSON). Nothing in here fails: anything that does not look
//! like the expected shape degrades to "absent" and the aggregators take their
//! fallback path.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

const NAME_KEYS: &[&str] = &["nazwa", "name"];
const PERCENT_KEYS: &[&str] = &["procent", "percent"];
const COUNTRY_KEYS: &[&str] = &["kraje", "countries"];

/// One row of a raw material's composition breakdown.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompositionEntry {
    pub name: String,
    /// Share of the raw material, 0-100. Not required to sum to 100.
    pub percent: f64,
}

/// Sub-ingredient name (untranslated) -> countries of origin.
pub type OriginTable = HashMap<String, Vec<String>>;

/// Parses a composition breakdown.
///
/// Returns `None` when the text is blank, is not valid JSON, is not a list,
/// or contains no entry with a non-blank name. Entries with a blank name are
/// dropped; a missing or non-numeric percent counts as 0.
pub fn parse_composition(text: &str) -> Option<Vec<CompositionEntry>> {
    let items = parse_list(text, "composition breakdown")?;

    let entries: Vec<CompositionEntry> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|object| {
            let name = entry_name(object)?;
            let percent = lookup(object, PERCENT_KEYS).map(number_or_zero).unwrap_or(0.0);
            Some(CompositionEntry { name, percent })
        })
        .collect();

    if entries.is_empty() {
        debug!("composition breakdown has no named entries, ignoring");
        None
    } else {
        Some(entries)
    }
}

/// Parses an origin table. Malformed input yields an empty table.
/// When a name appears more than once the last entry wins.
pub fn parse_origin_table(text: &str) -> OriginTable {
    let Some(items) = parse_list(text, "origin table") else {
        return OriginTable::new();
    };

    let mut table = OriginTable::new();
    for object in items.iter().filter_map(Value::as_object) {
        let Some(name) = entry_name(object) else {
            continue;
        };
        let countries = lookup(object, COUNTRY_KEYS).map(countries_from_value).unwrap_or_default();
        table.insert(name, countries);
    }
    table
}

/// Splits a delimited country list ("Poland, Germany") into trimmed, non-blank names.
pub fn split_countries(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|country| !country.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_list(text: &str, what: &str) -> Option<Vec<Value>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => Some(items),
        Ok(_) => {
            debug!("{} is not a list, ignoring", what);
            None
        }
        Err(e) => {
            debug!(error = %e, "{} is not valid JSON, ignoring", what);
            None
        }
    }
}

fn lookup<'v>(object: &'v Map<String, Value>, keys: &[&str]) -> Option<&'v Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn entry_name(object: &Map<String, Value>) -> Option<String> {
    lookup(object, NAME_KEYS)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn number_or_zero(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn countries_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => split_countries(s),
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::Null => Vec::new(),
                Value::String(s) => split_countries(s),
                other => split_countries(&other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Accepts a nested field either as serialized text or as inline JSON and
/// keeps it as text, so parsing happens in one place.
pub(crate) fn text_or_inline<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_composition_polish_keys() {
        let entries = parse_composition(r#"[{"nazwa": "Cukier", "procent": 60}, {"nazwa": "Kakao", "procent": "40"}]"#)
            .expect("breakdown should parse");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], CompositionEntry { name: "Cukier".to_string(), percent: 60.0 });
        assert_eq!(entries[1].percent, 40.0);
    }

    #[test]
    fn test_parse_composition_skips_blank_names_and_zeroes_bad_percent() {
        let entries = parse_composition(
            r#"[{"name": "  ", "percent": 10}, {"name": " Sugar ", "percent": "lots"}, {"percent": 5}, 42]"#,
        )
        .unwrap();
        assert_eq!(entries, vec![CompositionEntry { name: "Sugar".to_string(), percent: 0.0 }]);
    }

    #[test]
    fn test_parse_composition_malformed_is_none() {
        assert!(parse_composition("").is_none());
        assert!(parse_composition("[{\"nazwa\": \"Cukier\", \"procent\": 6").is_none());
        assert!(parse_composition("{\"nazwa\": \"Cukier\"}").is_none());
        assert!(parse_composition("[]").is_none());
        assert!(parse_composition("[{\"nazwa\": \"\"}]").is_none());
    }

    #[test]
    fn test_parse_origin_table_string_and_list_forms() {
        let table = parse_origin_table(
            r#"[{"nazwa": "Cukier", "kraje": "Polska, Niemcy ,"}, {"name": "Kakao", "countries": ["Ghana", " Ivory Coast, Peru", null]}]"#,
        );
        assert_eq!(table["Cukier"], vec!["Polska", "Niemcy"]);
        assert_eq!(table["Kakao"], vec!["Ghana", "Ivory Coast", "Peru"]);
    }

    #[test]
    fn test_parse_origin_table_last_duplicate_wins() {
        let table = parse_origin_table(r#"[{"nazwa": "A", "kraje": "X"}, {"nazwa": "A", "kraje": "Y"}]"#);
        assert_eq!(table["A"], vec!["Y"]);
    }

    #[test]
    fn test_parse_origin_table_malformed_is_empty() {
        assert!(parse_origin_table("not json").is_empty());
        assert!(parse_origin_table("\"Polska\"").is_empty());
    }

    #[test]
    fn test_split_countries() {
        assert_eq!(split_countries("Poland, Germany"), vec!["Poland", "Germany"]);
        assert_eq!(split_countries("Poland"), vec!["Poland"]);
        assert!(split_countries(" , ").is_empty());
    }
}
