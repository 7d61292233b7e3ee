pub mod dictionary;

pub use dictionary::{load_dictionary, Dictionary};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document language. `Pl` is the language the records are kept in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub fn is_primary(self) -> bool {
        self == Language::Pl
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Translates an ingredient name from the primary language. Only consulted
/// when rendering a secondary language.
pub trait Translate {
    fn translate(&self, name: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, name: &str) -> String {
        self(name)
    }
}

/// Leaves names untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, name: &str) -> String {
        name.to_string()
    }
}
