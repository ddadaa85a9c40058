//! Municipality classification for shipping zones

use std::sync::LazyLock;

use crate::types::{Address, Municipality, StructuredAddress};

/// Keyword to canonical municipality name, checked in this order.
///
/// More specific keywords must come before shorter ones they contain
/// (`"naga city"` before `"naga"`); the first match wins.
pub const MUNICIPALITY_KEYWORDS: &[(&str, &str)] = &[
    ("naga city", "Naga City"),
    ("naga", "Naga City"),
    ("iriga city", "Iriga City"),
    ("iriga", "Iriga City"),
    ("cabusao", "Cabusao"),
    ("del gallego", "Del Gallego"),
    ("lupi", "Lupi"),
    ("ragay", "Ragay"),
    ("sipocot", "Sipocot"),
    ("baao", "Baao"),
    ("balatan", "Balatan"),
    ("bombon", "Bombon"),
    ("buhi", "Buhi"),
    ("bula", "Bula"),
    ("calabanga", "Calabanga"),
    ("camaligan", "Camaligan"),
    ("canaman", "Canaman"),
    ("caramoan", "Caramoan"),
    ("gainza", "Gainza"),
    ("garchitorena", "Garchitorena"),
    ("lagonoy", "Lagonoy"),
    ("libmanan", "Libmanan"),
    ("magarao", "Magarao"),
    ("milaor", "Milaor"),
    ("minalabac", "Minalabac"),
    ("nabua", "Nabua"),
    ("ocampo", "Ocampo"),
    ("pamplona", "Pamplona"),
    ("pasacao", "Pasacao"),
    ("presentacion", "Presentacion"),
    ("sagñay", "Sagñay"),
    ("sagnay", "Sagñay"),
    ("san fernando", "San Fernando"),
    ("san jose", "San Jose"),
    ("siruma", "Siruma"),
    ("tigaon", "Tigaon"),
    ("tinambac", "Tinambac"),
    ("pili", "Pili"),
    ("bato", "Bato"),
    ("goa", "Goa"),
];

/// Resolves addresses to the municipality used for shipping.
#[derive(Debug, Clone)]
pub struct MunicipalityClassifier {
    /// Lowercased keyword and canonical municipality, in match order.
    keywords: Vec<(String, Municipality)>,
}

impl MunicipalityClassifier {
    /// Creates a classifier over the built-in keyword table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_keywords(
            MUNICIPALITY_KEYWORDS
                .iter()
                .map(|&(keyword, name)| (keyword, Municipality::from_static(name))),
        )
    }

    /// Creates a classifier over a custom ordered keyword table.
    #[must_use]
    pub fn with_keywords<K>(keywords: impl IntoIterator<Item = (K, Municipality)>) -> Self
    where
        K: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|(keyword, municipality)| (keyword.as_ref().trim().to_lowercase(), municipality))
            .filter(|(keyword, _)| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    /// Resolves the municipality for any address shape.
    #[must_use]
    pub fn classify(&self, address: &Address) -> Municipality {
        match address {
            Address::Structured(structured) => structured_municipality(structured),
            Address::FreeText(text) => self.classify_text(text),
        }
    }

    /// Extracts a municipality from free text by keyword.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> Municipality {
        let haystack = text.to_lowercase();
        if haystack.trim().is_empty() {
            return Municipality::other();
        }

        self.keywords
            .iter()
            .find(|(keyword, _)| haystack.contains(keyword.as_str()))
            .map(|(_, municipality)| municipality.clone())
            .unwrap_or_else(Municipality::other)
    }
}

impl Default for MunicipalityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_CLASSIFIER: LazyLock<MunicipalityClassifier> =
    LazyLock::new(MunicipalityClassifier::new);

/// Resolves an address with the built-in keyword table.
#[must_use]
pub fn classify(address: &Address) -> Municipality {
    DEFAULT_CLASSIFIER.classify(address)
}

/// Extracts a municipality from free text with the built-in keyword table.
#[must_use]
pub fn classify_text(text: &str) -> Municipality {
    DEFAULT_CLASSIFIER.classify_text(text)
}

/// The selector already validated the city, so its name is used as-is.
fn structured_municipality(address: &StructuredAddress) -> Municipality {
    let name = address.city.name.trim();
    if name.is_empty() {
        Municipality::other()
    } else {
        Municipality::new(name)
    }
}
