use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Qualifications as sent by the backend: either a list or one bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Qualifikationen {
    Liste(Vec<String>),
    Einzeln(String),
}

impl Qualifikationen {
    /// Normalized view. A blank single string counts as no qualification.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            Qualifikationen::Liste(items) => items.iter().map(String::as_str).collect(),
            Qualifikationen::Einzeln(item) if item.trim().is_empty() => Vec::new(),
            Qualifikationen::Einzeln(item) => vec![item.as_str()],
        }
    }
}

impl From<Vec<&str>> for Qualifikationen {
    fn from(items: Vec<&str>) -> Self {
        Qualifikationen::Liste(items.into_iter().map(str::to_string).collect())
    }
}

/// Days of prior work with a named client or school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Erfahrung {
    pub name: String,
    pub tage: f64,
}

pub type KlientErfahrung = Erfahrung;
pub type SchuleErfahrung = Erfahrung;

impl Erfahrung {
    pub fn new(name: &str, tage: f64) -> Self {
        Self {
            name: name.to_string(),
            tage,
        }
    }
}

/// A staff member available for reassignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mitarbeiter {
    pub id: String,
    pub name: String,
    pub verfuegbar_bis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeitfenster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifikationen: Option<Qualifikationen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub klient_erfahrung: Option<Vec<KlientErfahrung>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schule_erfahrung: Option<Vec<SchuleErfahrung>>,
    /// School name → number of days worked there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schulen: Option<BTreeMap<String, f64>>,
}

impl Mitarbeiter {
    pub fn qualifikationen(&self) -> Vec<&str> {
        self.qualifikationen
            .as_ref()
            .map(Qualifikationen::as_list)
            .unwrap_or_default()
    }
}
