use std::fmt;

use serde::{Deserialize, Serialize};

use super::mitarbeiter::Qualifikationen;

/// Client urgency. Values outside the known three are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Prioritaet {
    Niedrig,
    Mittel,
    Hoch,
    Sonstige(String),
}

impl Prioritaet {
    pub fn as_str(&self) -> &str {
        match self {
            Prioritaet::Niedrig => "Niedrig",
            Prioritaet::Mittel => "Mittel",
            Prioritaet::Hoch => "Hoch",
            Prioritaet::Sonstige(other) => other,
        }
    }
}

impl From<String> for Prioritaet {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Niedrig" => Prioritaet::Niedrig,
            "Mittel" => Prioritaet::Mittel,
            "Hoch" => Prioritaet::Hoch,
            _ => Prioritaet::Sonstige(raw),
        }
    }
}

impl From<Prioritaet> for String {
    fn from(p: Prioritaet) -> Self {
        match p {
            Prioritaet::Sonstige(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Prioritaet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client needing coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Klient {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nicht_vertreten_bis: Option<String>,
    /// Free text, e.g. "7:40 bis 12:55 Uhr".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anwesenheit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifikationen: Option<Qualifikationen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioritaet: Option<Prioritaet>,
}

impl Klient {
    pub fn qualifikationen(&self) -> Vec<&str> {
        self.qualifikationen
            .as_ref()
            .map(Qualifikationen::as_list)
            .unwrap_or_default()
    }
}

/// Travel time of an assignment: minutes, or a preformatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fahrtzeit {
    Minuten(f64),
    Text(String),
}

/// An assignment record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zuordnung {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fahrtzeit: Option<Fahrtzeit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_priorities_parse() {
        let p: Prioritaet = serde_json::from_value(json!("Hoch")).unwrap();
        assert_eq!(p, Prioritaet::Hoch);
        let p: Prioritaet = serde_json::from_value(json!("Niedrig")).unwrap();
        assert_eq!(p, Prioritaet::Niedrig);
    }

    #[test]
    fn test_unknown_priority_roundtrips_verbatim() {
        let p: Prioritaet = serde_json::from_value(json!("Sofort")).unwrap();
        assert_eq!(p, Prioritaet::Sonstige("Sofort".into()));
        assert_eq!(serde_json::to_value(&p).unwrap(), json!("Sofort"));
        assert_eq!(p.to_string(), "Sofort");
    }

    #[test]
    fn test_priority_is_case_sensitive() {
        let p: Prioritaet = serde_json::from_value(json!("hoch")).unwrap();
        assert_eq!(p, Prioritaet::Sonstige("hoch".into()));
    }

    #[test]
    fn test_klient_minimal() {
        let k: Klient = serde_json::from_value(json!({"id": "2", "name": "Julia Schmid"})).unwrap();
        assert!(k.prioritaet.is_none());
        assert!(k.qualifikationen().is_empty());
        assert_eq!(
            serde_json::to_value(&k).unwrap(),
            json!({"id": "2", "name": "Julia Schmid"})
        );
    }

    #[test]
    fn test_fahrtzeit_number_or_text() {
        let z: Zuordnung = serde_json::from_value(json!({"fahrtzeit": 25})).unwrap();
        assert_eq!(z.fahrtzeit, Some(Fahrtzeit::Minuten(25.0)));
        let z: Zuordnung = serde_json::from_value(json!({"fahrtzeit": "ca. 20 min"})).unwrap();
        assert_eq!(z.fahrtzeit, Some(Fahrtzeit::Text("ca. 20 min".into())));
        let z: Zuordnung = serde_json::from_value(json!({})).unwrap();
        assert_eq!(z, Zuordnung::default());
    }
}
