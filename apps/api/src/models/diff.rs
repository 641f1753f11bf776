use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Direction of a change's impact on the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effekt {
    Positiv,
    Negativ,
    Neutral,
}

/// Verdict on a diff. Unknown values fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bewertung {
    #[serde(rename = "akzeptiere")]
    Akzeptiere,
    #[serde(rename = "prüfen")]
    Pruefen,
    #[serde(rename = "ablehnen")]
    Ablehnen,
}

/// One value of a field that appeared in or vanished from the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeldWert {
    pub wert: Value,
    pub anzahl: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effekt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeldStats {
    #[serde(rename = "hinzugefügt")]
    pub hinzugefuegt: Vec<FeldWert>,
    pub entfernt: Vec<FeldWert>,
}

/// Aggregate assignment counts before and after the change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anzahl {
    pub gesamt_vorher: f64,
    pub gesamt_nachher: f64,
    #[serde(rename = "hinzugefügt")]
    pub hinzugefuegt: f64,
    pub entfernt: f64,
}

impl Anzahl {
    /// `gesamt_nachher == gesamt_vorher + hinzugefügt - entfernt`
    pub fn is_consistent(&self) -> bool {
        let expected = self.gesamt_vorher + self.hinzugefuegt - self.entfernt;
        (self.gesamt_nachher - expected).abs() < 1e-9
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Field name → values added and removed.
    pub felder: BTreeMap<String, FeldStats>,
    pub anzahl: Anzahl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificantAssignment {
    pub mitarbeiter: String,
    pub klient: String,
    pub change: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effekt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: Bewertung,
    pub explanation: String,
    pub short_explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant_changes: Option<Vec<SignificantAssignment>>,
}

/// Full result of comparing two assignment snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffsResponse {
    /// Snapshot rows are opaque; only the stats are typed.
    pub vorher: Vec<Map<String, Value>>,
    pub nachher: Vec<Map<String, Value>>,
    pub stats: DiffStats,
    pub assessment: Assessment,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn diff_json() -> Value {
        json!({
            "vorher": [{"ma": "1", "klient": "1"}, {"ma": "2", "klient": "3"}],
            "nachher": [{"ma": "1", "klient": "2"}, {"ma": "2", "klient": "3"}, {"ma": "4", "klient": "1"}],
            "stats": {
                "felder": {
                    "schule": {
                        "hinzugefügt": [{"wert": "Meier-Schule", "anzahl": 1, "effect": "positiv"}],
                        "entfernt": []
                    }
                },
                "anzahl": {"gesamt_vorher": 2, "gesamt_nachher": 3, "hinzugefügt": 2, "entfernt": 1}
            },
            "assessment": {
                "score": "prüfen",
                "explanation": "Eine zusätzliche Zuordnung, aber ein Schulwechsel.",
                "short_explanation": "Schulwechsel prüfen",
                "significant_changes": [
                    {"mitarbeiter": "1", "klient": "2", "change": "neue Schule", "effect": "negativ"}
                ]
            }
        })
    }

    #[test]
    fn test_diff_response_decodes() {
        let diff: DiffsResponse = serde_json::from_value(diff_json()).unwrap();
        assert_eq!(diff.assessment.score, Bewertung::Pruefen);
        assert_eq!(diff.stats.anzahl.hinzugefuegt, 2.0);
        assert!(diff.stats.anzahl.is_consistent());
        assert_eq!(diff.nachher.len(), 3);
        let schule = &diff.stats.felder["schule"];
        assert_eq!(schule.hinzugefuegt[0].effect, Some(Effekt::Positiv));
        assert!(schule.entfernt.is_empty());
    }

    #[test]
    fn test_nested_unknown_keys_and_nulls_still_validate() {
        let mut value = diff_json();
        value["assessment"]["confidence"] = json!(0.7);
        value["assessment"]["significant_changes"] = Value::Null;
        value["stats"]["anzahl"]["netto"] = json!(1);
        value["stats"]["felder"]["schule"]["hinzugefügt"][0]["anzahl"] = json!(1.5);
        let diff: DiffsResponse = serde_json::from_value(value).unwrap();
        assert!(diff.assessment.significant_changes.is_none());
        assert_eq!(diff.stats.felder["schule"].hinzugefuegt[0].anzahl, 1.5);
    }

    #[test]
    fn test_anzahl_consistency() {
        let ok = Anzahl {
            gesamt_vorher: 2.0,
            gesamt_nachher: 3.0,
            hinzugefuegt: 2.0,
            entfernt: 1.0,
        };
        assert!(ok.is_consistent());
        let off = Anzahl {
            gesamt_nachher: 5.0,
            ..ok
        };
        assert!(!off.is_consistent());
        let shrinking = Anzahl {
            gesamt_vorher: 1.0,
            gesamt_nachher: 0.0,
            hinzugefuegt: 0.0,
            entfernt: 1.0,
        };
        assert!(shrinking.is_consistent());
    }

    #[test]
    fn test_unknown_score_fails_closed() {
        let mut value = diff_json();
        value["assessment"]["score"] = json!("eher akzeptieren");
        assert!(serde_json::from_value::<DiffsResponse>(value).is_err());
    }

    #[test]
    fn test_unknown_effect_fails_closed() {
        let mut value = diff_json();
        value["assessment"]["significant_changes"][0]["effect"] = json!("gut");
        assert!(serde_json::from_value::<DiffsResponse>(value).is_err());
    }

    #[test]
    fn test_score_wire_names() {
        assert_eq!(
            serde_json::to_value(Bewertung::Akzeptiere).unwrap(),
            json!("akzeptiere")
        );
        assert_eq!(
            serde_json::to_value(Bewertung::Ablehnen).unwrap(),
            json!("ablehnen")
        );
        assert_eq!(
            serde_json::to_value(Effekt::Neutral).unwrap(),
            json!("neutral")
        );
    }
}
