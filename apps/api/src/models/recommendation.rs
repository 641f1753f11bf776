use serde::{Deserialize, Serialize};

use super::klient::Klient;
use super::mitarbeiter::Mitarbeiter;

/// A proposed staff → client pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub mitarbeiter: Mitarbeiter,
    pub klient: Klient,
    #[serde(
        rename = "alternativeKlienten",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_klienten: Option<Vec<Klient>>,
}

impl Recommendation {
    /// Alternative candidates, never including the primary client.
    pub fn alternativen(&self) -> impl Iterator<Item = &Klient> {
        self.alternative_klienten
            .iter()
            .flatten()
            .filter(move |k| k.id != self.klient.id)
    }
}
