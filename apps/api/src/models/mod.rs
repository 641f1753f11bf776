//! Shapes exchanged with the recommendation/diff backend.
//!
//! These types validate backend replies; they are not used to rebuild them.
//! Keys they do not name are ignored during decoding, and the routes relay
//! the backend's JSON as received.

pub mod diff;
pub mod filter;
pub mod klient;
pub mod mitarbeiter;
pub mod recommendation;

pub use diff::{
    Anzahl, Assessment, Bewertung, DiffStats, DiffsResponse, Effekt, FeldStats, FeldWert,
    SignificantAssignment,
};
pub use filter::FilterCriteria;
pub use klient::{Fahrtzeit, Klient, Prioritaet, Zuordnung};
pub use mitarbeiter::{Erfahrung, KlientErfahrung, Mitarbeiter, Qualifikationen, SchuleErfahrung};
pub use recommendation::Recommendation;
