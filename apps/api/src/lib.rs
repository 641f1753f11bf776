//! Einsatz API — gateway between the scheduling UI and the recommendation/diff backend.

pub mod backend_client;
pub mod config;
pub mod errors;
pub mod format;
pub mod models;
pub mod routes;
pub mod sample_data;
pub mod state;
