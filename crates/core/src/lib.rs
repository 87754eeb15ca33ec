//! Quarry core — UI-free logic for the Quarry search front-end: result-card
//! projection, body extraction, field validation, the submission state
//! machine, search-box panel state, domain mapping, and configuration.

pub mod body;
pub mod card;
pub mod config;
pub mod form;
pub mod mapping;
pub mod searchbox;
pub mod text;
pub mod types;
pub mod validate;
