//! Shared presentational components.

mod icons;

pub use icons::{CheckCircleIcon, DateIcon, SearchIcon};
