//! Adapters for external dependencies.

pub mod groups_sea;
