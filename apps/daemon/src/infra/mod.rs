//! Infrastructure layer - connection bootstrap and state building.

pub mod db;
pub mod state;
