//! Data-access objects.

pub mod group_dao;

pub use group_dao::{find, get_group_dao, GroupDao};
