//! # RBAC Infrastructure
//! 
//! Menu store implementations (adapters).

pub mod store;

pub use store::{load_fixture, MenuFixture, JsonMenuRepository, JsonRoleMenuRepository};
