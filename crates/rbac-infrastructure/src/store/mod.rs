//! Menu store module (JSON fixture adapters)

pub mod loader;
pub mod json;

pub use loader::{load_fixture, MenuFixture};
pub use json::{JsonMenuRepository, JsonRoleMenuRepository};
