//! # RBAC Core
//! 
//! Menu domain entities, repository ports, the menu tree builder, and the
//! menu service that scopes the tree to a principal.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;
pub mod tree;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use tree::build_forest;
