//! # RBAC Core - Domain Module
//! 
//! Domain entities for the menu console.

pub mod menu;
pub mod user;
pub mod role;

// Re-export all entities and enums
pub use menu::{SysMenu, MenuType};
pub use user::SysUser;
pub use role::{SysRole, SysUserRole, SysRoleMenu};
