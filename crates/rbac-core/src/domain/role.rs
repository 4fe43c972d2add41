// ============================================================================
// RBAC Core - Role Entities
// File: crates/rbac-core/src/domain/role.rs
// Description: Roles and the user-role / role-menu grant tables
// ============================================================================

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Sys Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysRole {
    pub role_id: i64,
    pub role_name: String,
    pub role_key: String,
    /// Disabled roles grant nothing
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// User-Role assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysUserRole {
    pub user_id: i64,
    pub role_id: i64,
}

/// Role-Menu grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysRoleMenu {
    pub role_id: i64,
    pub menu_id: i64,
}
