// ============================================================================
// RBAC Infrastructure - JSON Role-Menu Repository
// File: crates/rbac-infrastructure/src/store/json/role_menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use std::sync::Arc;

use rbac_core::error::DomainError;
use rbac_core::repositories::RoleMenuRepository;

use crate::store::loader::MenuFixture;

pub struct JsonRoleMenuRepository {
    fixture: Arc<MenuFixture>,
}

impl JsonRoleMenuRepository {
    pub fn new(fixture: Arc<MenuFixture>) -> Self {
        Self { fixture }
    }
}

#[async_trait]
impl RoleMenuRepository for JsonRoleMenuRepository {
    async fn count_role_menu_by_menu_id(&self, menu_id: i64) -> Result<u64, DomainError> {
        let count = self
            .fixture
            .role_menus
            .iter()
            .filter(|rm| rm.menu_id == menu_id)
            .count();
        Ok(count as u64)
    }
}
