// ============================================================================
// RBAC Infrastructure - JSON Menu Repository
// File: crates/rbac-infrastructure/src/store/json/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use rbac_core::domain::SysMenu;
use rbac_core::error::DomainError;
use rbac_core::repositories::MenuRepository;

use crate::store::loader::MenuFixture;

pub struct JsonMenuRepository {
    fixture: Arc<MenuFixture>,
}

impl JsonMenuRepository {
    pub fn new(fixture: Arc<MenuFixture>) -> Self {
        Self { fixture }
    }

    /// Menus passing `keep`, ordered by parent then display order.
    fn select_sorted<F>(&self, keep: F) -> Vec<SysMenu>
    where
        F: Fn(&SysMenu) -> bool,
    {
        let mut menus: Vec<SysMenu> = self
            .fixture
            .menus
            .iter()
            .filter(|&m| keep(m))
            .cloned()
            .map(|mut m| {
                m.children.clear();
                m
            })
            .collect();
        menus.sort_by_key(|m| (m.parent_id, m.order_num));
        menus
    }

    fn granted_menu_ids(&self, user_id: i64) -> HashSet<i64> {
        let role_ids: HashSet<i64> = self
            .fixture
            .user_roles
            .iter()
            .filter(|ur| ur.user_id == user_id)
            .map(|ur| ur.role_id)
            .filter(|role_id| {
                self.fixture
                    .roles
                    .iter()
                    .any(|r| r.role_id == *role_id && r.enabled)
            })
            .collect();

        self.fixture
            .role_menus
            .iter()
            .filter(|rm| role_ids.contains(&rm.role_id))
            .map(|rm| rm.menu_id)
            .collect()
    }
}

#[async_trait]
impl MenuRepository for JsonMenuRepository {
    async fn select_menu_all(&self) -> Result<Vec<SysMenu>, DomainError> {
        Ok(self.select_sorted(|_| true))
    }

    async fn select_menu_normal_all(&self) -> Result<Vec<SysMenu>, DomainError> {
        Ok(self.select_sorted(SysMenu::is_normal))
    }

    async fn select_menus_by_user_id(&self, user_id: i64) -> Result<Vec<SysMenu>, DomainError> {
        let granted = self.granted_menu_ids(user_id);
        debug!("User {} holds {} menu grants", user_id, granted.len());
        Ok(self.select_sorted(|m| m.is_normal() && granted.contains(&m.menu_id)))
    }

    async fn select_menus_all_by_user_id(&self, user_id: i64) -> Result<Vec<SysMenu>, DomainError> {
        let granted = self.granted_menu_ids(user_id);
        Ok(self.select_sorted(|m| granted.contains(&m.menu_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbac_core::domain::MenuType;

    fn repo() -> JsonMenuRepository {
        let fixture = MenuFixture::from_json(
            r#"{
                "menus": [
                    {"menu_id": 3, "parent_id": 1, "menu_name": "Roles", "menu_type": "C", "order_num": 2},
                    {"menu_id": 1, "parent_id": 0, "menu_name": "System", "menu_type": "M", "order_num": 1},
                    {"menu_id": 2, "parent_id": 1, "menu_name": "Users", "menu_type": "C", "order_num": 1},
                    {"menu_id": 4, "parent_id": 2, "menu_name": "Add user", "menu_type": "F", "order_num": 1},
                    {"menu_id": 5, "parent_id": 0, "menu_name": "Hidden", "menu_type": "C", "visible": false}
                ],
                "roles": [
                    {"role_id": 2, "role_name": "Common", "role_key": "common"},
                    {"role_id": 3, "role_name": "Locked", "role_key": "locked", "enabled": false}
                ],
                "user_roles": [
                    {"user_id": 7, "role_id": 2},
                    {"user_id": 7, "role_id": 3},
                    {"user_id": 8, "role_id": 3}
                ],
                "role_menus": [
                    {"role_id": 2, "menu_id": 1},
                    {"role_id": 2, "menu_id": 2},
                    {"role_id": 2, "menu_id": 4},
                    {"role_id": 3, "menu_id": 3}
                ]
            }"#,
        )
        .unwrap();
        JsonMenuRepository::new(Arc::new(fixture))
    }

    fn ids(menus: &[SysMenu]) -> Vec<i64> {
        menus.iter().map(|m| m.menu_id).collect()
    }

    #[tokio::test]
    async fn test_select_menu_all_sorted() {
        let menus = repo().select_menu_all().await.unwrap();
        assert_eq!(ids(&menus), vec![5, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_normal_all_excludes_buttons_and_hidden() {
        let menus = repo().select_menu_normal_all().await.unwrap();
        assert_eq!(ids(&menus), vec![1, 2, 3]);
        assert!(menus.iter().all(|m| m.menu_type != MenuType::Button));
    }

    #[tokio::test]
    async fn test_user_menus_follow_enabled_roles() {
        let repo = repo();
        assert_eq!(ids(&repo.select_menus_by_user_id(7).await.unwrap()), vec![1, 2]);
        assert!(repo.select_menus_by_user_id(8).await.unwrap().is_empty());
        assert!(repo.select_menus_by_user_id(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_user_menus_keep_buttons() {
        let repo = repo();
        assert_eq!(ids(&repo.select_menus_all_by_user_id(7).await.unwrap()), vec![1, 2, 4]);
        assert!(repo.select_menus_all_by_user_id(8).await.unwrap().is_empty());
    }
}
