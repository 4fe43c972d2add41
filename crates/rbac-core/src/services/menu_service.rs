// ============================================================================
// RBAC Core - Menu Service
// File: crates/rbac-core/src/services/menu_service.rs
// ============================================================================
//! Menu service: picks the flat menu list a principal may see and turns it
//! into the navigation tree.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

use rbac_shared::constants::ROOT_MENU_ID;

use crate::domain::{SysMenu, SysUser};
use crate::error::DomainError;
use crate::repositories::{MenuRepository, RoleMenuRepository};
use crate::tree::build_forest;

pub struct MenuService<M: MenuRepository, R: RoleMenuRepository> {
    menu_repo: Arc<M>,
    role_menu_repo: Arc<R>,
}

impl<M: MenuRepository, R: RoleMenuRepository> MenuService<M, R> {
    pub fn new(menu_repo: Arc<M>, role_menu_repo: Arc<R>) -> Self {
        Self {
            menu_repo,
            role_menu_repo,
        }
    }

    /// Navigation tree for a principal.
    ///
    /// The administrator sees every visible directory and menu; anyone else
    /// only what their roles grant. No principal, or one without an id,
    /// yields an empty tree.
    pub async fn select_menus_by_user(
        &self,
        user: Option<&SysUser>,
    ) -> Result<Vec<SysMenu>, DomainError> {
        let menus = self.flat_menus_for(user).await?;
        Ok(build_forest(&menus, ROOT_MENU_ID))
    }

    /// Flat list of every menu, buttons included.
    pub async fn select_menu_all(&self) -> Result<Vec<SysMenu>, DomainError> {
        self.menu_repo.select_menu_all().await
    }

    /// Tree of every menu, buttons included, for the menu management page.
    pub async fn select_menu_tree_all(&self) -> Result<Vec<SysMenu>, DomainError> {
        let menus = self.menu_repo.select_menu_all().await?;
        Ok(build_forest(&menus, ROOT_MENU_ID))
    }

    /// Distinct permission keys the principal holds, button grants included.
    pub async fn select_perms_by_user(
        &self,
        user: Option<&SysUser>,
    ) -> Result<BTreeSet<String>, DomainError> {
        let menus = match user {
            None => Vec::new(),
            Some(u) if u.is_admin() => self.menu_repo.select_menu_all().await?,
            Some(u) => match u.user_id {
                Some(user_id) => self.menu_repo.select_menus_all_by_user_id(user_id).await?,
                None => Vec::new(),
            },
        };

        Ok(menus
            .iter()
            .flat_map(|m| m.perm_list())
            .map(str::to_string)
            .collect())
    }

    /// Whether any role still holds a grant on the menu.
    pub async fn check_menu_exist_role(&self, menu_id: i64) -> Result<bool, DomainError> {
        let count = self.role_menu_repo.count_role_menu_by_menu_id(menu_id).await?;
        debug!("Menu {} is granted to {} roles", menu_id, count);
        Ok(count > 0)
    }

    async fn flat_menus_for(&self, user: Option<&SysUser>) -> Result<Vec<SysMenu>, DomainError> {
        let Some(user) = user else {
            debug!("No principal; returning no menus");
            return Ok(Vec::new());
        };

        if user.is_admin() {
            info!("Loading all normal menus for administrator {}", user.login_name);
            return self.menu_repo.select_menu_normal_all().await;
        }

        match user.user_id {
            Some(user_id) => {
                info!("Loading menus granted to user {}", user_id);
                self.menu_repo.select_menus_by_user_id(user_id).await
            }
            None => {
                debug!("Principal {} has no id; returning no menus", user.login_name);
                Ok(Vec::new())
            }
        }
    }
}
