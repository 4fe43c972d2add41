//! Menu repository trait (port)
//!
//! Every query returns a flat list with `children` left empty.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::SysMenu;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All menus, buttons included.
    async fn select_menu_all(&self) -> Result<Vec<SysMenu>, DomainError>;

    /// All visible directories and menus, buttons excluded.
    async fn select_menu_normal_all(&self) -> Result<Vec<SysMenu>, DomainError>;

    /// Visible directories and menus granted to the user through its enabled roles.
    async fn select_menus_by_user_id(&self, user_id: i64) -> Result<Vec<SysMenu>, DomainError>;

    /// Every menu granted to the user through its enabled roles, buttons and
    /// hidden entries included.
    async fn select_menus_all_by_user_id(&self, user_id: i64) -> Result<Vec<SysMenu>, DomainError>;
}
