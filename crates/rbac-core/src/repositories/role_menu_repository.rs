//! Role-menu repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoleMenuRepository: Send + Sync {
    /// Number of roles the menu is granted to.
    async fn count_role_menu_by_menu_id(&self, menu_id: i64) -> Result<u64, DomainError>;
}
