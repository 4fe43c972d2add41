//! Fixture loading

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use rbac_core::domain::{SysMenu, SysRole, SysRoleMenu, SysUserRole};
use rbac_core::error::DomainError;

/// Menus, roles and grants as stored in the fixture file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuFixture {
    #[serde(default)]
    pub menus: Vec<SysMenu>,
    #[serde(default)]
    pub roles: Vec<SysRole>,
    #[serde(default)]
    pub user_roles: Vec<SysUserRole>,
    #[serde(default)]
    pub role_menus: Vec<SysRoleMenu>,
}

impl MenuFixture {
    pub fn from_json(source: &str) -> Result<Self, DomainError> {
        let fixture: MenuFixture = serde_json::from_str(source).map_err(|e| {
            error!("Malformed menu fixture: {}", e);
            DomainError::RepositoryError(e.to_string())
        })?;

        let mut seen = HashSet::new();
        for menu in &fixture.menus {
            menu.check().map_err(|e| {
                error!("Invalid menu {} in fixture: {}", menu.menu_id, e);
                e
            })?;
            if !seen.insert(menu.menu_id) {
                error!("Duplicate menu id {} in fixture", menu.menu_id);
                return Err(DomainError::ValidationError(format!(
                    "duplicate menu id {}",
                    menu.menu_id
                )));
            }
        }
        Ok(fixture)
    }
}

pub async fn load_fixture(path: impl AsRef<Path>) -> Result<Arc<MenuFixture>, DomainError> {
    let path = path.as_ref();
    let source = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read menu fixture {}: {}", path.display(), e);
        DomainError::RepositoryError(format!("{}: {}", path.display(), e))
    })?;

    let fixture = MenuFixture::from_json(&source)?;
    info!(
        "Loaded {} menus, {} roles from {}",
        fixture.menus.len(),
        fixture.roles.len(),
        path.display()
    );
    Ok(Arc::new(fixture))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let fixture = MenuFixture::from_json("{}").unwrap();
        assert!(fixture.menus.is_empty());
        assert!(fixture.role_menus.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = MenuFixture::from_json("{\"menus\": [").unwrap_err();
        assert!(matches!(err, DomainError::RepositoryError(_)));
    }

    #[test]
    fn test_unknown_menu_type() {
        let err = MenuFixture::from_json(
            r#"{"menus": [{"menu_id": 1, "parent_id": 0, "menu_name": "X", "menu_type": "Z"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::RepositoryError(_)));
    }

    #[test]
    fn test_blank_menu_name_rejected() {
        let err = MenuFixture::from_json(
            r#"{"menus": [{"menu_id": 1, "parent_id": 0, "menu_name": ""}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_menu_id_rejected() {
        let err = MenuFixture::from_json(
            r#"{"menus": [
                {"menu_id": 1, "parent_id": 0, "menu_name": "System"},
                {"menu_id": 2, "parent_id": 1, "menu_name": "Users"},
                {"menu_id": 1, "parent_id": 0, "menu_name": "Monitor"}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref msg) if msg == "duplicate menu id 1"));
    }
}
