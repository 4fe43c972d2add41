// ============================================================================
// RBAC Core - Sys Menu Entity
// File: crates/rbac-core/src/domain/menu.rs
// Description: Menu / permission entry and its tree node form
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use rbac_shared::constants::PERMS_SEPARATOR;

use crate::error::DomainError;

/// Menu type enumeration, stored as the single-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MenuType {
    /// Directory ("M"), groups menus in the navigation
    Directory,
    /// Menu ("C"), a navigable page
    Menu,
    /// Button ("F"), an action permission inside a page
    Button,
}

impl MenuType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuType::Directory => "M",
            MenuType::Menu => "C",
            MenuType::Button => "F",
        }
    }
}

impl TryFrom<&str> for MenuType {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "M" | "DIRECTORY" => Ok(MenuType::Directory),
            "C" | "MENU" => Ok(MenuType::Menu),
            "F" | "BUTTON" => Ok(MenuType::Button),
            _ => Err(DomainError::InvalidMenuType(s.to_string())),
        }
    }
}

impl TryFrom<String> for MenuType {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        MenuType::try_from(s.as_str())
    }
}

impl From<MenuType> for String {
    fn from(t: MenuType) -> Self {
        t.as_str().to_string()
    }
}

impl Default for MenuType {
    fn default() -> Self {
        MenuType::Menu
    }
}

fn default_visible() -> bool {
    true
}

/// Sys Menu entity
///
/// Repositories hand these out flat with `children` empty; the tree builder
/// returns copies whose `children` are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SysMenu {
    pub menu_id: i64,

    /// Owning menu, or `ROOT_MENU_ID` for a top-level entry
    pub parent_id: i64,

    #[validate(length(min = 1, max = 50, message = "Menu name must be between 1 and 50 characters"))]
    pub menu_name: String,

    #[serde(default)]
    pub order_num: i32,

    #[validate(length(max = 200, message = "Menu URL too long"))]
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub menu_type: MenuType,

    #[serde(default = "default_visible")]
    pub visible: bool,

    #[validate(length(max = 100, message = "Permission string too long"))]
    #[serde(default)]
    pub perms: Option<String>,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SysMenu>,
}

impl SysMenu {
    pub fn new(
        menu_id: i64,
        parent_id: i64,
        menu_name: String,
        menu_type: MenuType,
        order_num: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            menu_id,
            parent_id,
            menu_name: menu_name.trim().to_string(),
            order_num,
            url: None,
            menu_type,
            visible: true,
            perms: None,
            icon: None,
            create_time: Some(Utc::now()),
            children: Vec::new(),
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Re-checks field limits on a record that did not come through `new`.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;
        Ok(())
    }

    pub fn with_perms(mut self, perms: &str) -> Self {
        self.perms = Some(perms.trim().to_string());
        self
    }

    pub fn is_button(&self) -> bool {
        self.menu_type == MenuType::Button
    }

    /// Visible directory or menu; what the navigation sidebar renders.
    pub fn is_normal(&self) -> bool {
        !self.is_button() && self.visible
    }

    /// Individual permission keys; `perms` may hold several, comma separated.
    pub fn perm_list(&self) -> Vec<&str> {
        self.perms
            .as_deref()
            .map(|p| {
                p.split(PERMS_SEPARATOR)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_menu() {
        let menu = SysMenu::new(1, 0, " System ".to_string(), MenuType::Directory, 1);
        assert!(menu.is_ok());
        let menu = menu.unwrap();
        assert_eq!(menu.menu_name, "System");
        assert!(menu.is_normal());
        assert!(menu.children.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(SysMenu::new(1, 0, "   ".to_string(), MenuType::Menu, 1).is_err());
    }

    #[test]
    fn test_menu_type_codes() {
        assert_eq!(MenuType::try_from("M").unwrap(), MenuType::Directory);
        assert_eq!(MenuType::try_from("c").unwrap(), MenuType::Menu);
        assert_eq!(MenuType::try_from("button").unwrap(), MenuType::Button);
        assert!(matches!(
            MenuType::try_from("X"),
            Err(DomainError::InvalidMenuType(_))
        ));
    }

    #[test]
    fn test_button_is_not_normal() {
        let button = SysMenu::new(3, 2, "Delete user".to_string(), MenuType::Button, 1)
            .unwrap()
            .with_perms("system:user:remove");
        assert!(button.is_button());
        assert!(!button.is_normal());

        let mut hidden = SysMenu::new(4, 0, "Hidden".to_string(), MenuType::Menu, 1).unwrap();
        hidden.visible = false;
        assert!(!hidden.is_normal());
    }

    #[test]
    fn test_perm_list_splits_and_trims() {
        let menu = SysMenu::new(2, 1, "Users".to_string(), MenuType::Menu, 1)
            .unwrap()
            .with_perms("system:user:list, system:user:query,,");
        assert_eq!(menu.perm_list(), vec!["system:user:list", "system:user:query"]);

        let bare = SysMenu::new(3, 1, "Roles".to_string(), MenuType::Menu, 2).unwrap();
        assert!(bare.perm_list().is_empty());
    }

    #[test]
    fn test_deserialize_flat_record() {
        let menu: SysMenu = serde_json::from_str(
            r#"{"menu_id": 7, "parent_id": 0, "menu_name": "Monitor", "menu_type": "M"}"#,
        )
        .unwrap();
        assert_eq!(menu.menu_type, MenuType::Directory);
        assert!(menu.visible);
        assert!(menu.children.is_empty());

        let json = serde_json::to_value(&menu).unwrap();
        assert_eq!(json["menu_type"], "M");
        assert!(json.get("children").is_none());
    }
}
