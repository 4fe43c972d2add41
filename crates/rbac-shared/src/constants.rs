//! Application-wide constants

/// Parent id of a top-level menu.
pub const ROOT_MENU_ID: i64 = 0;
/// User id of the built-in super administrator.
pub const ADMIN_USER_ID: i64 = 1;

pub const PERMS_SEPARATOR: char = ',';

pub const DEFAULT_FIXTURE_PATH: &str = "config/menus.json";
