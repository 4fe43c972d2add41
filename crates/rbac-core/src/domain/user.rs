//! Principal requesting a menu tree

use serde::{Deserialize, Serialize};

use rbac_shared::constants::ADMIN_USER_ID;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysUser {
    pub user_id: Option<i64>,
    pub login_name: String,
    pub user_name: String,
}

impl SysUser {
    pub fn new(user_id: i64, login_name: &str, user_name: &str) -> Self {
        Self {
            user_id: Some(user_id),
            login_name: login_name.to_string(),
            user_name: user_name.to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_id == Some(ADMIN_USER_ID)
    }
}
