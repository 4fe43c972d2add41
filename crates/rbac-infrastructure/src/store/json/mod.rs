//! In-memory repository implementations over a loaded fixture

pub mod menu_repo_impl;
pub mod role_menu_repo_impl;

pub use menu_repo_impl::JsonMenuRepository;
pub use role_menu_repo_impl::JsonRoleMenuRepository;
