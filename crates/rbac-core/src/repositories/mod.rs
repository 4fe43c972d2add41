//! Repository traits (ports)

pub mod menu_repository;
pub mod role_menu_repository;

pub use menu_repository::MenuRepository;
pub use role_menu_repository::RoleMenuRepository;

#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use role_menu_repository::MockRoleMenuRepository;
