//! Collaborator boundaries: where menus, role grants and users come from.
//!
//! Implementations return fully materialized collections. Retries, timeouts
//! and connection handling belong to the implementation, not to callers.

use std::sync::Arc;

use thiserror::Error;

use menugate_core::RoleId;

use crate::{AllowedMenus, MenuNode, RolePermission, User, UserFilter};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Source of menu records.
pub trait MenuStore: Send + Sync {
    /// Every menu record, in store order.
    fn fetch_all(&self) -> Result<Vec<MenuNode>, StoreError>;

    /// Records whose id is in `ids`, in store order.
    fn fetch_by_ids(&self, ids: &AllowedMenus) -> Result<Vec<MenuNode>, StoreError>;
}

/// Source of role grants.
pub trait RoleStore: Send + Sync {
    /// Grants of the roles whose id is in `ids` (each role at most once).
    fn fetch_by_ids(&self, ids: &[RoleId]) -> Result<Vec<RolePermission>, StoreError>;
}

/// Source of user records.
pub trait UserStore: Send + Sync {
    /// Users whose state is active, in store order.
    fn list_active(&self) -> Result<Vec<User>, StoreError>;

    /// Users matching every set field of `filter`, in store order.
    fn list(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError>;
}

impl<S> MenuStore for Arc<S>
where
    S: MenuStore + ?Sized,
{
    fn fetch_all(&self) -> Result<Vec<MenuNode>, StoreError> {
        (**self).fetch_all()
    }

    fn fetch_by_ids(&self, ids: &AllowedMenus) -> Result<Vec<MenuNode>, StoreError> {
        (**self).fetch_by_ids(ids)
    }
}

impl<S> RoleStore for Arc<S>
where
    S: RoleStore + ?Sized,
{
    fn fetch_by_ids(&self, ids: &[RoleId]) -> Result<Vec<RolePermission>, StoreError> {
        (**self).fetch_by_ids(ids)
    }
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list_active(&self) -> Result<Vec<User>, StoreError> {
        (**self).list_active()
    }

    fn list(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        (**self).list(filter)
    }
}
