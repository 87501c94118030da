//! Role grants and their aggregation into one allowed-menu set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use menugate_core::{Entity, MenuId, RoleId};

use crate::menu::null_as_empty;

/// Menu ids a restricted user may see.
pub type AllowedMenus = HashSet<MenuId>;

/// Menu grants of a single role.
///
/// `checked_ids` are direct grants; `half_checked_ids` are ancestors kept
/// visible because some descendant is granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    #[serde(alias = "_id")]
    pub role_id: RoleId,

    #[serde(default, deserialize_with = "null_as_empty", alias = "checkedKeys")]
    pub checked_ids: Vec<MenuId>,

    #[serde(default, deserialize_with = "null_as_empty", alias = "halfCheckedKeys")]
    pub half_checked_ids: Vec<MenuId>,
}

impl RolePermission {
    pub fn new(role_id: impl Into<RoleId>) -> Self {
        Self {
            role_id: role_id.into(),
            checked_ids: Vec::new(),
            half_checked_ids: Vec::new(),
        }
    }

    pub fn checked<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MenuId>,
    {
        self.checked_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn half_checked<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MenuId>,
    {
        self.half_checked_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Every menu id this role makes visible (direct and ancestor grants).
    pub fn granted_ids(&self) -> impl Iterator<Item = &MenuId> {
        self.checked_ids.iter().chain(self.half_checked_ids.iter())
    }
}

impl Entity for RolePermission {
    type Id = RoleId;

    fn id(&self) -> &Self::Id {
        &self.role_id
    }
}

/// Merge the grants of several roles into one deduplicated set.
///
/// Union is commutative and idempotent, so the order of `role_permissions`
/// never matters. No roles (or roles granting nothing) yield an empty set.
pub fn aggregate<'a, I>(role_permissions: I) -> AllowedMenus
where
    I: IntoIterator<Item = &'a RolePermission>,
{
    let mut allowed = AllowedMenus::new();
    for role in role_permissions {
        allowed.extend(role.granted_ids().cloned());
    }
    allowed
}
