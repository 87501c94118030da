//! Permission resolution: role grants → visible menu tree + action codes.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use menugate_core::{DomainError, RoleId};

use crate::{AllowedMenus, MenuNode, MenuStore, RoleClass, RoleStore, StoreError, aggregate, build_tree, extract_actions};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Which menu records a user may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuScope {
    /// The whole hierarchy.
    Unrestricted,
    /// Only menus in the aggregated grant set.
    Restricted(AllowedMenus),
}

/// Menus and action codes granted to one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPermissions {
    pub menu_list: Vec<MenuNode>,
    pub action_list: Vec<String>,
}

/// Resolves a user's visible menus and action codes from the stores.
///
/// Each call works on its own fetched copies; the resolver holds no
/// per-request state and can be shared across requests.
#[derive(Debug, Clone)]
pub struct PermissionResolver<M, R> {
    menus: M,
    roles: R,
}

impl<M, R> PermissionResolver<M, R>
where
    M: MenuStore,
    R: RoleStore,
{
    pub fn new(menus: M, roles: R) -> Self {
        Self { menus, roles }
    }

    /// Decide the menu scope for a role class and its assigned roles.
    ///
    /// Role grants are only fetched for restricted users.
    pub fn scope_for(&self, role: RoleClass, role_ids: &[RoleId]) -> Result<MenuScope, ResolveError> {
        match role {
            RoleClass::Unrestricted => Ok(MenuScope::Unrestricted),
            RoleClass::Restricted => {
                let grants = self.roles.fetch_by_ids(role_ids)?;
                let allowed = aggregate(&grants);
                debug!(
                    roles = role_ids.len(),
                    grants = grants.len(),
                    allowed = allowed.len(),
                    "aggregated role grants"
                );
                Ok(MenuScope::Restricted(allowed))
            }
        }
    }

    /// Menu tree and action codes visible to a user.
    pub fn resolve_permissions(
        &self,
        role: RoleClass,
        role_ids: &[RoleId],
    ) -> Result<ResolvedPermissions, ResolveError> {
        let records = match self.scope_for(role, role_ids)? {
            MenuScope::Unrestricted => self.menus.fetch_all()?,
            MenuScope::Restricted(allowed) => self.menus.fetch_by_ids(&allowed)?,
        };

        let menu_list = build_tree(&records, None)?;
        let action_list = extract_actions(&menu_list);

        debug!(
            %role,
            records = records.len(),
            top_level = menu_list.len(),
            actions = action_list.len(),
            "resolved menu permissions"
        );

        Ok(ResolvedPermissions {
            menu_list,
            action_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use menugate_core::MenuId;

    use crate::RolePermission;

    struct FixedMenus(Vec<MenuNode>);

    impl MenuStore for FixedMenus {
        fn fetch_all(&self) -> Result<Vec<MenuNode>, StoreError> {
            Ok(self.0.clone())
        }

        fn fetch_by_ids(&self, ids: &AllowedMenus) -> Result<Vec<MenuNode>, StoreError> {
            Ok(self.0.iter().filter(|n| ids.contains(&n.id)).cloned().collect())
        }
    }

    /// Role store that records which role ids it was asked for.
    #[derive(Default)]
    struct RecordingRoles {
        roles: Vec<RolePermission>,
        asked: Mutex<Vec<Vec<RoleId>>>,
    }

    impl RoleStore for RecordingRoles {
        fn fetch_by_ids(&self, ids: &[RoleId]) -> Result<Vec<RolePermission>, StoreError> {
            self.asked.lock().unwrap().push(ids.to_vec());
            Ok(self.roles.iter().filter(|r| ids.contains(&r.role_id)).cloned().collect())
        }
    }

    struct DownRoles;

    impl RoleStore for DownRoles {
        fn fetch_by_ids(&self, _ids: &[RoleId]) -> Result<Vec<RolePermission>, StoreError> {
            Err(StoreError::Unavailable("role store offline".to_string()))
        }
    }

    fn node(id: &str, parent: Option<&str>) -> MenuNode {
        MenuNode::new(id, parent.map(MenuId::new))
    }

    fn catalogue() -> Vec<MenuNode> {
        vec![
            node("sys", None),
            node("users", Some("sys")).with_actions(["user-create", "user-delete"]),
            node("menus", Some("sys")).with_actions(["menu-edit"]),
            node("audit", None),
            node("logs", Some("audit")).with_actions(["log-view"]),
        ]
    }

    fn ids(raw: &[&str]) -> Vec<RoleId> {
        raw.iter().map(|s| RoleId::new(*s)).collect()
    }

    #[test]
    fn unrestricted_sees_everything_and_skips_role_lookup() {
        let roles = RecordingRoles {
            roles: vec![RolePermission::new("r1").checked(["logs"])],
            ..Default::default()
        };
        let resolver = PermissionResolver::new(FixedMenus(catalogue()), roles);

        let full = build_tree(&catalogue(), None).unwrap();
        for role_ids in [ids(&[]), ids(&["r1"]), ids(&["nope", "r1"])] {
            let resolved = resolver.resolve_permissions(RoleClass::Unrestricted, &role_ids).unwrap();
            assert_eq!(resolved.menu_list, full);
            assert_eq!(resolved.action_list, vec!["log-view", "menu-edit", "user-create", "user-delete"]);
        }

        assert!(resolver.roles.asked.lock().unwrap().is_empty());
    }

    #[test]
    fn restricted_sees_only_granted_branches() {
        let roles = RecordingRoles {
            roles: vec![
                RolePermission::new("r1").checked(["users"]).half_checked(["sys"]),
                RolePermission::new("r2").checked(["logs"]).half_checked(["audit"]),
            ],
            ..Default::default()
        };
        let resolver = PermissionResolver::new(FixedMenus(catalogue()), roles);

        let resolved = resolver.resolve_permissions(RoleClass::Restricted, &ids(&["r1"])).unwrap();
        assert_eq!(resolved.menu_list.len(), 1);
        assert_eq!(resolved.menu_list[0].id.as_str(), "sys");
        assert_eq!(resolved.menu_list[0].children.len(), 1);
        assert_eq!(resolved.action_list, vec!["user-create", "user-delete"]);

        let both = resolver
            .resolve_permissions(RoleClass::Restricted, &ids(&["r2", "r1"]))
            .unwrap();
        let top: Vec<&str> = both.menu_list.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(top, vec!["sys", "audit"]);
        assert_eq!(both.action_list, vec!["log-view", "user-create", "user-delete"]);
    }

    #[test]
    fn restricted_without_grants_sees_nothing() {
        let resolver = PermissionResolver::new(FixedMenus(catalogue()), RecordingRoles::default());

        let resolved = resolver.resolve_permissions(RoleClass::Restricted, &ids(&["ghost"])).unwrap();
        assert!(resolved.menu_list.is_empty());
        assert!(resolved.action_list.is_empty());
        assert_eq!(*resolver.roles.asked.lock().unwrap(), vec![ids(&["ghost"])]);
    }

    #[test]
    fn duplicate_role_ids_do_not_duplicate_menus() {
        let roles = RecordingRoles {
            roles: vec![RolePermission::new("r1").checked(["menus"]).half_checked(["sys"])],
            ..Default::default()
        };
        let resolver = PermissionResolver::new(FixedMenus(catalogue()), roles);

        let scope = resolver.scope_for(RoleClass::Restricted, &ids(&["r1", "r1"])).unwrap();
        let MenuScope::Restricted(allowed) = scope else {
            panic!("expected restricted scope");
        };
        assert_eq!(allowed.len(), 2);

        let resolved = resolver.resolve_permissions(RoleClass::Restricted, &ids(&["r1", "r1"])).unwrap();
        assert_eq!(resolved.action_list, vec!["menu-edit"]);
    }

    #[test]
    fn store_failures_surface_as_store_errors() {
        let resolver = PermissionResolver::new(FixedMenus(catalogue()), DownRoles);

        let err = resolver.resolve_permissions(RoleClass::Restricted, &ids(&["r1"])).unwrap_err();
        assert!(matches!(err, ResolveError::Store(StoreError::Unavailable(_))));

        // The unrestricted path never touches the role store.
        assert!(resolver.resolve_permissions(RoleClass::Unrestricted, &[]).is_ok());
    }

    #[test]
    fn cyclic_menu_data_is_a_domain_fault() {
        let menus = vec![node("a", None), node("a", Some("a"))];
        let resolver = PermissionResolver::new(FixedMenus(menus), RecordingRoles::default());

        let err = resolver.resolve_permissions(RoleClass::Unrestricted, &[]).unwrap_err();
        assert!(matches!(err, ResolveError::Domain(DomainError::MalformedHierarchy { .. })));
    }
}
