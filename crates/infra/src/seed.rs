//! JSON seed loading for the in-memory stores.
//!
//! A seed file holds the three record collections:
//!
//! ```json
//! { "menus": [...], "roles": [...], "users": [...] }
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use menugate_auth::{MenuNode, RolePermission, User};

use crate::read_model::{InMemoryMenuStore, InMemoryRoleStore, InMemoryUserStore};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub menus: Vec<MenuNode>,
    #[serde(default)]
    pub roles: Vec<RolePermission>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// The three stores, shareable across request handlers.
#[derive(Debug, Clone, Default)]
pub struct SeededStores {
    pub menus: Arc<InMemoryMenuStore>,
    pub roles: Arc<InMemoryRoleStore>,
    pub users: Arc<InMemoryUserStore>,
}

impl Seed {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse seed document")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let seed = Self::from_json(&raw).with_context(|| format!("in seed file {}", path.display()))?;

        info!(
            path = %path.display(),
            menus = seed.menus.len(),
            roles = seed.roles.len(),
            users = seed.users.len(),
            "loaded seed"
        );
        Ok(seed)
    }

    pub fn into_stores(self) -> SeededStores {
        SeededStores {
            menus: Arc::new(self.menus.into_iter().collect()),
            roles: Arc::new(self.roles.into_iter().collect()),
            users: Arc::new(self.users.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menugate_auth::{MenuStore, RoleStore, UserStore};
    use menugate_core::RoleId;

    const SEED: &str = r#"{
        "menus": [
            { "_id": "m1", "parentId": null, "menuName": "System" },
            { "_id": "m2", "parentId": "m1", "menuName": "Users",
              "action": [{ "menuCode": "user-add" }] }
        ],
        "roles": [
            { "_id": "r1", "checkedKeys": ["m2"], "halfCheckedKeys": ["m1"] }
        ],
        "users": [
            { "userId": 10001, "userName": "jack", "userEmail": "jack@example.com",
              "state": 1, "role": 1, "roleList": ["r1"] }
        ]
    }"#;

    #[test]
    fn parses_seed_into_stores() {
        let stores = Seed::from_json(SEED).unwrap().into_stores();

        assert_eq!(stores.menus.fetch_all().unwrap().len(), 2);
        assert_eq!(stores.roles.fetch_by_ids(&[RoleId::new("r1")]).unwrap().len(), 1);
        assert_eq!(stores.users.list_active().unwrap().len(), 1);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let stores = Seed::from_json("{}").unwrap().into_stores();
        assert!(stores.menus.is_empty().unwrap());
        assert!(stores.roles.is_empty().unwrap());
        assert!(stores.users.is_empty().unwrap());
    }

    #[test]
    fn unreadable_seed_reports_path() {
        let err = Seed::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
