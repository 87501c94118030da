//! Store + resolver wiring.

use std::sync::Arc;

use menugate_auth::{MenuStore, PermissionResolver, RoleStore, UserStore};
use menugate_infra::{Seed, SeededStores};

use crate::config::ApiConfig;

pub type SharedResolver = PermissionResolver<Arc<dyn MenuStore>, Arc<dyn RoleStore>>;

/// Everything request handlers need, shared behind one `Arc`.
pub struct AppServices {
    pub resolver: SharedResolver,
    pub users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(menus: Arc<dyn MenuStore>, roles: Arc<dyn RoleStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            resolver: PermissionResolver::new(menus, roles),
            users,
        }
    }

    pub fn from_stores(stores: SeededStores) -> Self {
        Self::new(stores.menus, stores.roles, stores.users)
    }
}

/// Wire in-memory stores, seeded from `MENUGATE_SEED` when configured.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let seed = match &config.seed_path {
        Some(path) => Seed::load(path)?,
        None => {
            tracing::warn!("MENUGATE_SEED not set; starting with empty stores");
            Seed::default()
        }
    };

    Ok(AppServices::from_stores(seed.into_stores()))
}
