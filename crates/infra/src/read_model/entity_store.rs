use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::sync::RwLock;

use tracing::warn;

use menugate_auth::{
    AllowedMenus, MenuNode, MenuStore, RolePermission, RoleStore, StoreError, User, UserFilter, UserStore,
};
use menugate_core::{Entity, RoleId};

/// In-memory, insertion-ordered record store for tests/dev.
///
/// Records keep the position of their first insertion; upserting an existing
/// id replaces the record in place. Queries return records in store order.
pub struct InMemoryEntityStore<E: Entity> {
    inner: RwLock<Records<E>>,
}

struct Records<E: Entity> {
    items: Vec<E>,
    positions: HashMap<E::Id, usize>,
}

pub type InMemoryMenuStore = InMemoryEntityStore<MenuNode>;
pub type InMemoryRoleStore = InMemoryEntityStore<RolePermission>;
pub type InMemoryUserStore = InMemoryEntityStore<User>;

impl<E: Entity> InMemoryEntityStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                items: Vec::new(),
                positions: HashMap::new(),
            }),
        }
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for InMemoryEntityStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.inner.read().map(|r| r.items.len()).ok();
        f.debug_struct("InMemoryEntityStore").field("len", &len).finish()
    }
}

impl<E> FromIterator<E> for InMemoryEntityStore<E>
where
    E: Entity + Clone,
    E::Id: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let store = Self::new();
        for record in iter {
            // A fresh lock cannot be poisoned.
            let _ = store.upsert(record);
        }
        store
    }
}

impl<E> InMemoryEntityStore<E>
where
    E: Entity + Clone,
    E::Id: Hash + Eq + Clone,
{
    pub fn upsert(&self, record: E) -> Result<(), StoreError> {
        let mut records = self.inner.write().map_err(|_| poisoned())?;
        let Records { items, positions } = &mut *records;
        match positions.get(record.id()) {
            Some(&pos) => items[pos] = record,
            None => {
                positions.insert(record.id().clone(), items.len());
                items.push(record);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn all(&self) -> Result<Vec<E>, StoreError> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.items.clone())
    }

    fn matching(&self, keep: impl Fn(&E) -> bool) -> Result<Vec<E>, StoreError> {
        let records = self.inner.read().map_err(|_| poisoned())?;
        Ok(records.items.iter().filter(|r| keep(r)).cloned().collect())
    }
}

fn poisoned() -> StoreError {
    warn!("in-memory store lock poisoned");
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl MenuStore for InMemoryEntityStore<MenuNode> {
    fn fetch_all(&self) -> Result<Vec<MenuNode>, StoreError> {
        self.all()
    }

    fn fetch_by_ids(&self, ids: &AllowedMenus) -> Result<Vec<MenuNode>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.matching(|menu| ids.contains(&menu.id))
    }
}

impl RoleStore for InMemoryEntityStore<RolePermission> {
    fn fetch_by_ids(&self, ids: &[RoleId]) -> Result<Vec<RolePermission>, StoreError> {
        let wanted: HashSet<&RoleId> = ids.iter().collect();
        self.matching(|role| wanted.contains(&role.role_id))
    }
}

impl UserStore for InMemoryEntityStore<User> {
    fn list_active(&self) -> Result<Vec<User>, StoreError> {
        self.matching(User::is_active)
    }

    fn list(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        self.matching(|user| filter.matches(user))
    }
}
