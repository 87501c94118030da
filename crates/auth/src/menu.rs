//! Menu records as stored, and as assembled into a tree.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use menugate_core::{Entity, MenuId};

/// A fine-grained operation (typically a button) attached to a screen.
///
/// Only `code` takes part in permission resolution; every other field of the
/// record is carried in `attributes` and serialized back unchanged. Input may
/// name the code `menuCode`; output always names it `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    #[serde(alias = "menuCode")]
    pub code: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ActionEntry {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            attributes: Map::new(),
        }
    }
}

/// A node of the global menu hierarchy.
///
/// `parent_id == None` marks a top-level node. `children` is never persisted;
/// it is filled in by [`crate::tree::build_tree`]. Records read with `_id` and
/// `action` are written back as `id` and `actions`; a `null` list reads as
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    #[serde(alias = "_id")]
    pub id: MenuId,

    #[serde(default)]
    pub parent_id: Option<MenuId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<MenuNode>,

    #[serde(default, deserialize_with = "null_as_empty", alias = "action")]
    pub actions: Vec<ActionEntry>,

    /// Descriptive fields (`menuName`, `path`, `icon`, ...), passed through.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MenuNode {
    pub fn new(id: impl Into<MenuId>, parent_id: Option<MenuId>) -> Self {
        Self {
            id: id.into(),
            parent_id,
            children: Vec::new(),
            actions: Vec::new(),
            attributes: Map::new(),
        }
    }

    pub fn with_actions<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = codes.into_iter().map(ActionEntry::new).collect();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Copy of this record with the given assembled children.
    pub(crate) fn assembled(&self, children: Vec<MenuNode>) -> Self {
        Self {
            id: self.id.clone(),
            parent_id: self.parent_id.clone(),
            children,
            actions: self.actions.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

/// Reads `null` the same as a missing field.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Entity for MenuNode {
    type Id = MenuId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
