use serde::{Deserialize, Serialize};

/// Privilege class of a user, decided once at the request boundary.
///
/// Persisted user records and token claims carry a numeric privilege level;
/// level `0` is the super-admin that bypasses menu filtering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleClass {
    /// Sees the whole menu hierarchy; role grants are not consulted.
    Unrestricted,
    /// Sees only menus granted through assigned roles.
    Restricted,
}

impl RoleClass {
    /// Numeric privilege level of the super-admin.
    pub const UNRESTRICTED_LEVEL: i32 = 0;

    pub fn from_level(level: i32) -> Self {
        if level == Self::UNRESTRICTED_LEVEL {
            Self::Unrestricted
        } else {
            Self::Restricted
        }
    }

    pub fn is_unrestricted(self) -> bool {
        matches!(self, Self::Unrestricted)
    }
}

impl From<i32> for RoleClass {
    fn from(level: i32) -> Self {
        Self::from_level(level)
    }
}

impl core::fmt::Display for RoleClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RoleClass::Unrestricted => f.write_str("unrestricted"),
            RoleClass::Restricted => f.write_str("restricted"),
        }
    }
}
