use serde::{Deserialize, Serialize};

use menugate_core::{RoleId, UserId};

use crate::{JwtClaims, RoleClass};

/// An authenticated user as seen by permission resolution.
///
/// Built once from verified claims; the numeric privilege level is turned
/// into a [`RoleClass`] here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub user_name: String,
    pub role: RoleClass,
    pub role_ids: Vec<RoleId>,
}

impl From<JwtClaims> for Principal {
    fn from(claims: JwtClaims) -> Self {
        Self {
            user_id: claims.sub,
            user_name: claims.user_name,
            role: RoleClass::from_level(claims.role),
            role_ids: claims.role_list,
        }
    }
}
