use menugate_auth::{Principal, RoleClass};
use menugate_core::{RoleId, UserId};

/// Principal context for a request (authenticated identity + role grants).
///
/// Inserted by the auth middleware; handlers read it from extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn user_id(&self) -> UserId {
        self.principal.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.principal.user_name
    }

    pub fn role(&self) -> RoleClass {
        self.principal.role
    }

    pub fn role_ids(&self) -> &[RoleId] {
        &self.principal.role_ids
    }
}
