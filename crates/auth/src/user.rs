//! User records as held by the user store.

use serde::{Deserialize, Serialize};

use menugate_core::{DomainError, Entity, RoleId, UserId};

use crate::RoleClass;

/// Employment state of a user account.
///
/// Persisted as the numeric codes `1`, `2` and `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum UserState {
    #[default]
    Active,
    Departed,
    Probation,
}

impl TryFrom<u8> for UserState {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Active),
            2 => Ok(Self::Departed),
            3 => Ok(Self::Probation),
            other => Err(DomainError::validation(format!("unknown user state {other}"))),
        }
    }
}

impl From<UserState> for u8 {
    fn from(state: UserState) -> Self {
        match state {
            UserState::Active => 1,
            UserState::Departed => 2,
            UserState::Probation => 3,
        }
    }
}

impl core::fmt::Display for UserState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserState::Active => write!(f, "Active"),
            UserState::Departed => write!(f, "Departed"),
            UserState::Probation => write!(f, "Probation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub state: UserState,
    /// Numeric privilege level (`0` = unrestricted).
    pub role: i32,
    #[serde(default)]
    pub role_list: Vec<RoleId>,
    #[serde(default)]
    pub dept_id: Option<String>,
}

impl User {
    pub fn role_class(&self) -> RoleClass {
        RoleClass::from_level(self.role)
    }

    pub fn is_active(&self) -> bool {
        self.state == UserState::Active
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.user_id
    }
}

/// Exact-match criteria for the user listing. Unset fields match everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub user_id: Option<UserId>,
    pub user_name: Option<String>,
    pub state: Option<UserState>,
}

impl UserFilter {
    /// Parse listing query values.
    ///
    /// Blank values are ignored, and a `state` of `"0"` means any state.
    pub fn from_query(
        user_id: Option<&str>,
        user_name: Option<&str>,
        state: Option<&str>,
    ) -> Result<Self, DomainError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        let user_id = present(user_id).map(str::parse::<UserId>).transpose()?;
        let state = match present(state) {
            None | Some("0") => None,
            Some(code) => {
                let code = code
                    .parse::<u8>()
                    .map_err(|_| DomainError::validation(format!("unknown user state {code}")))?;
                Some(UserState::try_from(code)?)
            }
        };

        Ok(Self {
            user_id,
            user_name: present(user_name).map(str::to_string),
            state,
        })
    }

    pub fn matches(&self, user: &User) -> bool {
        self.user_id.is_none_or(|id| id == user.user_id)
            && self.user_name.as_deref().is_none_or(|name| name == user.user_name)
            && self.state.is_none_or(|state| state == user.state)
    }
}

/// Directory entry returned by the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: UserId,
    pub user_name: String,
    pub user_email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name.clone(),
            user_email: user.user_email.clone(),
        }
    }
}
