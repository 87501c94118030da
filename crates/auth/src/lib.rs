//! `menugate-auth`: role-based menu permission resolution.
//!
//! Pure authorization boundary: menu trees, role grants, action codes and
//! token claims. Storage sits behind the traits in [`store`]; HTTP lives in
//! the API crate.

pub mod actions;
pub mod claims;
pub mod jwt;
pub mod menu;
pub mod permissions;
pub mod principal;
pub mod resolver;
pub mod roles;
pub mod store;
pub mod tree;
pub mod user;

pub use actions::extract_actions;
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use menu::{ActionEntry, MenuNode};
pub use permissions::{AllowedMenus, RolePermission, aggregate};
pub use principal::Principal;
pub use resolver::{MenuScope, PermissionResolver, ResolveError, ResolvedPermissions};
pub use roles::RoleClass;
pub use store::{MenuStore, RoleStore, StoreError, UserStore};
pub use tree::{MenuTreeBuilder, build_tree};
pub use user::{User, UserFilter, UserState, UserSummary};
