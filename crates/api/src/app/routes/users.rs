use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use menugate_auth::{UserFilter, UserSummary};

use crate::app::AppServices;
use crate::app::errors::{domain_error_to_response, resolve_error_to_response, store_error_to_response};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/getPermission", get(get_permission))
        .route("/list", get(list_users))
        .route("/all/list", get(list_active_users))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListUsersQuery {
    user_id: Option<String>,
    user_name: Option<String>,
    state: Option<String>,
}

/// Menu tree and action codes visible to the caller.
async fn get_permission(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Response {
    match services
        .resolver
        .resolve_permissions(principal.role(), principal.role_ids())
    {
        Ok(resolved) => Json(resolved).into_response(),
        Err(e) => resolve_error_to_response(e),
    }
}

/// Directory of active users.
async fn list_active_users(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.users.list_active() {
        Ok(users) => {
            let list: Vec<UserSummary> = users.iter().map(UserSummary::from).collect();
            Json(list).into_response()
        }
        Err(e) => store_error_to_response(e),
    }
}

/// Full user records matching the query (`userId`, `userName`, `state`).
async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListUsersQuery>,
) -> Response {
    let filter = match UserFilter::from_query(
        query.user_id.as_deref(),
        query.user_name.as_deref(),
        query.state.as_deref(),
    ) {
        Ok(filter) => filter,
        Err(e) => return domain_error_to_response(e),
    };

    match services.users.list(&filter) {
        Ok(users) => Json(users).into_response(),
        Err(e) => store_error_to_response(e),
    }
}
