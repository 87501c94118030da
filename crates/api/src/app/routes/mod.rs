use axum::Router;

pub mod system;
pub mod users;

/// Routes that sit behind the auth middleware.
pub fn router() -> Router {
    Router::new().nest("/users", users::router())
}
