//! User directory endpoint.
//!
//! - `routes`: `GET /api/users` handler and its page arithmetic
//! - `storage`: the directory the handler reads from

pub mod routes;
pub mod storage;

pub use routes::{AppState, ErrorResponse, ListUsersQuery, list_users_page};
pub use storage::{StaticUserDirectory, UserDirectory, UserDirectoryError};
