//! Shared test utilities for integration tests.

use roster_services::{
    config::Config,
    routes,
    users::{UserDirectory, UserDirectoryError},
};
use roster_model::User;
use std::future::Future;

/// Directory whose backing store is always down.
#[derive(Clone)]
pub struct UnavailableDirectory;

impl UserDirectory for UnavailableDirectory {
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, UserDirectoryError>> + Send {
        async { Err(UserDirectoryError::Unavailable("connection refused".to_string())) }
    }
}

/// Router over the built-in dataset with the local test config.
#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    routes(
        roster_services::users::StaticUserDirectory::default(),
        Config::new_for_test(),
    )
}
