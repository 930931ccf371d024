//! Read access to the user directory behind the list endpoint.
//!
//! - `UserDirectory` trait: what the routes need from a backing store
//! - `StaticUserDirectory`: the built-in dataset, shared read-only
//!
//! Writes are out of scope; edits in the table never reach the service.

use std::future::Future;
use std::sync::Arc;

use roster_model::{User, mock_users};

/// Error type for directory reads.
#[derive(Debug, thiserror::Error)]
pub enum UserDirectoryError {
    /// The backing store could not be reached.
    #[error("User directory unavailable: {0}")]
    Unavailable(String),
}

pub trait UserDirectory: Clone + Send + Sync + 'static {
    /// Every user in directory order.
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, UserDirectoryError>> + Send;
}

/// The built-in dataset.
#[derive(Debug, Clone)]
pub struct StaticUserDirectory {
    users: Arc<[User]>,
}

impl StaticUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }
}

impl Default for StaticUserDirectory {
    fn default() -> Self {
        Self::new(mock_users())
    }
}

impl UserDirectory for StaticUserDirectory {
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, UserDirectoryError>> + Send {
        let users = self.users.to_vec();
        async move { Ok(users) }
    }
}
