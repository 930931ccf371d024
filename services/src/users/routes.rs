//! `GET /api/users?page=n`: one page of the directory, sorted by name.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_model::{ListUsersResponse, User, collate_names, page_range, parse_page};
use serde::{Deserialize, Serialize};

use super::storage::{UserDirectory, UserDirectoryError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<UserDirectoryError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: UserDirectoryError) -> Self {
        let (status, error_type) = match &err {
            UserDirectoryError::Unavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "directory_unavailable")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error_type.to_string(),
                message: err.to_string(),
            }),
        )
    }
}

#[derive(Clone)]
pub struct AppState<D> {
    pub directory: D,
}

impl<D> AppState<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }
}

/// Raw query; `page` is kept as text so bad values fall back to page 1
/// instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
}

/// Slice `users` to `page` in directory order, then sort that slice by name.
///
/// The sort applies within the page only, so page boundaries follow
/// directory order.
pub fn list_users_page(users: &[User], page: usize) -> ListUsersResponse {
    let mut slice = users[page_range(page, users.len())].to_vec();
    slice.sort_by(|a, b| collate_names(&a.name, &b.name));

    ListUsersResponse {
        users: slice,
        total_users: users.len(),
    }
}

#[tracing::instrument(skip_all, fields(page))]
pub async fn list_users<D>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListUsersQuery>,
) -> Response
where
    D: UserDirectory,
{
    let page = parse_page(query.page.as_deref());
    tracing::Span::current().record("page", page);

    match state.directory.list_users().await {
        Ok(users) => {
            let body = list_users_page(&users, page);
            tracing::debug!(returned = body.users.len(), total = body.total_users, "Listed users");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!("Failed to list users: {}", err);
            let (status, json): (StatusCode, Json<ErrorResponse>) = err.into();
            (status, json).into_response()
        }
    }
}

/// Any method other than GET on `/api/users`, HEAD included.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
