//! Client for the paginated users list service.
//!
//! Performs network IO, so it is only called from commands.

use roster_model::{ListUsersResponse, User, page_count};

#[derive(Debug, thiserror::Error)]
pub enum LoadUsersError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to parse users page from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type ApiResult<T> = Result<T, LoadUsersError>;

/// GET `{api_base_url}/api/users?page={page}`
pub async fn fetch_page(
    client: &reqwest::Client,
    api_base_url: &str,
    page: usize,
) -> ApiResult<ListUsersResponse> {
    let url = format!("{}/api/users?page={page}", api_base_url.trim_end_matches('/'));

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| LoadUsersError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadUsersError::Status {
            url,
            status: status.as_u16(),
        });
    }

    response
        .json::<ListUsersResponse>()
        .await
        .map_err(|source| LoadUsersError::Decode { url, source })
}

/// Every page of the list service, concatenated in page order.
pub async fn fetch_all_users(api_base_url: &str) -> ApiResult<Vec<User>> {
    let client = reqwest::Client::new();

    let first = fetch_page(&client, api_base_url, 1).await?;
    let pages = page_count(first.total_users);
    let mut users = first.users;
    users.reserve(first.total_users.saturating_sub(users.len()));

    for page in 2..=pages {
        let next = fetch_page(&client, api_base_url, page).await?;
        if next.users.is_empty() {
            break;
        }
        users.extend(next.users);
    }

    log::info!("Fetched {} users over {pages} page(s)", users.len());
    Ok(users)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use roster_model::{PAGE_SIZE, mock_users};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn mount_pages(server: &MockServer, users: &[User]) {
        for (index, chunk) in users.chunks(PAGE_SIZE).enumerate() {
            Mock::given(method("GET"))
                .and(path("/api/users"))
                .and(query_param("page", (index + 1).to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(ListUsersResponse {
                    users: chunk.to_vec(),
                    total_users: users.len(),
                }))
                .mount(server)
                .await;
        }
    }

    #[tokio::test]
    async fn fetches_every_page() {
        let server = MockServer::start().await;
        let users = mock_users();
        mount_pages(&server, &users).await;

        let fetched = fetch_all_users(&server.uri()).await.unwrap();

        assert_eq!(fetched, users);
    }

    #[tokio::test]
    async fn empty_directory_needs_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ListUsersResponse {
                users: vec![],
                total_users: 0,
            }))
            .expect(1)
            .mount(&server)
            .await;

        let fetched = fetch_all_users(&server.uri()).await.unwrap();

        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = fetch_all_users(&server.uri()).await.unwrap_err();

        assert!(matches!(err, LoadUsersError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = fetch_all_users(&server.uri()).await.unwrap_err();

        assert!(matches!(err, LoadUsersError::Decode { .. }));
    }
}
