//! Test utilities for driving the business layer against a mock list service.
//!
//! ```ignore
//! let mut test_ctx = TestContext::remote().await;
//! test_ctx.mock_users_pages(&mock_users()).await;
//!
//! test_ctx.ctx.enqueue_command::<LoadUsersCommand>();
//! test_ctx.flush_and_wait().await;
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use roster_model::{ListUsersResponse, PAGE_SIZE, User};
use roster_states::StateCtx;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::{TableConfig, register_user_table};

/// A registered `StateCtx`, optionally backed by a mock server.
pub struct TestContext {
    pub mock_server: Option<MockServer>,
    pub ctx: StateCtx,
}

impl TestContext {
    pub fn with_config(config: TableConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_user_table(&mut ctx, config);
        Self {
            mock_server: None,
            ctx,
        }
    }

    /// Built-in dataset, no delay.
    pub fn immediate() -> Self {
        Self::with_config(TableConfig::immediate())
    }

    /// Loads from a fresh mock server.
    pub async fn remote() -> Self {
        let mock_server = MockServer::start().await;
        let mut test_ctx = Self::with_config(TableConfig::remote(mock_server.uri()));
        test_ctx.mock_server = Some(mock_server);
        test_ctx
    }

    /// Flush pending commands, then await every task, syncing after each.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            if start.elapsed() > timeout {
                panic!(
                    "Timed out waiting for pending tasks ({} still in JoinSet)",
                    self.ctx.task_count()
                );
            }

            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
    }

    fn server(&self) -> &MockServer {
        self.mock_server
            .as_ref()
            .expect("TestContext was not created with TestContext::remote")
    }

    // =========================================================================
    // Mock endpoint helpers
    // =========================================================================

    /// Serve `users` as `GET /api/users?page=n`, one mock per page.
    pub async fn mock_users_pages(&self, users: &[User]) {
        for (index, chunk) in users.chunks(PAGE_SIZE).enumerate() {
            Mock::given(method("GET"))
                .and(path("/api/users"))
                .and(query_param("page", (index + 1).to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(ListUsersResponse {
                    users: chunk.to_vec(),
                    total_users: users.len(),
                }))
                .mount(self.server())
                .await;
        }
    }

    pub async fn mock_users_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(status))
            .mount(self.server())
            .await;
    }
}
