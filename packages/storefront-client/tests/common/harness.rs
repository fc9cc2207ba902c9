//! Wiremock-backed harness for client integration tests.

use storefront_client::StorefrontClient;
use test_context::AsyncTestContext;
use wiremock::MockServer;

/// A fresh mock backend per test.
///
/// ```ignore
/// #[test_context(ApiHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &ApiHarness) {
///     let client = ctx.client();
/// }
/// ```
pub struct ApiHarness {
    pub server: MockServer,
}

impl AsyncTestContext for ApiHarness {
    async fn setup() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            server: MockServer::start().await,
        }
    }
}

impl ApiHarness {
    /// Client pointed at the mock server, authenticated with `test-token`.
    pub fn client(&self) -> StorefrontClient {
        StorefrontClient::new(self.server.uri()).with_token("test-token")
    }
}
