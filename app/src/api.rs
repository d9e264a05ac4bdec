//! Server functions exposed to the hydrated client.
//!
//! The site configuration is loaded once by the server at startup and lives
//! in [`AppState`](crate::types::AppState). The client fetches it through
//! [`site_config`] so that server-rendered and hydrated headers agree.

use leptos::prelude::{ServerFnError, server};
use leptos::server_fn::codec::GetUrl;

/// Returns the site configuration the server was started with.
///
/// # Returns
///
/// A `Result` containing the [`SiteConfig`](crate::types::SiteConfig) on success, or a `ServerFnError`
/// when called outside of a request carrying the application state.
#[server(prefix = "/api", endpoint = "site_config", input = GetUrl)]
pub async fn site_config() -> Result<crate::types::SiteConfig, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::use_context;
    use leptos::server_fn::error::NoCustomError;

    let Some(AppState { site, .. }) = use_context::<AppState>() else {
        tracing::error!("site_config called without application state in context");
        return Err(ServerFnError::<NoCustomError>::ServerError(
            "Site configuration unavailable".to_owned(),
        ));
    };
    Ok(site.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_signature() {
        let _check: fn() -> _ = site_config;
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_site_config_without_context_errors() {
        let owner = leptos::prelude::Owner::new();
        owner.set();

        let result = site_config().await;
        assert!(result.is_err());
    }
}
