//! Client configuration and API handle, shared through context.

use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

/// Get the client configuration provided by [`ClientProvider`].
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Get the API client provided by [`ClientProvider`].
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provides [`ClientConfig`] and an [`ApiClient`] built from it.
/// Wrap the app with this before [`crate::AuthProvider`].
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let api_config = config.api.clone();
    use_context_provider(move || ApiClient::new(&api_config));
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
