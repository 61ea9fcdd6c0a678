pub mod content_api_client;
pub mod request;
pub mod token_client;

pub use content_api_client::ContentApiClient;
pub use token_client::OAuth2TokenClient;
