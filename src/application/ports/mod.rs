pub mod content_gateway;
pub mod key_value_store;
pub mod token_provider;

pub use content_gateway::ContentGateway;
pub use key_value_store::KeyValueStore;
pub use token_provider::TokenProvider;
