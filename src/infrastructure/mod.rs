// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod drawing_store;
pub mod http_response;
pub mod mapbox_client;
pub mod traccar_client;
