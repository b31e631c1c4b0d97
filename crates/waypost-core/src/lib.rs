pub mod api;
pub mod config;
pub mod constants;
pub mod events;
pub mod models;
pub mod rpc;
pub mod store;
pub mod tracing_setup;

// Re-export the types most callers need at crate root
pub use api::CoreApi;
pub use events::{CoreEvent, Notifier};
pub use rpc::{RpcError, Transport};
pub use store::MediaCache;
