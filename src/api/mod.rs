pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use server::{start_server, ServerHandle};
