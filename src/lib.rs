pub mod config;
pub mod error;
pub mod handler;
pub mod listener;
pub mod logging;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::{run, Server};
