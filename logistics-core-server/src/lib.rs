pub mod config;
pub mod credentials;
pub mod http;

pub use config::ServiceConfig;
pub use credentials::{CredentialLookup, StaticCredentials};
pub use http::{HttpServer, Router};
