pub mod auth_server;
pub mod handlers;

pub use auth_server::AuthGrpcService;
