pub mod dispatcher;
pub mod handlers;
pub mod routes;

pub use dispatcher::dispatch;
pub use routes::create_http_routes;
