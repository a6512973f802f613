mod auth;
mod process_time;
mod request_id;

pub use auth::bearer_auth_middleware;
pub use process_time::process_time_middleware;
pub use request_id::request_id_middleware;
