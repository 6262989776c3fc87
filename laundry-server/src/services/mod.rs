mod fetch_service;
mod poll_service;
mod render_service;

pub use fetch_service::*;
pub use poll_service::*;
pub use render_service::*;
