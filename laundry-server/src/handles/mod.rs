mod board_handle;
mod dashboard_handle;
mod docs_handle;
mod sse_handle;

pub use board_handle::*;
pub use dashboard_handle::*;
pub use docs_handle::*;
pub use sse_handle::*;
