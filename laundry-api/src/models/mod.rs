mod appliance;
mod board;
mod snapshot;
mod status;

pub use appliance::*;
pub use board::*;
pub use snapshot::*;
pub use status::*;
