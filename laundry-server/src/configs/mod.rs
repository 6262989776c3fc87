mod settings;

pub use settings::{Dashboard, Logger, Poll, Server, Settings, Upstream, UpstreamHeaders};
