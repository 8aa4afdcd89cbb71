//! Local gateway for the vendor RGB-lighting SDK pipe protocol.
//!
//! ledpipe accepts the vendor SDK's framed command stream over a local
//! socket, interprets it, and maintains the resulting per-LED color state
//! for downstream consumers.
//!
//! # Crate Structure
//!
//! - [`transport`] — Unix domain socket transport with stale-socket hygiene
//! - [`frame`] — Length-prefixed command framing over the transport
//! - [`proto`] — Protocol model: commands, key addressing, the interpreter
//! - [`server`] / [`state`] — The gateway itself: accept loop and LED store

/// Re-export transport types.
pub mod transport {
    pub use ledpipe_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use ledpipe_frame::*;
}

/// Re-export protocol types.
pub mod proto {
    pub use ledpipe_proto::*;
}

mod error;
pub mod server;
pub mod state;

pub use error::{GatewayError, Result};
pub use server::{LedServer, DEFAULT_SOCKET_PATH};
pub use state::{LedStore, Snapshot};
