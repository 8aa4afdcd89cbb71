//! Local stream transport for the ledpipe gateway.
//!
//! The gateway listens on a single well-known Unix domain socket; every
//! connected game gets its own [`IpcStream`]. This is the lowest layer —
//! framing and protocol decoding build on top of the stream type here.

pub mod error;
pub mod stream;

#[cfg(unix)]
pub mod uds;

pub use error::{Result, TransportError};
pub use stream::IpcStream;

#[cfg(unix)]
pub use uds::UnixDomainSocket;
