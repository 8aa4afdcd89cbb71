//! Length-prefixed command framing for the vendor LED SDK wire protocol.
//!
//! Every frame on the wire is:
//! - A 4-byte little-endian total length (command id + payload, not itself)
//! - A 4-byte little-endian command id
//! - The command payload
//!
//! No partial reads, no buffer management in user code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{
    decode_frame, encode_frame, Frame, COMMAND_ID_SIZE, DEFAULT_MAX_PAYLOAD, LENGTH_PREFIX_SIZE,
};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
