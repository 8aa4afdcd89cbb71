use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Size of the total-length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Size of the command id inside the frame body.
pub const COMMAND_ID_SIZE: usize = 4;

/// Default maximum payload size: 64 KiB.
///
/// The largest well-formed vendor command is a bitmap frame (508 bytes);
/// anything approaching this limit is stream garbage, not a command.
pub const DEFAULT_MAX_PAYLOAD: usize = 64 * 1024;

/// One decoded unit of the wire protocol.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The vendor SDK command id.
    pub command: u32,
    /// The command payload.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(command: u32, payload: impl Into<Bytes>) -> Self {
        Self {
            command,
            payload: payload.into(),
        }
    }

    /// The total wire size of this frame (length prefix + command id + payload).
    pub fn wire_size(&self) -> usize {
        LENGTH_PREFIX_SIZE + COMMAND_ID_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌────────────────┬──────────────┬───────────────────┐
/// │ TotalLength    │ CommandId    │ Payload            │
/// │ (4B LE)        │ (4B LE)      │ (TotalLength - 4)  │
/// └────────────────┴──────────────┴───────────────────┘
/// ```
/// TotalLength counts CommandId + Payload but not itself.
pub fn encode_frame(command: u32, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize - COMMAND_ID_SIZE {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: u32::MAX as usize - COMMAND_ID_SIZE,
        });
    }
    dst.reserve(LENGTH_PREFIX_SIZE + COMMAND_ID_SIZE + payload.len());
    dst.put_u32_le((COMMAND_ID_SIZE + payload.len()) as u32);
    dst.put_u32_le(command);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer.
pub fn decode_frame(src: &mut BytesMut, max_payload: usize) -> Result<Option<Frame>> {
    if src.len() < LENGTH_PREFIX_SIZE {
        return Ok(None); // Need more data
    }

    let total_len = u32::from_le_bytes(src[0..4].try_into().expect("4-byte slice"));
    if (total_len as usize) < COMMAND_ID_SIZE {
        return Err(FrameError::InvalidLength { len: total_len });
    }

    let payload_len = total_len as usize - COMMAND_ID_SIZE;
    if payload_len > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: max_payload,
        });
    }

    let total = LENGTH_PREFIX_SIZE + total_len as usize;
    if src.len() < total {
        return Ok(None); // Need more data
    }

    src.advance(LENGTH_PREFIX_SIZE);
    let command = src.get_u32_le();
    let payload = src.split_to(payload_len).freeze();

    Ok(Some(Frame { command, payload }))
}
