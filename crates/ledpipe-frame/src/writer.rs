use std::io::{ErrorKind, Write};
use std::path::Path;

use bytes::BytesMut;
use ledpipe_transport::{IpcStream, UnixDomainSocket};

use crate::codec::{encode_frame, Frame, DEFAULT_MAX_PAYLOAD};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Writes complete frames to any `Write` stream.
///
/// This is the client half of the wire protocol — what the wrapper shim
/// loaded into a game does. The gateway itself never writes frames; the
/// writer exists for the CLI, tests, and downstream tooling.
pub struct FrameWriter<T> {
    inner: T,
    buf: BytesMut,
    max_payload: usize,
}

impl<T: Write> FrameWriter<T> {
    /// Create a new frame writer with the default payload limit.
    pub fn new(inner: T) -> Self {
        Self::with_max_payload(inner, DEFAULT_MAX_PAYLOAD)
    }

    /// Create a new frame writer with an explicit payload limit.
    pub fn with_max_payload(inner: T, max_payload: usize) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            max_payload,
        }
    }

    /// Write a complete frame (blocking).
    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.send(frame.command, frame.payload.as_ref())
    }

    /// Encode and send one command with its payload.
    pub fn send(&mut self, command: u32, payload: &[u8]) -> Result<()> {
        if payload.len() > self.max_payload {
            return Err(FrameError::PayloadTooLarge {
                size: payload.len(),
                max: self.max_payload,
            });
        }

        self.buf.clear();
        encode_frame(command, payload, &mut self.buf)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl FrameWriter<IpcStream> {
    /// Connect to a listening gateway and wrap the stream in a writer.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let stream = UnixDomainSocket::connect(path).map_err(transport_to_frame_error)?;
        Ok(Self::new(stream))
    }
}

fn transport_to_frame_error(err: ledpipe_transport::TransportError) -> FrameError {
    match err {
        ledpipe_transport::TransportError::Io(io)
        | ledpipe_transport::TransportError::Accept(io) => FrameError::Io(io),
        ledpipe_transport::TransportError::Bind { source, .. }
        | ledpipe_transport::TransportError::Connect { source, .. } => FrameError::Io(source),
        other => FrameError::Io(std::io::Error::other(other.to_string())),
    }
}
