use std::io::{ErrorKind, Read};

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::codec::{decode_frame, Frame, DEFAULT_MAX_PAYLOAD};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;
const READ_CHUNK_SIZE: usize = 4 * 1024;

/// Reads complete frames from any `Read` stream.
///
/// Handles partial reads internally — callers always get complete frames.
/// One reader serves exactly one connection for its whole lifetime; the
/// frame sequence ends with [`FrameError::ConnectionClosed`] when the
/// stream closes, whether between frames or mid-frame.
pub struct FrameReader<T> {
    inner: T,
    buf: BytesMut,
    max_payload: usize,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader with the default payload limit.
    pub fn new(inner: T) -> Self {
        Self::with_max_payload(inner, DEFAULT_MAX_PAYLOAD)
    }

    /// Create a new frame reader with an explicit payload limit.
    pub fn with_max_payload(inner: T, max_payload: usize) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            max_payload,
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached.
    pub fn read_frame(&mut self) -> Result<Frame> {
        loop {
            if let Some(frame) = decode_frame(&mut self.buf, self.max_payload)? {
                trace!(
                    command = frame.command,
                    payload_len = frame.payload.len(),
                    "frame decoded"
                );
                return Ok(frame);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                debug!(buffered = self.buf.len(), "stream closed");
                return Err(FrameError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::{BufMut, BytesMut};

    use super::*;
    use crate::codec::encode_frame;

    #[test]
    fn read_single_frame() {
        let mut wire = BytesMut::new();
        encode_frame(15, &[10, 20, 30], &mut wire).unwrap();

        let mut reader = FrameReader::new(Cursor::new(wire.to_vec()));
        let frame = reader.read_frame().unwrap();

        assert_eq!(frame.command, 15);
        assert_eq!(frame.payload.as_ref(), &[10, 20, 30]);
    }

    #[test]
    fn read_multiple_frames() {
        let mut wire = BytesMut::new();
        encode_frame(1, b"game.exe", &mut wire).unwrap();
        encode_frame(13, &7u32.to_le_bytes(), &mut wire).unwrap();
        encode_frame(32, b"", &mut wire).unwrap();

        let mut reader = FrameReader::new(Cursor::new(wire.to_vec()));

        let f1 = reader.read_frame().unwrap();
        let f2 = reader.read_frame().unwrap();
        let f3 = reader.read_frame().unwrap();

        assert_eq!((f1.command, f1.payload.as_ref()), (1, b"game.exe".as_ref()));
        assert_eq!(f2.command, 13);
        assert_eq!(f3.command, 32);
    }

    #[test]
    fn partial_read_handling() {
        let mut wire = BytesMut::new();
        encode_frame(20, &[0xAB; 504], &mut wire).unwrap();

        let byte_reader = ByteByByteReader {
            bytes: wire.to_vec(),
            pos: 0,
        };
        let mut reader = FrameReader::new(byte_reader);

        let frame = reader.read_frame().unwrap();
        assert_eq!(frame.command, 20);
        assert_eq!(frame.payload.len(), 504);
    }

    #[test]
    fn connection_closed_cleanly() {
        let mut reader = FrameReader::new(Cursor::new(Vec::<u8>::new()));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn connection_closed_mid_frame() {
        let mut partial = BytesMut::new();
        partial.put_u32_le(16);
        partial.put_u32_le(15);
        partial.put_slice(b"short");

        let mut reader = FrameReader::new(Cursor::new(partial.to_vec()));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn invalid_length_in_stream() {
        let mut wire = BytesMut::new();
        wire.put_u32_le(1);

        let mut reader = FrameReader::new(Cursor::new(wire.to_vec()));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::InvalidLength { len: 1 }));
    }

    #[test]
    fn oversized_frame_in_stream() {
        let mut wire = BytesMut::new();
        wire.put_u32_le(1024);

        let mut reader = FrameReader::with_max_payload(Cursor::new(wire.to_vec()), 16);
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::PayloadTooLarge { .. }));
    }

    #[test]
    fn interrupted_read_retries() {
        let mut wire = BytesMut::new();
        encode_frame(0, b"log line", &mut wire).unwrap();

        let reader = InterruptedThenData {
            state: 0,
            bytes: wire.to_vec(),
            pos: 0,
        };
        let mut framed = FrameReader::new(reader);
        let frame = framed.read_frame().unwrap();

        assert_eq!(frame.command, 0);
        assert_eq!(frame.payload.as_ref(), b"log line");
    }

    #[test]
    fn roundtrip_over_stream_pair() {
        let (left, right) = std::os::unix::net::UnixStream::pair().unwrap();
        let mut writer = crate::writer::FrameWriter::new(left);
        let mut reader = FrameReader::new(right);

        writer.send(15, &[1, 2, 3]).unwrap();
        let frame = reader.read_frame().unwrap();

        assert_eq!(frame.command, 15);
        assert_eq!(frame.payload.as_ref(), &[1, 2, 3]);
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }

            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        state: u8,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.state == 0 {
                self.state = 1;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            let remaining = self.bytes.len() - self.pos;
            let n = remaining.min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }
}
