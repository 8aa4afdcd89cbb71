//! The gateway server: accept loop, per-connection workers, shutdown.
//!
//! Connections are handled one thread each, and frames on a connection are
//! applied strictly in arrival order. Shutdown is cooperative: the accept
//! loop is woken by a throwaway self-connection, workers are unblocked by
//! shutting down their streams, and `stop` joins everything before
//! returning.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ledpipe_frame::{FrameError, FrameReader};
use ledpipe_proto::decode;
use ledpipe_transport::{IpcStream, UnixDomainSocket};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::state::LedStore;

/// Default rendezvous path, mirroring the vendor SDK's well-known pipe name.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/ledpipe/logitech.sock";

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct LedServer {
    store: Arc<LedStore>,
    path: PathBuf,
    shared: Arc<Shared>,
    accept_handle: Mutex<Option<JoinHandle<()>>>,
}

struct Shared {
    running: AtomicBool,
    // Live connections. Finished sessions are reaped on each accept so a
    // long-running gateway does not accumulate handles from past games.
    sessions: Mutex<Vec<Session>>,
}

struct Session {
    // Clone of the worker's stream, kept so stop() can unblock its read.
    stream: IpcStream,
    worker: JoinHandle<()>,
}

impl LedServer {
    pub fn new(store: Arc<LedStore>, path: impl AsRef<Path>) -> Self {
        Self {
            store,
            path: path.as_ref().to_path_buf(),
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                sessions: Mutex::new(Vec::new()),
            }),
            accept_handle: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Arc<LedStore> {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bind the socket and start accepting clients.
    ///
    /// Idempotent: calling while already running is a no-op.
    pub fn start(&self) -> Result<()> {
        let mut handle = self
            .accept_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if handle.is_some() {
            debug!("start called while already running");
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let socket = UnixDomainSocket::bind(&self.path)?;
        info!(path = %self.path.display(), "gateway listening");

        self.shared.running.store(true, Ordering::SeqCst);
        let shared = Arc::clone(&self.shared);
        let store = Arc::clone(&self.store);
        *handle = Some(thread::spawn(move || accept_loop(socket, shared, store)));
        Ok(())
    }

    /// Stop accepting, unblock every worker, and join them all.
    ///
    /// Idempotent. The socket file is removed when the accept thread drops
    /// the bound socket.
    pub fn stop(&self) {
        if !self.shared.running.swap(false, Ordering::SeqCst) {
            return;
        }

        // The accept loop is blocked in accept(); a throwaway connection
        // gets it back to the running check.
        if let Err(err) = UnixDomainSocket::connect(&self.path) {
            debug!(%err, "accept-loop wake connection failed");
        }

        let sessions: Vec<_> = self
            .shared
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        // Shut every stream down before joining anything, so no worker is
        // left blocked while another is being joined.
        for session in &sessions {
            if let Err(err) = session.stream.shutdown() {
                debug!(%err, "connection shutdown failed");
            }
        }
        for session in sessions {
            let _ = session.worker.join();
        }

        if let Some(handle) = self
            .accept_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            let _ = handle.join();
        }
        info!(path = %self.path.display(), "gateway stopped");
    }
}

impl Drop for LedServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn accept_loop(socket: UnixDomainSocket, shared: Arc<Shared>, store: Arc<LedStore>) {
    while shared.running.load(Ordering::SeqCst) {
        let stream = match socket.accept() {
            Ok(stream) => stream,
            Err(err) => {
                if shared.running.load(Ordering::SeqCst) {
                    warn!(%err, "accept failed, retrying");
                    thread::sleep(ACCEPT_RETRY_DELAY);
                }
                continue;
            }
        };
        if !shared.running.load(Ordering::SeqCst) {
            // The wake connection from stop().
            break;
        }

        match stream.peer_credentials() {
            Some((uid, gid, pid)) => info!(uid, gid, pid, "client connected"),
            None => info!("client connected"),
        }

        let clone = match stream.try_clone() {
            Ok(clone) => clone,
            Err(err) => {
                warn!(%err, "connection clone failed, dropping client");
                continue;
            }
        };

        let store = Arc::clone(&store);
        let worker = thread::spawn(move || serve_connection(stream, &store));

        let mut sessions = shared
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|session| !session.worker.is_finished());
        sessions.push(Session {
            stream: clone,
            worker,
        });
    }
}

fn serve_connection(stream: IpcStream, store: &LedStore) {
    let mut reader = FrameReader::new(stream);
    loop {
        match reader.read_frame() {
            Ok(frame) => store.apply(decode(frame.command, &frame.payload)),
            Err(FrameError::ConnectionClosed) => {
                debug!("client disconnected");
                break;
            }
            Err(err) => {
                // A framing error desyncs the byte stream; drop the client.
                warn!(%err, "closing connection");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use ledpipe_frame::FrameWriter;
    use ledpipe_proto::{Color, LedId};

    use super::*;

    fn make_sock_path(tag: &str) -> PathBuf {
        let dir = PathBuf::from(format!(
            "/tmp/ledpipe-{}-{}-{}",
            tag,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir.join("gateway.sock")
    }

    fn set_key_payload(code: u32, color: Color) -> Vec<u8> {
        let mut payload = code.to_le_bytes().to_vec();
        payload.extend_from_slice(&[color.r, color.g, color.b]);
        payload
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let path = make_sock_path("twice");
        let server = LedServer::new(Arc::new(LedStore::new()), &path);
        server.start().expect("first start should succeed");
        server.start().expect("second start should be a no-op");
        server.stop();
    }

    #[test]
    fn frames_reach_the_store() {
        let path = make_sock_path("frames");
        let store = Arc::new(LedStore::new());
        let changes = store.subscribe();
        let server = LedServer::new(Arc::clone(&store), &path);
        server.start().expect("server should start");

        let mut writer = FrameWriter::connect(&path).expect("client should connect");
        let red = Color::rgb(255, 0, 0);
        writer
            .send(24, &set_key_payload(0x01E, red))
            .expect("send should succeed");

        changes
            .recv_timeout(Duration::from_secs(2))
            .expect("change should be applied");
        assert_eq!(store.snapshot().color(LedId::A), red);

        server.stop();
    }

    #[test]
    fn finished_sessions_are_reaped_on_accept() {
        let path = make_sock_path("reap");
        let store = Arc::new(LedStore::new());
        let changes = store.subscribe();
        let server = LedServer::new(Arc::clone(&store), &path);
        server.start().expect("server should start");

        // Two short-lived clients come and go.
        drop(FrameWriter::connect(&path).expect("first client should connect"));
        drop(FrameWriter::connect(&path).expect("second client should connect"));
        std::thread::sleep(Duration::from_millis(100));

        // A frame from the third client proves its accept has been
        // processed, which is when the finished sessions get pruned.
        let mut live = FrameWriter::connect(&path).expect("third client should connect");
        live.send(24, &set_key_payload(0x01E, Color::rgb(1, 2, 3)))
            .expect("send should succeed");
        changes
            .recv_timeout(Duration::from_secs(2))
            .expect("change should be applied");

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        loop {
            let count = server
                .shared
                .sessions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len();
            if count == 1 {
                break;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "expected one live session, found {count}"
            );
            std::thread::sleep(Duration::from_millis(10));
        }
        server.stop();
    }

    #[test]
    fn stop_removes_socket_and_returns_with_idle_client() {
        let path = make_sock_path("stop");
        let server = LedServer::new(Arc::new(LedStore::new()), &path);
        server.start().expect("server should start");

        // An idle client blocks its worker in read_frame until stop()
        // shuts the stream down.
        let _client = FrameWriter::connect(&path).expect("client should connect");
        std::thread::sleep(Duration::from_millis(50));

        server.stop();
        assert!(!path.exists(), "socket file should be cleaned up");
    }
}
