use std::os::unix::fs::{FileTypeExt, MetadataExt, PermissionsExt};
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::stream::IpcStream;

/// Unix domain socket listener for the gateway endpoint.
///
/// The endpoint name is well known to clients, so the socket file is created
/// world-accessible by default — any local game must be able to connect,
/// matching the original vendor pipe's open ACL. The file is removed again
/// on drop if it still refers to the socket we created.
pub struct UnixDomainSocket {
    listener: UnixListener,
    path: PathBuf,
    created_inode: Option<(u64, u64)>,
    cleanup_on_drop: bool,
}

impl UnixDomainSocket {
    /// Default permission mode for the gateway socket path.
    pub const DEFAULT_SOCKET_MODE: u32 = 0o666;
    /// Maximum socket path length.
    /// Unix `sockaddr_un.sun_path` is typically 108 bytes on Linux, 104 on macOS.
    #[cfg(target_os = "linux")]
    const MAX_PATH_LEN: usize = 108;
    #[cfg(not(target_os = "linux"))]
    const MAX_PATH_LEN: usize = 104;

    /// Bind and listen on a filesystem-path Unix domain socket.
    ///
    /// If the path already exists and is a socket, it is removed first
    /// (stale socket left by a crashed gateway). Existing non-socket files
    /// are never removed.
    pub fn bind(path: impl AsRef<Path>) -> Result<Self> {
        Self::bind_with_mode(path, Self::DEFAULT_SOCKET_MODE)
    }

    /// Bind and listen with an explicit permission mode on the socket file.
    pub fn bind_with_mode(path: impl AsRef<Path>, mode: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let path_bytes = path.as_os_str().len();
        if path_bytes >= Self::MAX_PATH_LEN {
            return Err(TransportError::PathTooLong {
                path,
                len: path_bytes,
                max: Self::MAX_PATH_LEN,
            });
        }

        if path.exists() {
            let metadata = std::fs::symlink_metadata(&path).map_err(|e| TransportError::Bind {
                path: path.clone(),
                source: e,
            })?;
            if metadata.file_type().is_socket() {
                debug!(?path, "removing stale socket");
                std::fs::remove_file(&path).map_err(|e| TransportError::Bind {
                    path: path.clone(),
                    source: e,
                })?;
            } else {
                return Err(TransportError::Bind {
                    path: path.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        "existing path is not a unix socket",
                    ),
                });
            }
        }

        let listener = UnixListener::bind(&path).map_err(|e| TransportError::Bind {
            path: path.clone(),
            source: e,
        })?;

        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).map_err(|e| {
            TransportError::Bind {
                path: path.clone(),
                source: e,
            }
        })?;
        let created_metadata =
            std::fs::symlink_metadata(&path).map_err(|e| TransportError::Bind {
                path: path.clone(),
                source: e,
            })?;
        let created_inode = Some((created_metadata.dev(), created_metadata.ino()));

        info!(?path, "gateway listening on unix domain socket");

        Ok(Self {
            listener,
            path,
            created_inode,
            cleanup_on_drop: true,
        })
    }

    /// Accept an incoming connection (blocking).
    pub fn accept(&self) -> Result<IpcStream> {
        let (stream, _addr) = self.listener.accept().map_err(TransportError::Accept)?;
        debug!("accepted connection");
        Ok(IpcStream::from_unix(stream))
    }

    /// Connect to a listening gateway socket (blocking).
    ///
    /// This is the client half — what a wrapper DLL loaded into a game would
    /// do. The gateway itself only uses it to wake its own accept loop.
    pub fn connect(path: impl AsRef<Path>) -> Result<IpcStream> {
        let path = path.as_ref();
        let stream =
            std::os::unix::net::UnixStream::connect(path).map_err(|e| TransportError::Connect {
                path: path.to_path_buf(),
                source: e,
            })?;
        debug!(?path, "connected to gateway socket");
        Ok(IpcStream::from_unix(stream))
    }

    /// The path this socket is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for UnixDomainSocket {
    fn drop(&mut self) {
        if self.cleanup_on_drop {
            if let Some((expected_dev, expected_ino)) = self.created_inode {
                if let Ok(metadata) = std::fs::symlink_metadata(&self.path) {
                    if metadata.file_type().is_socket()
                        && metadata.dev() == expected_dev
                        && metadata.ino() == expected_ino
                    {
                        debug!(path = ?self.path, "cleaning up socket file");
                        let _ = std::fs::remove_file(&self.path);
                    } else {
                        debug!(
                            path = ?self.path,
                            "socket path identity changed; skipping cleanup"
                        );
                    }
                }
            }
        }
    }
}
