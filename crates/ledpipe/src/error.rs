use ledpipe_transport::TransportError;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
