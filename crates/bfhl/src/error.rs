#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Port {0} is already in use")]
    AddrInUse(u16),

    #[error("Failed to bind to {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server is not reachable at {0}")]
    ServerUnavailable(String),

    #[error("{failed} of {total} smoke scenarios failed")]
    SmokeFailed { failed: usize, total: usize },

    #[error("{error}: {message}")]
    ProcessingFailed { error: String, message: String },
}
