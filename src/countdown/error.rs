use thiserror::Error;

/// Contract violations when driving a [`CountdownEngine`](super::CountdownEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountdownError {
    #[error("countdown already started")]
    AlreadyStarted,

    #[error("countdown start value must be greater than zero")]
    InvalidStartValue,

    #[error("countdown engine has been torn down")]
    TornDown,

    #[error("countdown must be started from within a tokio runtime")]
    NoRuntime,
}
