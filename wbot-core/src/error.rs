use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Reply could not be delivered back to the platform. Logged by the
    /// dispatch loop; never aborts it.
    #[error("Send error: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
