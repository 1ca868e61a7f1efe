use thiserror::Error;

/// Fatal conditions that stop the process before or while serving.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),

    #[error("invalid bind address `{host}`: {source}")]
    BindAddress {
        host: String,
        source: std::net::AddrParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
