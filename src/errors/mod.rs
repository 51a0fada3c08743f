use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read local address of listener")]
    LocalAddr(#[source] io::Error),
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
