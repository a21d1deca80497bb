use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("invalid resolution: {0}")]
    InvalidResolution(String),

    #[error("invalid worker count: {0}")]
    InvalidWorkers(usize),

    #[error("failed to build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn viewport(msg: impl Into<String>) -> Self {
        Self::InvalidViewport(msg.into())
    }

    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::InvalidResolution(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
