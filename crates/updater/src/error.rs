use thiserror::Error;
use topograph::{source, topology};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0} from {1}")]
    Status(u16, String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Source error: {0}")]
    Source(#[from] source::Error),
    #[error("Topology error: {0}")]
    Topology(#[from] topology::Error),
    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
