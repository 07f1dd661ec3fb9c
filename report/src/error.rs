use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The binary document could not be produced. The markup source is still on disk.
    #[error("document compiler unavailable: {reason}")]
    CompileUnavailable { reason: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
