use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CloudError>;

/// Failures of the I/O collaborators around the pipeline.
///
/// The pipeline itself has no recoverable error channel: bad arguments are
/// programmer errors and panic. Everything here terminates the invocation.
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_the_path() {
        let err = CloudError::Read {
            path: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_console_error_converts_from_io() {
        let err: CloudError = io::Error::new(io::ErrorKind::UnexpectedEof, "closed").into();
        assert!(matches!(err, CloudError::Console(_)));
    }
}
