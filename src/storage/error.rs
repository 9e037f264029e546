use thiserror::Error;

/// Failure taxonomy shared by every store operation. Each variant names the
/// operation that raised it so call paths survive into the message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{op}: cannot open database: {source}")]
    Connection {
        op: &'static str,
        source: rusqlite::Error,
    },
    #[error("{op}: user {username} already exists")]
    AlreadyExists {
        op: &'static str,
        username: String,
    },
    #[error("{op}: user {username} doesn't exist")]
    NotFound {
        op: &'static str,
        username: String,
    },
    #[error("{op}: {source}")]
    Query {
        op: &'static str,
        source: rusqlite::Error,
    },
}
