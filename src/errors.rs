use thiserror::Error;

/// Error type that captures the ledger's domain failures.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("insufficient balance: expense of {requested:.2} exceeds available {available:.2}")]
    InsufficientBalance { requested: f64, available: f64 },
    #[error("invalid transaction index {index} (ledger holds {count})")]
    InvalidIndex { index: usize, count: usize },
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Input error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}
