use thiserror::Error;

/// Fatal batch errors. These abort before any querying begins (bad roster)
/// or after all querying ends (export I/O). Per-identifier lookup failures
/// never surface here; the runner folds them into the outcome.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "roster must contain 'Nome' and 'CPF' columns (or 'nome' and 'cpf'); found: [{}]",
        found.join(", ")
    )]
    MissingColumns { found: Vec<String> },
}
