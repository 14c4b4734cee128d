use thiserror::Error;

/// Everything that can go wrong before a cross is computed.
///
/// Same-sex pairs are not an error; see `PairResult`.
#[derive(Debug, Error)]
pub enum CrossError {
    #[error("At least two parents' genes must be provided")]
    InsufficientParents(usize),

    #[error("Malformed genotype field `{field}`: {reason}")]
    MalformedGenotype { field: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CrossError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CrossError::MalformedGenotype {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
