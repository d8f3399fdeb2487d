use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    /// Operand shapes are incompatible for the requested matrix operation.
    #[error("dimension mismatch in {op}: left is {lhs_rows}x{lhs_cols}, right is {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        op: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Non-positive layer size or learning rate at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// IO error while reading or writing a weight or dataset file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Weight file exists but its contents cannot be decoded.
    #[error("weight file error: {0}")]
    Persist(String),

    /// Malformed dataset row or field.
    #[error("dataset error: {0}")]
    Dataset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_op_and_shapes() {
        let err = Error::DimensionMismatch {
            op: "dot",
            lhs_rows: 2,
            lhs_cols: 3,
            rhs_rows: 4,
            rhs_cols: 5,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch in dot: left is 2x3, right is 4x5"
        );
    }

    #[test]
    fn io_errors_convert_into_crate_errors() {
        fn open_missing() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/nonexistent/ember-nn-io-check")?)
        }
        assert!(matches!(open_missing(), Err(Error::Io(_))));
    }
}
