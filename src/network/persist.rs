//! Binary weight persistence.
//!
//! Each weight matrix is written to its own file as a bincode blob:
//! shape first, then the row-major elements. Loading validates both shapes
//! against the network's configured sizes before either field is replaced,
//! so a bad pair of files never leaves the network half-updated.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;

impl Network {
    /// Writes `hidden_weights` and `output_weights` to two named files.
    pub fn save_weights<P: AsRef<Path>>(&self, hidden_path: P, output_path: P) -> Result<()> {
        write_matrix(self.hidden_weights(), hidden_path.as_ref())?;
        write_matrix(self.output_weights(), output_path.as_ref())
    }

    /// Reads both weight matrices back, replacing the network's weights.
    ///
    /// Fails with `DimensionMismatch` if either stored shape differs from
    /// the network's configured sizes; the weights are untouched on any
    /// failure.
    pub fn load_weights<P: AsRef<Path>>(&mut self, hidden_path: P, output_path: P) -> Result<()> {
        let hidden = read_matrix(hidden_path.as_ref())?;
        let output = read_matrix(output_path.as_ref())?;

        if hidden.rows() != self.hidden_size() || hidden.cols() != self.input_size() {
            return Err(Error::DimensionMismatch {
                op: "load_weights",
                lhs_rows: self.hidden_size(),
                lhs_cols: self.input_size(),
                rhs_rows: hidden.rows(),
                rhs_cols: hidden.cols(),
            });
        }
        if output.rows() != self.output_size() || output.cols() != self.hidden_size() {
            return Err(Error::DimensionMismatch {
                op: "load_weights",
                lhs_rows: self.output_size(),
                lhs_cols: self.hidden_size(),
                rhs_rows: output.rows(),
                rhs_cols: output.cols(),
            });
        }

        self.set_weights(hidden, output);
        Ok(())
    }
}

fn write_matrix(matrix: &Matrix, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, matrix)
        .map_err(|e| Error::Persist(format!("{}: {e}", path.display())))
}

fn read_matrix(path: &Path) -> Result<Matrix> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let matrix: Matrix = bincode::deserialize_from(reader)
        .map_err(|e| Error::Persist(format!("{}: {e}", path.display())))?;
    if matrix.as_slice().len() != matrix.rows() * matrix.cols() {
        return Err(Error::Persist(format!(
            "{}: element count does not match stored shape",
            path.display()
        )));
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_pair(tag: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        (
            dir.join(format!("ember-nn-{pid}-{tag}-hidden.weights")),
            dir.join(format!("ember-nn-{pid}-{tag}-output.weights")),
        )
    }

    #[test]
    fn round_trip_is_bit_identical() {
        let net = Network::new(4, 3, 2, 0.1, Some(5)).unwrap();
        let (hp, op) = temp_pair("roundtrip");

        net.save_weights(&hp, &op).unwrap();

        let mut restored = Network::new(4, 3, 2, 0.1, Some(99)).unwrap();
        assert_ne!(restored.hidden_weights(), net.hidden_weights());

        restored.load_weights(&hp, &op).unwrap();
        assert_eq!(restored.hidden_weights(), net.hidden_weights());
        assert_eq!(restored.output_weights(), net.output_weights());

        // Bit-level check, not just float equality.
        for (a, b) in restored
            .hidden_weights()
            .as_slice()
            .iter()
            .zip(net.hidden_weights().as_slice())
        {
            assert_eq!(a.to_bits(), b.to_bits());
        }

        let _ = std::fs::remove_file(&hp);
        let _ = std::fs::remove_file(&op);
    }

    #[test]
    fn shape_mismatch_fails_and_preserves_weights() {
        let small = Network::new(2, 2, 1, 0.1, Some(5)).unwrap();
        let (hp, op) = temp_pair("mismatch");
        small.save_weights(&hp, &op).unwrap();

        let mut big = Network::new(4, 3, 2, 0.1, Some(6)).unwrap();
        let before = big.clone();

        assert!(matches!(
            big.load_weights(&hp, &op),
            Err(Error::DimensionMismatch { op: "load_weights", .. })
        ));
        assert_eq!(big.hidden_weights(), before.hidden_weights());
        assert_eq!(big.output_weights(), before.output_weights());

        let _ = std::fs::remove_file(&hp);
        let _ = std::fs::remove_file(&op);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let mut net = Network::new(2, 2, 1, 0.1, Some(5)).unwrap();
        let (hp, op) = temp_pair("missing");
        assert!(matches!(net.load_weights(&hp, &op), Err(Error::Io(_))));
    }

    #[test]
    fn garbage_file_reports_persist_error() {
        let mut net = Network::new(2, 2, 1, 0.1, Some(5)).unwrap();
        let (hp, op) = temp_pair("garbage");
        std::fs::write(&hp, b"not a weight file").unwrap();
        std::fs::write(&op, b"not a weight file").unwrap();

        assert!(matches!(net.load_weights(&hp, &op), Err(Error::Persist(_))));

        let _ = std::fs::remove_file(&hp);
        let _ = std::fs::remove_file(&op);
    }
}
