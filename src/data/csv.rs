//! CSV digit-dataset loading.
//!
//! Supported format, one sample per line:
//!
//! ```text
//! label,p0,p1,...,pN
//! ```
//!
//! where `label` is a 0-based class index and each `pI` is a raw pixel in
//! `[0, 255]`. Pixels are normalized to `[0.01, 1.0]` (`x/255 * 0.99 + 0.01`)
//! so no input is exactly zero, which would freeze the weights it feeds.
//! Targets are one-hot style probability vectors: `0.01` everywhere with
//! `0.99` at the true class index.

use std::path::Path;

use crate::error::{Error, Result};

/// A loaded dataset: `inputs[i]` pairs with `targets[i]`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Reads a digit CSV file from disk. See [`parse_digits_csv`].
pub fn load_digits_csv<P: AsRef<Path>>(path: P, n_classes: usize) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    parse_digits_csv(&text, n_classes)
}

/// Parses digit CSV text into normalized inputs and one-hot style targets.
///
/// A leading header row is skipped when its first cell is not numeric.
/// Blank lines are ignored. Every data row must have the same number of
/// pixel columns as the first one.
pub fn parse_digits_csv(text: &str, n_classes: usize) -> Result<Dataset> {
    if n_classes == 0 {
        return Err(Error::InvalidConfiguration(
            "n_classes must be positive".into(),
        ));
    }

    let mut lines = text.lines().enumerate().peekable();

    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut inputs: Vec<Vec<f64>> = Vec::new();
    let mut targets: Vec<Vec<f64>> = Vec::new();
    let mut pixel_count: Option<usize> = None;

    for (line_idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut cells = line.split(',');

        let label_cell = cells.next().unwrap_or("");
        let label: usize = label_cell.trim().parse().map_err(|_| {
            Error::Dataset(format!(
                "line {}: label '{}' is not a non-negative integer",
                line_idx + 1,
                label_cell
            ))
        })?;
        if label >= n_classes {
            return Err(Error::Dataset(format!(
                "line {}: label {} out of range for {} classes",
                line_idx + 1,
                label,
                n_classes
            )));
        }

        let mut pixels = Vec::new();
        for cell in cells {
            let raw: f64 = cell.trim().parse().map_err(|_| {
                Error::Dataset(format!(
                    "line {}: pixel '{}' is not a number",
                    line_idx + 1,
                    cell
                ))
            })?;
            if !(0.0..=255.0).contains(&raw) {
                return Err(Error::Dataset(format!(
                    "line {}: pixel value {} outside [0, 255]",
                    line_idx + 1,
                    raw
                )));
            }
            pixels.push(raw / 255.0 * 0.99 + 0.01);
        }

        match pixel_count {
            None => pixel_count = Some(pixels.len()),
            Some(expected) if expected != pixels.len() => {
                return Err(Error::Dataset(format!(
                    "line {}: expected {} pixels, got {}",
                    line_idx + 1,
                    expected,
                    pixels.len()
                )));
            }
            Some(_) => {}
        }
        if pixels.is_empty() {
            return Err(Error::Dataset(format!(
                "line {}: row has a label but no pixels",
                line_idx + 1
            )));
        }

        let mut target = vec![0.01; n_classes];
        target[label] = 0.99;

        inputs.push(pixels);
        targets.push(target);
    }

    Ok(Dataset { inputs, targets })
}

/// A row is a header when its first cell is not parseable as a number.
fn is_header(line: &str) -> bool {
    match line.split(',').next() {
        Some(first) => first.trim().parse::<f64>().is_err(),
        None => false,
    }
}
