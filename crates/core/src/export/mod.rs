use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::searching::{SearchAlgorithm, SearchStep};
use crate::sorting::{SortAlgorithm, SortStep};
use crate::Result;

/// A complete sorting run bundled for export: which algorithm ran, what it
/// was given, and every recorded frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTrace {
    pub algorithm: String,
    pub input: Vec<i32>,
    pub steps: Vec<SortStep>,
}

impl SortTrace {
    /// Records the run and captures it together with its provenance.
    pub fn capture(algorithm: SortAlgorithm, input: &[i32]) -> Self {
        Self {
            algorithm: algorithm.key().to_string(),
            input: input.to_vec(),
            steps: algorithm.record(input),
        }
    }
}

/// A complete search run bundled for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrace {
    pub algorithm: String,
    pub input: Vec<i32>,
    pub target: i32,
    pub steps: Vec<SearchStep>,
}

impl SearchTrace {
    pub fn capture(algorithm: SearchAlgorithm, input: &[i32], target: i32) -> Self {
        Self {
            algorithm: algorithm.key().to_string(),
            input: input.to_vec(),
            target,
            steps: algorithm.record(input, target),
        }
    }
}

/// Writes a captured trace to `path` as pretty-printed JSON.
pub fn write_trace<T: Serialize>(path: &Path, trace: &T) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, trace)?;
    writer.flush()?;
    Ok(())
}
