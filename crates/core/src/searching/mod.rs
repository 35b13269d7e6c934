//! Step recorders for the searching algorithm family.
//!
//! Searches that only make sense over ordered data (binary, jump) sort an
//! internal copy of the input before recording; the first frame shows that
//! normalized array. The [`SearchAlgorithm::requires_sorted`] flag tells a
//! caller whether the displayed input should be pre-sorted for conceptual
//! correctness, but never changes recorder behavior.

mod binary;
mod jump;
mod linear;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{element_array, Element};
use crate::error::VisualizerError;
use crate::meta::AlgorithmInfo;

/// One recorded frame of a search run. `found_index` is populated only on
/// the terminal step and only when the target was located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub array: Vec<Element>,
    pub comparisons: usize,
    pub is_complete: bool,
    pub found_index: Option<usize>,
    pub current_index: Option<usize>,
}

/// The closed set of searching strategies the visualiser can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Jump,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Jump,
    ];

    /// Static descriptor for the info panel.
    pub fn info(&self) -> &'static AlgorithmInfo {
        match self {
            SearchAlgorithm::Linear => &linear::INFO,
            SearchAlgorithm::Binary => &binary::INFO,
            SearchAlgorithm::Jump => &jump::INFO,
        }
    }

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Whether the displayed input should be sorted for the visualization
    /// to make conceptual sense.
    pub fn requires_sorted(&self) -> bool {
        match self {
            SearchAlgorithm::Linear => false,
            SearchAlgorithm::Binary | SearchAlgorithm::Jump => true,
        }
    }

    /// Looks an algorithm up by its stable key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|alg| alg.key() == key)
    }

    /// Runs the algorithm over a private copy of `input` and returns the
    /// complete step sequence. Duplicate values resolve to the first index
    /// reached by the algorithm's own scan order.
    pub fn record(&self, input: &[i32], target: i32) -> Vec<SearchStep> {
        match self {
            SearchAlgorithm::Linear => linear::record(input, target),
            SearchAlgorithm::Binary => binary::record(input, target),
            SearchAlgorithm::Jump => jump::record(input, target),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| VisualizerError::UnknownAlgorithm(s.to_string()))
    }
}

/// Clones the working array into a new frame.
fn snapshot(
    arr: &[Element],
    comparisons: usize,
    is_complete: bool,
    found_index: Option<usize>,
    current_index: Option<usize>,
) -> SearchStep {
    SearchStep {
        array: arr.to_vec(),
        comparisons,
        is_complete,
        found_index,
        current_index,
    }
}

/// Sequence for an empty input: one terminal not-found step.
fn empty_trace() -> Vec<SearchStep> {
    vec![SearchStep {
        array: Vec::new(),
        comparisons: 0,
        is_complete: true,
        found_index: None,
        current_index: None,
    }]
}

/// Ascending copy used by the recorders that scan ordered data.
fn sorted_copy(input: &[i32]) -> Vec<Element> {
    let mut values = input.to_vec();
    values.sort_unstable();
    element_array(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorders_are_deterministic() {
        let input = [12, 3, 7, 9, 3, 15];
        for alg in SearchAlgorithm::ALL {
            assert_eq!(alg.record(&input, 9), alg.record(&input, 9));
            assert_eq!(alg.record(&input, 99), alg.record(&input, 99));
        }
    }

    #[test]
    fn counters_are_monotonic_and_completion_is_terminal() {
        let input = [8, 1, 6, 3, 9, 2];
        for alg in SearchAlgorithm::ALL {
            for target in [6, 100] {
                let steps = alg.record(&input, target);
                assert!(!steps.is_empty());
                assert_eq!(steps[0].comparisons, 0);

                for pair in steps.windows(2) {
                    assert!(pair[1].comparisons >= pair[0].comparisons);
                    assert_eq!(pair[1].array.len(), input.len());
                }
                for (i, step) in steps.iter().enumerate() {
                    assert_eq!(step.is_complete, i == steps.len() - 1);
                }
            }
        }
    }

    #[test]
    fn found_index_appears_only_on_the_terminal_step() {
        let input = [4, 8, 15, 16, 23, 42];
        for alg in SearchAlgorithm::ALL {
            let steps = alg.record(&input, 16);
            let (last, rest) = steps.split_last().unwrap();

            assert!(rest.iter().all(|step| step.found_index.is_none()));
            let found = last.found_index.expect("target is present");
            assert_eq!(last.array[found].value, 16);
        }
    }

    #[test]
    fn absent_target_terminates_not_found() {
        let input = [5, 10, 20];
        for alg in SearchAlgorithm::ALL {
            let last = alg.record(&input, 13).pop().unwrap();
            assert!(last.is_complete);
            assert_eq!(last.found_index, None);
        }
    }

    #[test]
    fn empty_input_collapses_to_one_step() {
        for alg in SearchAlgorithm::ALL {
            let steps = alg.record(&[], 7);
            assert_eq!(steps.len(), 1);
            assert!(steps[0].is_complete);
            assert_eq!(steps[0].found_index, None);
            assert_eq!(steps[0].comparisons, 0);
        }
    }

    #[test]
    fn ordered_scan_metadata_matches_the_variants() {
        assert!(!SearchAlgorithm::Linear.requires_sorted());
        assert!(SearchAlgorithm::Binary.requires_sorted());
        assert!(SearchAlgorithm::Jump.requires_sorted());
    }

    #[test]
    fn looks_up_algorithms_by_key() {
        assert_eq!(
            SearchAlgorithm::from_key("jumpSearch"),
            Some(SearchAlgorithm::Jump)
        );
        assert!("linearSearch".parse::<SearchAlgorithm>().is_ok());
        assert!("fibSearch".parse::<SearchAlgorithm>().is_err());
    }
}
