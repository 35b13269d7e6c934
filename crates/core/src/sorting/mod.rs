//! Step recorders for the sorting algorithm family.
//!
//! Each variant runs its algorithm to completion ahead of time and captures
//! a frame after every comparison, exchange, and placement, so a consumer
//! can scrub through the run in either direction without re-executing
//! anything.

mod bubble;
mod quick;
mod selection;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{element_array, Element, ElementState};
use crate::error::VisualizerError;
use crate::meta::AlgorithmInfo;

/// One recorded frame of a sorting run: a full snapshot of the working
/// array plus the counters accumulated up to that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    pub array: Vec<Element>,
    pub comparisons: usize,
    pub swaps: usize,
    pub is_complete: bool,
}

/// The closed set of sorting strategies the visualiser can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Selection,
    ];

    /// Static descriptor for the info panel.
    pub fn info(&self) -> &'static AlgorithmInfo {
        match self {
            SortAlgorithm::Bubble => &bubble::INFO,
            SortAlgorithm::Quick => &quick::INFO,
            SortAlgorithm::Selection => &selection::INFO,
        }
    }

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Looks an algorithm up by its stable key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|alg| alg.key() == key)
    }

    /// Runs the algorithm over a private copy of `input` and returns the
    /// complete step sequence. The caller's slice is never touched.
    ///
    /// The first step shows the untouched input, the last step has every
    /// element tagged [`ElementState::Sorted`] and `is_complete` set. Empty
    /// and single-element inputs collapse to that single final step.
    pub fn record(&self, input: &[i32]) -> Vec<SortStep> {
        match self {
            SortAlgorithm::Bubble => bubble::record(input),
            SortAlgorithm::Quick => quick::record(input),
            SortAlgorithm::Selection => selection::record(input),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| VisualizerError::UnknownAlgorithm(s.to_string()))
    }
}

/// Clones the working array into a new frame.
fn snapshot(arr: &[Element], comparisons: usize, swaps: usize, is_complete: bool) -> SortStep {
    SortStep {
        array: arr.to_vec(),
        comparisons,
        swaps,
        is_complete,
    }
}

/// Sequence for inputs that need no work: one combined initial/final step
/// with everything already in place.
fn trivial_trace(input: &[i32]) -> Vec<SortStep> {
    let mut arr = element_array(input);
    for element in &mut arr {
        element.state = ElementState::Sorted;
    }
    vec![SortStep {
        array: arr,
        comparisons: 0,
        swaps: 0,
        is_complete: true,
    }]
}
