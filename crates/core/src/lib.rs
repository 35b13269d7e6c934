//! Core library for the Algorithm Visualiser application.
//!
//! The crate precomputes replayable step traces for classic sorting and
//! searching algorithms. A recorder runs its algorithm to completion ahead
//! of time and returns the full, fully materialized sequence of annotated
//! array snapshots; playback is then nothing more than indexing into that
//! sequence, so a consumer can scrub forward and backward freely without
//! re-executing anything. Rendering, input controls, and timer scheduling
//! live outside this crate.

pub mod config;
pub mod element;
pub mod error;
pub mod export;
pub mod meta;
pub mod playback;
pub mod searching;
pub mod sorting;

pub use config::{AppConfig, ArrayConfig, PlaybackConfig};
pub use element::{element_array, Element, ElementState};
pub use error::{Result, VisualizerError};
pub use export::{write_trace, SearchTrace, SortTrace};
pub use meta::{AlgorithmInfo, TimeComplexity};
pub use playback::Playback;
pub use searching::{SearchAlgorithm, SearchStep};
pub use sorting::{SortAlgorithm, SortStep};
