use serde::Serialize;

/// Asymptotic cost of an algorithm in the three standard cases. The strings
/// are display text for an info panel, not anything the recorders compute.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Static descriptor surfaced alongside each algorithm variant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    /// Stable identifier used on the command line and in exported traces.
    pub key: &'static str,
    pub description: &'static str,
    pub time_complexity: TimeComplexity,
    pub space_complexity: &'static str,
}
