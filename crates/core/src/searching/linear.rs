use super::{empty_trace, snapshot, SearchStep};
use crate::element::{element_array, ElementState};
use crate::meta::{AlgorithmInfo, TimeComplexity};

pub(super) static INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Linear Search",
    key: "linearSearch",
    description: "A simple search algorithm that checks each element of the list until \
                  a match is found or the whole list has been searched.",
    time_complexity: TimeComplexity {
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
    },
    space_complexity: "O(1)",
};

/// Left-to-right scan over the input as given; no ordering assumption.
pub(super) fn record(input: &[i32], target: i32) -> Vec<SearchStep> {
    if input.is_empty() {
        return empty_trace();
    }

    let mut arr = element_array(input);
    let mut steps = Vec::new();
    let mut comparisons = 0;

    steps.push(snapshot(&arr, comparisons, false, None, None));

    for i in 0..arr.len() {
        arr[i].state = ElementState::Comparing;
        comparisons += 1;
        steps.push(snapshot(&arr, comparisons, false, None, Some(i)));

        if arr[i].value == target {
            arr[i].state = ElementState::Sorted;
            steps.push(snapshot(&arr, comparisons, true, Some(i), Some(i)));
            return steps;
        }

        arr[i].state = ElementState::Default;
    }

    steps.push(snapshot(&arr, comparisons, true, None, None));
    steps
}
