use super::{empty_trace, snapshot, sorted_copy, SearchStep};
use crate::element::ElementState;
use crate::meta::{AlgorithmInfo, TimeComplexity};

pub(super) static INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Binary Search",
    key: "binarySearch",
    description: "An efficient search algorithm that finds the position of a target \
                  value within a sorted array by repeatedly dividing the search \
                  interval in half.",
    time_complexity: TimeComplexity {
        best: "O(1)",
        average: "O(log n)",
        worst: "O(log n)",
    },
    space_complexity: "O(1)",
};

/// Halving scan over a closed interval `[left, right]` of the sorted copy.
/// Every in-range element is tagged for the frame, with the midpoint probe
/// marked as the pivot.
pub(super) fn record(input: &[i32], target: i32) -> Vec<SearchStep> {
    if input.is_empty() {
        return empty_trace();
    }

    let mut arr = sorted_copy(input);
    let mut steps = Vec::new();
    let mut comparisons = 0;

    steps.push(snapshot(&arr, comparisons, false, None, None));

    let mut left = 0usize;
    let mut right = arr.len() - 1;

    loop {
        for element in &mut arr[left..=right] {
            element.state = ElementState::Comparing;
        }
        let mid = (left + right) / 2;
        arr[mid].state = ElementState::Pivot;
        comparisons += 1;
        steps.push(snapshot(&arr, comparisons, false, None, Some(mid)));

        if arr[mid].value == target {
            for element in &mut arr {
                element.state = ElementState::Default;
            }
            arr[mid].state = ElementState::Sorted;
            steps.push(snapshot(&arr, comparisons, true, Some(mid), Some(mid)));
            return steps;
        }

        for element in &mut arr {
            element.state = ElementState::Default;
        }

        if arr[mid].value < target {
            left = mid + 1;
            if left > right {
                break;
            }
        } else {
            // Interval collapse below index 0 ends the run.
            if mid == 0 {
                break;
            }
            right = mid - 1;
            if left > right {
                break;
            }
        }
    }

    steps.push(snapshot(&arr, comparisons, true, None, None));
    steps
}
