use super::{snapshot, trivial_trace, SortStep};
use crate::element::{element_array, ElementState};
use crate::meta::{AlgorithmInfo, TimeComplexity};

pub(super) static INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    key: "bubbleSort",
    description: "A simple comparison-based sorting algorithm that repeatedly steps \
                  through the list, compares adjacent elements and swaps them if they \
                  are in the wrong order.",
    time_complexity: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
};

/// Adjacent-pair scans, bubbling the largest remaining value to the end of
/// the unsorted prefix. A pass with no exchange proves the prefix is already
/// ordered and ends the run early.
pub(super) fn record(input: &[i32]) -> Vec<SortStep> {
    if input.len() <= 1 {
        return trivial_trace(input);
    }

    let mut arr = element_array(input);
    let n = arr.len();
    let mut steps = Vec::new();
    let mut comparisons = 0;
    let mut swaps = 0;

    steps.push(snapshot(&arr, comparisons, swaps, false));

    for i in 0..n {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            arr[j].state = ElementState::Comparing;
            arr[j + 1].state = ElementState::Comparing;
            comparisons += 1;
            steps.push(snapshot(&arr, comparisons, swaps, false));

            if arr[j].value > arr[j + 1].value {
                arr[j].state = ElementState::Swapping;
                arr[j + 1].state = ElementState::Swapping;
                steps.push(snapshot(&arr, comparisons, swaps, false));

                arr.swap(j, j + 1);
                swaps += 1;
                swapped = true;
                steps.push(snapshot(&arr, comparisons, swaps, false));
            }

            arr[j].state = ElementState::Default;
            arr[j + 1].state = ElementState::Default;
        }

        // The largest value of this pass has reached its final slot.
        arr[n - i - 1].state = ElementState::Sorted;
        steps.push(snapshot(&arr, comparisons, swaps, false));

        if !swapped {
            for element in &mut arr[..n - i - 1] {
                element.state = ElementState::Sorted;
            }
            break;
        }
    }

    for element in &mut arr {
        element.state = ElementState::Sorted;
    }
    steps.push(snapshot(&arr, comparisons, swaps, true));

    steps
}
