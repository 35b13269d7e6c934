use super::{snapshot, trivial_trace, SortStep};
use crate::element::{element_array, ElementState};
use crate::meta::{AlgorithmInfo, TimeComplexity};

pub(super) static INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    key: "selectionSort",
    description: "A simple sorting algorithm that repeatedly finds the minimum element \
                  from the unsorted part and puts it at the beginning.",
    time_complexity: TimeComplexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
};

/// For each position, a linear scan over the unsorted suffix locates the
/// minimum, followed by at most one exchange. The running minimum keeps its
/// highlight until it is superseded or placed.
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

    for i in 0..n - 1 {
        let mut min_index = i;
        arr[i].state = ElementState::Comparing;
        steps.push(snapshot(&arr, comparisons, swaps, false));

        for j in i + 1..n {
            arr[j].state = ElementState::Comparing;
            comparisons += 1;
            steps.push(snapshot(&arr, comparisons, swaps, false));

            if arr[j].value < arr[min_index].value {
                if min_index != i {
                    arr[min_index].state = ElementState::Default;
                }
                min_index = j;
            } else {
                arr[j].state = ElementState::Default;
            }

            steps.push(snapshot(&arr, comparisons, swaps, false));
        }

        if min_index != i {
            arr[i].state = ElementState::Swapping;
            arr[min_index].state = ElementState::Swapping;
            steps.push(snapshot(&arr, comparisons, swaps, false));

            arr.swap(i, min_index);
            swaps += 1;
            steps.push(snapshot(&arr, comparisons, swaps, false));
        }

        arr[i].state = ElementState::Sorted;
        if min_index != i {
            arr[min_index].state = ElementState::Default;
        }
        steps.push(snapshot(&arr, comparisons, swaps, false));
    }

    arr[n - 1].state = ElementState::Sorted;
    steps.push(snapshot(&arr, comparisons, swaps, true));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(step: &SortStep) -> Vec<i32> {
        step.array.iter().map(|e| e.value).collect()
    }

    #[test]
    fn empty_input_yields_a_single_complete_step() {
        let steps = record(&[]);

        assert_eq!(steps.len(), 1);
        let only = &steps[0];
        assert_eq!(only.comparisons, 0);
        assert_eq!(only.swaps, 0);
        assert!(only.is_complete);
        assert!(only.array.is_empty());
    }

    #[test]
    fn one_exchange_per_misplaced_position() {
        let steps = record(&[2, 1]);
        let last = steps.last().unwrap();

        assert_eq!(values(last), vec![1, 2]);
        assert_eq!(last.swaps, 1);
        assert_eq!(last.comparisons, 1);
    }

    #[test]
    fn in_place_minimum_costs_no_exchange() {
        let steps = record(&[1, 3, 2]);
        let last = steps.last().unwrap();

        assert_eq!(values(last), vec![1, 2, 3]);
        // Position 0 was already the minimum; only positions 1 and 2 swap.
        assert_eq!(last.swaps, 1);
    }

    #[test]
    fn comparison_count_is_quadratic_regardless_of_order() {
        for input in [[1, 2, 3, 4], [4, 3, 2, 1]] {
            let steps = record(&input);
            assert_eq!(steps.last().unwrap().comparisons, 6);
        }
    }

    #[test]
    fn final_step_is_fully_sorted() {
        let steps = record(&[5, 4, 6, 2]);
        let last = steps.last().unwrap();

        assert_eq!(values(last), vec![2, 4, 5, 6]);
        assert!(last.array.iter().all(|e| e.state == ElementState::Sorted));
    }
}
