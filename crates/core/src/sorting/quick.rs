use super::{snapshot, trivial_trace, SortStep};
use crate::element::{element_array, Element, ElementState};
use crate::meta::{AlgorithmInfo, TimeComplexity};

pub(super) static INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    key: "quickSort",
    description: "A divide-and-conquer algorithm that selects a 'pivot' element and \
                  partitions the array around the pivot, placing smaller elements to \
                  the left and larger elements to the right.",
    time_complexity: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space_complexity: "O(log n)",
};

/// Recursive partitioning with the last element of each subrange as pivot.
/// Equal values route to the low partition, so the exchange pattern is
/// stable with respect to ties.
pub(super) fn record(input: &[i32]) -> Vec<SortStep> {
    if input.len() <= 1 {
        return trivial_trace(input);
    }

    let mut trace = Trace {
        arr: element_array(input),
        steps: Vec::new(),
        comparisons: 0,
        swaps: 0,
    };

    trace.emit(false);
    let right = trace.arr.len() - 1;
    trace.sort_range(0, right);

    for element in &mut trace.arr {
        element.state = ElementState::Sorted;
    }
    trace.emit(true);

    trace.steps
}

/// Working state threaded through the recursion.
struct Trace {
    arr: Vec<Element>,
    steps: Vec<SortStep>,
    comparisons: usize,
    swaps: usize,
}

impl Trace {
    fn emit(&mut self, is_complete: bool) {
        self.steps
            .push(snapshot(&self.arr, self.comparisons, self.swaps, is_complete));
    }

    fn sort_range(&mut self, left: usize, right: usize) {
        if left >= right {
            return;
        }

        let pivot = right;
        self.arr[pivot].state = ElementState::Pivot;
        self.emit(false);

        // Next slot for a value that belongs in the low partition.
        let mut store = left;

        for j in left..right {
            self.arr[j].state = ElementState::Comparing;
            self.comparisons += 1;
            self.emit(false);

            if self.arr[j].value <= self.arr[pivot].value {
                if store != j {
                    self.arr[store].state = ElementState::Swapping;
                    self.arr[j].state = ElementState::Swapping;
                    self.emit(false);

                    self.arr.swap(store, j);
                    self.swaps += 1;
                    self.emit(false);

                    self.arr[store].state = ElementState::Default;
                }
                store += 1;
            }

            self.arr[j].state = ElementState::Default;
        }

        if store != pivot {
            self.arr[store].state = ElementState::Swapping;
            self.emit(false);

            self.arr.swap(store, pivot);
            self.swaps += 1;
            self.emit(false);
        }

        // Only the freshly placed pivot stays highlighted in the partition's
        // closing frame.
        for element in &mut self.arr {
            element.state = ElementState::Default;
        }
        self.arr[store].state = ElementState::Sorted;
        self.emit(false);

        if store > left {
            self.sort_range(left, store - 1);
        }
        if store + 1 < right {
            self.sort_range(store + 1, right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(step: &SortStep) -> Vec<i32> {
        step.array.iter().map(|e| e.value).collect()
    }

    #[test]
    fn already_sorted_input_needs_no_swaps() {
        let steps = record(&[1, 2, 3]);
        let last = steps.last().unwrap();

        assert_eq!(values(last), vec![1, 2, 3]);
        assert_eq!(last.swaps, 0);
        assert!(last.is_complete);
    }

    #[test]
    fn sorts_adversarial_reverse_input() {
        let steps = record(&[9, 7, 5, 3, 1]);
        let last = steps.last().unwrap();

        assert_eq!(values(last), vec![1, 3, 5, 7, 9]);
        assert!(last.array.iter().all(|e| e.state == ElementState::Sorted));
    }

    #[test]
    fn ties_route_to_the_low_partition() {
        let steps = record(&[4, 4, 4, 2]);
        let last = steps.last().unwrap();

        assert_eq!(values(last), vec![2, 4, 4, 4]);
    }

    #[test]
    fn marks_the_pivot_before_partitioning() {
        let steps = record(&[3, 1, 2]);

        // Frame after the initial snapshot tags the subrange pivot.
        let pivot_frame = &steps[1];
        assert_eq!(pivot_frame.array[2].state, ElementState::Pivot);
        assert_eq!(pivot_frame.comparisons, 0);
    }

    #[test]
    fn partition_close_highlights_only_the_placed_pivot() {
        let steps = record(&[3, 1, 2]);

        // First partition of [3,1,2] places 2 at index 1.
        let close = steps
            .iter()
            .find(|s| s.array.iter().any(|e| e.state == ElementState::Sorted))
            .unwrap();
        let sorted_count = close
            .array
            .iter()
            .filter(|e| e.state == ElementState::Sorted)
            .count();
        assert_eq!(sorted_count, 1);
        assert_eq!(close.array[1].value, 2);
    }
}
