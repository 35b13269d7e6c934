use super::{empty_trace, snapshot, sorted_copy, SearchStep};
use crate::element::ElementState;
use crate::meta::{AlgorithmInfo, TimeComplexity};

pub(super) static INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Jump Search",
    key: "jumpSearch",
    description: "A search algorithm that works by jumping ahead by fixed steps and \
                  then doing a linear search for the target.",
    time_complexity: TimeComplexity {
        best: "O(1)",
        average: "O(√n)",
        worst: "O(√n)",
    },
    space_complexity: "O(1)",
};

/// Block-by-block advance over the sorted copy with block size `⌊√n⌋`,
/// followed by a bounded linear scan inside the identified block. The jump
/// phase may overrun the array length; that ends the run as not-found
/// without ever indexing past `n - 1`.
pub(super) fn record(input: &[i32], target: i32) -> Vec<SearchStep> {
    if input.is_empty() {
        return empty_trace();
    }

    let mut arr = sorted_copy(input);
    let n = arr.len();
    let mut steps = Vec::new();
    let mut comparisons = 0;

    steps.push(snapshot(&arr, comparisons, false, None, None));

    let block_size = (n as f64).sqrt().floor() as usize;
    let mut prev = 0usize;
    let mut current = block_size;

    // Jump phase: probe each block's upper boundary.
    while current <= n && arr[current - 1].value < target {
        for element in &mut arr[prev..current] {
            element.state = ElementState::Comparing;
        }
        comparisons += 1;
        steps.push(snapshot(&arr, comparisons, false, None, Some(current - 1)));

        for element in &mut arr {
            element.state = ElementState::Default;
        }
        prev = current;
        current += block_size;

        if prev >= n {
            steps.push(snapshot(&arr, comparisons, true, None, None));
            return steps;
        }
    }

    // Linear phase inside the identified block. `prev < n` holds here.
    while arr[prev].value < target {
        arr[prev].state = ElementState::Comparing;
        comparisons += 1;
        steps.push(snapshot(&arr, comparisons, false, None, Some(prev)));

        arr[prev].state = ElementState::Default;
        prev += 1;

        if prev == current.min(n) {
            steps.push(snapshot(&arr, comparisons, true, None, None));
            return steps;
        }
    }

    // Boundary probe: the scan stopped on a value >= target.
    arr[prev].state = ElementState::Comparing;
    comparisons += 1;
    steps.push(snapshot(&arr, comparisons, false, None, Some(prev)));

    if arr[prev].value == target {
        arr[prev].state = ElementState::Sorted;
        steps.push(snapshot(&arr, comparisons, true, Some(prev), Some(prev)));
    } else {
        arr[prev].state = ElementState::Default;
        steps.push(snapshot(&arr, comparisons, true, None, None));
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_target_in_a_later_block() {
        let input: Vec<i32> = (1..=9).collect();
        let steps = record(&input, 7);
        let last = steps.last().unwrap();

        assert_eq!(last.found_index, Some(6));
        assert_eq!(last.array[6].state, ElementState::Sorted);
    }

    #[test]
    fn jump_phase_overrun_terminates_not_found() {
        // Target beyond every block boundary forces the jump phase past the
        // end of the array.
        let input: Vec<i32> = (1..=9).collect();
        let steps = record(&input, 50);
        let last = steps.last().unwrap();

        assert!(last.is_complete);
        assert_eq!(last.found_index, None);
    }

    #[test]
    fn block_boundary_scan_stops_inside_the_block() {
        // Absent target that falls between block boundaries.
        let steps = record(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 4);
        let last = steps.last().unwrap();

        assert_eq!(last.found_index, Some(3));
    }

    #[test]
    fn absent_mid_block_target_terminates_not_found() {
        let steps = record(&[10, 20, 30, 40, 50, 60, 70, 80, 90], 35);
        assert_eq!(steps.last().unwrap().found_index, None);
    }

    #[test]
    fn never_indexes_out_of_bounds_across_sizes() {
        // Any out-of-range access would panic the test. Oversized targets
        // force the full jump-phase overrun for every n.
        for n in 0..=200 {
            let input: Vec<i32> = (0..n).collect();
            record(&input, n * 2 + 1);
            record(&input, -1);
            if n > 0 {
                record(&input, n / 2);
            }
        }
    }

    #[test]
    fn duplicates_resolve_to_the_first_reached_index() {
        let steps = record(&[1, 3, 3, 3, 9], 3);
        let last = steps.last().unwrap();

        let found = last.found_index.unwrap();
        assert_eq!(last.array[found].value, 3);
        assert_eq!(found, 1);
    }

    #[test]
    fn normalises_unsorted_input_before_scanning() {
        let steps = record(&[9, 7, 8, 2, 5, 1, 3, 4, 6], 7);
        let first = &steps[0];

        assert_eq!(
            first.array.iter().map(|e| e.value).collect::<Vec<_>>(),
            (1..=9).collect::<Vec<_>>()
        );
        assert_eq!(steps.last().unwrap().found_index, Some(6));
    }
}
