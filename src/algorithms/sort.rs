use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubblesort",
            SortAlgorithm::Selection => "selectionsort",
            SortAlgorithm::Insertion => "insertionsort",
            SortAlgorithm::Merge => "mergesort",
        }
    }

    pub fn sort<T: Clone>(self, items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(items, cmp),
            SortAlgorithm::Selection => selection_sort(items, cmp),
            SortAlgorithm::Insertion => insertion_sort(items, cmp),
            SortAlgorithm::Merge => merge_sort(items, cmp),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bubblesort" | "bubble" => Ok(SortAlgorithm::Bubble),
            "selectionsort" | "selection" => Ok(SortAlgorithm::Selection),
            "insertionsort" | "insertion" => Ok(SortAlgorithm::Insertion),
            "mergesort" | "merge" => Ok(SortAlgorithm::Merge),
            _ => Err(StoreError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adjacent swaps; each pass leaves the largest remaining item at the end.
pub fn bubble_sort<T>(items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if cmp(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
            }
        }
    }
}

pub fn selection_sort<T>(items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if cmp(&items[j], &items[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        items.swap(i, min_index);
    }
}

pub fn insertion_sort<T>(items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        // Sink items[i] into the sorted prefix items[..i].
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Stable: on ties the item from the left half is taken first.
pub fn merge_sort<T: Clone>(items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();

    merge_sort(&mut left, cmp);
    merge_sort(&mut right, cmp);

    merge(items, &left, &right, cmp);
}

fn merge<T: Clone>(items: &mut [T], left: &[T], right: &[T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    let rest = if i < left.len() {
        &left[i..]
    } else {
        &right[j..]
    };
    items[k..].clone_from_slice(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    fn sample() -> Vec<i32> {
        vec![5, -2, 9, 0, 5, 13, 1, -7, 3, 3]
    }

    #[test]
    fn every_algorithm_sorts_ascending() {
        let mut expected = sample();
        expected.sort();

        for algorithm in SortAlgorithm::ALL {
            let mut items = sample();
            algorithm.sort(&mut items, &ascending);
            assert_eq!(items, expected, "{} produced the wrong order", algorithm);
        }
    }

    #[test]
    fn empty_and_single_inputs_are_left_alone() {
        for algorithm in SortAlgorithm::ALL {
            let mut empty: Vec<i32> = vec![];
            algorithm.sort(&mut empty, &ascending);
            assert!(empty.is_empty());

            let mut single = vec![42];
            algorithm.sort(&mut single, &ascending);
            assert_eq!(single, vec![42]);
        }
    }

    #[test]
    fn merge_sort_keeps_ties_in_input_order() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        merge_sort(&mut pairs, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));

        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn reverse_ordering_is_respected() {
        let mut items = sample();
        insertion_sort(&mut items, &|a: &i32, b: &i32| b.cmp(a));

        assert_eq!(items, vec![13, 9, 5, 5, 3, 3, 1, 0, -2, -7]);
    }

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("BubbleSort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Bubble);
        assert_eq!("selection".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Selection);
        assert_eq!("mergesort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
        assert!(matches!(
            "quicksort".parse::<SortAlgorithm>(),
            Err(StoreError::InvalidAlgorithm(_))
        ));
    }
}
