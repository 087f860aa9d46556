use algorithms::{SubsetSumError, subset_sum_distinct, subset_sum_with_repetition};
use std::collections::HashSet;

#[test]
fn test_textbook_example() {
    let res = subset_sum_with_repetition(&[3, 4, 5], 9).expect("Search failed");
    assert_eq!(res, vec![vec![3, 3, 3], vec![4, 5]]);
}

#[test]
fn test_every_subset_hits_target() {
    let nums = [2, 3, 6, 7];
    let target = 13;

    for res in [
        subset_sum_with_repetition(&nums, target).unwrap(),
        subset_sum_distinct(&nums, target).unwrap(),
    ] {
        assert!(!res.is_empty());
        for subset in &res {
            assert_eq!(subset.iter().sum::<i32>(), target);
            assert!(subset.windows(2).all(|pair| pair[0] <= pair[1]));
        }
        let unique: HashSet<&Vec<i32>> = res.iter().collect();
        assert_eq!(unique.len(), res.len());
    }
}

#[test]
fn test_distinct_with_duplicates() {
    let res = subset_sum_distinct(&[10, 1, 2, 7, 6, 1, 5], 8).unwrap();
    assert_eq!(
        res,
        vec![vec![1, 1, 6], vec![1, 2, 5], vec![1, 7], vec![2, 6]]
    );
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        subset_sum_with_repetition(&[1, 0], 3),
        Err(SubsetSumError::NonPositiveElement { value: 0 })
    );
    assert_eq!(
        subset_sum_distinct(&[1, 2], -4),
        Err(SubsetSumError::NegativeTarget { target: -4 })
    );
}
