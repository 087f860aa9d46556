use std::cmp::Ordering;

/// Sorts `nums` in ascending order. Stable.
pub fn merge_sort<T: Ord + Clone>(nums: &mut [T]) {
    merge_sort_by(nums, |a, b| a.cmp(b));
}

/// Sorts `nums` with `compare`. Elements comparing equal keep their
/// original relative order.
pub fn merge_sort_by<T, F>(nums: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort(nums, &mut compare);
}

fn sort<T, F>(nums: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if nums.len() <= 1 {
        return;
    }

    // left half is [0, mid), right half is [mid, len)
    let mid = (nums.len() + 1) / 2;
    sort(&mut nums[..mid], compare);
    sort(&mut nums[mid..], compare);
    merge(nums, mid, compare);
}

fn merge<T, F>(nums: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut tmp = Vec::with_capacity(nums.len());
    let (mut i, mut j) = (0, mid);

    while i < mid && j < nums.len() {
        // ties take from the left half
        if compare(&nums[i], &nums[j]) != Ordering::Greater {
            tmp.push(nums[i].clone());
            i += 1;
        } else {
            tmp.push(nums[j].clone());
            j += 1;
        }
    }
    tmp.extend_from_slice(&nums[i..mid]);
    tmp.extend_from_slice(&nums[j..]);

    nums.clone_from_slice(&tmp);
}
