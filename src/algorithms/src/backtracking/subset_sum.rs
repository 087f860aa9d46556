use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetSumError {
    NonPositiveElement { value: i32 },

    NegativeTarget { target: i32 },
}

impl fmt::Display for SubsetSumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveElement { value } => {
                write!(f, "subset sum elements must be positive, got {}", value)
            }
            Self::NegativeTarget { target } => {
                write!(f, "subset sum target must not be negative, got {}", target)
            }
        }
    }
}

impl std::error::Error for SubsetSumError {}

/// Finds every combination of `nums` summing to `target`, where each
/// element may be chosen any number of times.
///
/// Each combination is reported once, in non-decreasing order.
pub fn subset_sum_with_repetition(
    nums: &[i32],
    target: i32,
) -> Result<Vec<Vec<i32>>, SubsetSumError> {
    let choices = sorted_choices(nums, target)?;
    let mut search = Search::new(&choices);
    search.with_repetition(0, target);
    Ok(search.res)
}

/// Finds every subset of `nums` summing to `target`, using each input
/// position at most once. Repeated input values never produce repeated
/// subsets.
pub fn subset_sum_distinct(nums: &[i32], target: i32) -> Result<Vec<Vec<i32>>, SubsetSumError> {
    let choices = sorted_choices(nums, target)?;
    let mut search = Search::new(&choices);
    search.distinct(0, target);
    Ok(search.res)
}

fn sorted_choices(nums: &[i32], target: i32) -> Result<Vec<i32>, SubsetSumError> {
    if target < 0 {
        return Err(SubsetSumError::NegativeTarget { target });
    }
    if let Some(&value) = nums.iter().find(|&&num| num <= 0) {
        return Err(SubsetSumError::NonPositiveElement { value });
    }

    let mut choices = nums.to_vec();
    choices.sort_unstable();
    Ok(choices)
}

struct Search<'a> {
    choices: &'a [i32],
    state: Vec<i32>,
    res: Vec<Vec<i32>>,
}

impl<'a> Search<'a> {
    fn new(choices: &'a [i32]) -> Self {
        Self {
            choices,
            state: Vec::new(),
            res: Vec::new(),
        }
    }

    fn with_repetition(&mut self, start: usize, remaining: i32) {
        if remaining == 0 {
            self.res.push(self.state.clone());
            return;
        }

        for i in start..self.choices.len() {
            let choice = self.choices[i];
            // choices are sorted, nothing further can fit
            if remaining - choice < 0 {
                break;
            }
            self.state.push(choice);
            self.with_repetition(i, remaining - choice);
            self.state.pop();
        }
    }

    fn distinct(&mut self, start: usize, remaining: i32) {
        if remaining == 0 {
            self.res.push(self.state.clone());
            return;
        }

        for i in start..self.choices.len() {
            let choice = self.choices[i];
            if remaining - choice < 0 {
                break;
            }
            if i > start && choice == self.choices[i - 1] {
                continue;
            }
            self.state.push(choice);
            self.distinct(i + 1, remaining - choice);
            self.state.pop();
        }
    }
}
