use log::trace;

use crate::error::MatchError;

/// Number of substitutions, insertions and deletions an approximate match may spend.
///
/// Exists for callers that hold a signed count: converting a negative value fails with
/// [`MatchError::NegativeBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ErrorBudget(usize);

impl ErrorBudget {
    pub fn new(max_errors: usize) -> ErrorBudget {
        ErrorBudget(max_errors)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for ErrorBudget {
    type Error = MatchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(MatchError::NegativeBudget(value));
        }
        // any budget past usize::MAX already covers every possible alignment
        Ok(ErrorBudget(usize::try_from(value).unwrap_or(usize::MAX)))
    }
}

/// Sellers-style scan: does `pattern` occur somewhere in `sequence` with at most `max_errors`
/// edits?
///
/// Unlike plain edit distance, column 0 of the table is pinned to zero on every row, so an
/// alignment may start at any position of `sequence`. Only alignments ending at or after
/// position `pattern.len()` are considered.
pub fn approximate_match(sequence: &str, pattern: &str, max_errors: usize) -> bool {
    let sequence: Vec<char> = sequence.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let n = sequence.len();
    let m = pattern.len();

    // rows: sequence prefix length, columns: pattern prefix length
    let mut table: Vec<Vec<usize>> = vec![vec![0; m + 1]; n + 1];
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = if sequence[i - 1] == pattern[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j])
            };
        }
    }

    let found = (m..=n).find(|&i| table[i][m] <= max_errors);
    if let Some(end) = found {
        trace!("approximate match ending at {} with {} errors", end, table[end][m]);
    }
    found.is_some()
}

pub fn approximate_match_checked(
    sequence: &str,
    pattern: &str,
    max_errors: i64,
) -> Result<bool, MatchError> {
    let budget = ErrorBudget::try_from(max_errors)?;
    Ok(approximate_match(sequence, pattern, budget.get()))
}
