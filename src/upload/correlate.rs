use super::types::{ResultStatus, ValidationResult};
use crate::selection::{FileId, FileStatus, SubmittedItem};

pub fn status_for(result: &ValidationResult) -> FileStatus {
    match result.result_status() {
        ResultStatus::Ok => FileStatus::Passed,
        ResultStatus::Other(_) => FileStatus::Failed {
            reason: result.failure_reason(),
        },
    }
}

/// Files sharing a name take equal-named results in order; once those run
/// out the first one is reused. Files with no match get no outcome.
pub fn correlate(
    submitted: &[SubmittedItem],
    results: &[ValidationResult],
) -> Vec<(FileId, FileStatus)> {
    let mut claimed = vec![false; results.len()];
    let mut outcomes = Vec::with_capacity(submitted.len());

    for item in submitted {
        let mut matching = results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.filename == item.name)
            .peekable();

        let Some(&(first, _)) = matching.peek() else {
            continue;
        };
        let index = matching
            .find(|(i, _)| !claimed[*i])
            .map(|(i, _)| i)
            .unwrap_or(first);

        claimed[index] = true;
        outcomes.push((item.id, status_for(&results[index])));
    }

    outcomes
}
