use crate::problem::Job;

/// Whether the candidate job's time interval overlaps any job already in the
/// selection. Returns true on the first conflicting job; O(k) in the size of
/// the selection.
pub fn has_conflict(candidate: usize, selected: &[usize], jobs: &[Job]) -> bool {
	let candidate_job = &jobs[candidate];
	selected.iter().any(|&index| candidate_job.overlaps(&jobs[index]))
}
