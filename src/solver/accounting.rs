use crate::problem::Job;

/// The jobs that did not make the winning selection, in the order the solver
/// saw them, plus their summed profit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnusedSummary {
	pub jobs: Vec<Job>,
	pub total_profit: f64,
}

impl UnusedSummary {
	pub fn count(&self) -> usize {
		self.jobs.len()
	}
}

/// Partitions `jobs` against `selected` in a single pass. `selected` must
/// index into `jobs` (the solver's sorted list, not the caller's original
/// order).
pub fn unused_summary(jobs: &[Job], selected: &[usize]) -> UnusedSummary {
	let mut used = vec![false; jobs.len()];
	for &index in selected {
		used[index] = true;
	}

	let mut unused_jobs = Vec::with_capacity(jobs.len() - selected.len());
	let mut total_profit = 0.0;
	for (index, job) in jobs.iter().enumerate() {
		if !used[index] {
			total_profit += job.profit;
			unused_jobs.push(*job);
		}
	}

	UnusedSummary { jobs: unused_jobs, total_profit }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty() {
		let summary = unused_summary(&[], &[]);
		assert_eq!(0, summary.count());
		assert_eq!(0.0, summary.total_profit);
	}

	#[test]
	fn test_everything_selected() {
		let jobs = vec![Job::new(900, 1000, 10.0), Job::new(1000, 1100, 20.0)];
		let summary = unused_summary(&jobs, &[0, 1]);
		assert_eq!(0, summary.count());
		assert_eq!(0.0, summary.total_profit);
	}

	#[test]
	fn test_complement_preserves_order() {
		let jobs = vec![
			Job::new(800, 900, 40.0),
			Job::new(900, 1000, 30.0),
			Job::new(1000, 1100, 20.0),
			Job::new(1100, 1200, 10.0),
		];
		let summary = unused_summary(&jobs, &[0, 2]);
		assert_eq!(2, summary.count());
		assert_eq!(40.0, summary.total_profit);
		assert_eq!(vec![jobs[1], jobs[3]], summary.jobs);
	}
}
