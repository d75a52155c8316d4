/// Times are 4-digit HHMM codes in 0000..=2359. Both ends of a job are coded
/// the same way, so plain numeric comparison matches chronological order.
pub type Time = u16;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Job {
	pub start_time: Time,
	pub end_time: Time,
	pub profit: f64,
}

impl Job {
	pub fn new(start_time: Time, end_time: Time, profit: f64) -> Job {
		Job { start_time, end_time, profit }
	}

	/// Whether the half-open intervals `[start_time, end_time)` of both jobs
	/// overlap. Back-to-back jobs (one ends exactly when the other starts) do
	/// *not* overlap.
	pub fn overlaps(&self, other: &Job) -> bool {
		!(self.end_time <= other.start_time || self.start_time >= other.end_time)
	}
}

/// Whether `time` is a well-formed HHMM code: hours 0..=23, minutes 0..=59.
pub fn is_valid_time(time: Time) -> bool {
	time <= 2359 && time % 100 <= 59
}

/// The single precondition of the solver: every job must occupy a non-empty
/// interval within the HHMM domain. Collaborators are supposed to check this
/// before constructing jobs, so a violation here is a caller bug.
pub fn validate(jobs: &[Job]) {
	for (index, job) in jobs.iter().enumerate() {
		assert!(
			is_valid_time(job.start_time),
			"Job {}: start time {:04} is not a valid HHMM code", index, job.start_time
		);
		assert!(
			is_valid_time(job.end_time),
			"Job {}: end time {:04} is not a valid HHMM code", index, job.end_time
		);
		assert!(
			job.start_time < job.end_time,
			"Job {}: start time {:04} must be before end time {:04}",
			index, job.start_time, job.end_time
		);
	}
}
