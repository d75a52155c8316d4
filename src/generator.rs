use crate::problem::{Job, Time};
use rand::prelude::*;

/// Generates random jobs for testing: a uniform start time, a duration of one
/// to four hours, and a whole-number profit in 100..=1099. End times wrap
/// around midnight; samples whose wrapped end does not come strictly after
/// the start are re-drawn.
pub fn generate_random_jobs(count: usize) -> Vec<Job> {
	let mut rng = rand::rng();
	let mut jobs = Vec::with_capacity(count);
	for _counter in 0..count {
		jobs.push(random_job(&mut rng));
	}
	jobs
}

fn random_job(rng: &mut impl Rng) -> Job {
	loop {
		let start_hour = rng.random_range(0..24u32);
		let start_minute = rng.random_range(0..60u32);
		let duration = rng.random_range(60..240u32);

		let mut end_hour = start_hour + (start_minute + duration) / 60;
		let end_minute = (start_minute + duration) % 60;
		if end_hour >= 24 {
			end_hour -= 24;
		}

		if (end_hour, end_minute) <= (start_hour, start_minute) {
			continue;
		}

		let start_time = (start_hour * 100 + start_minute) as Time;
		let end_time = (end_hour * 100 + end_minute) as Time;
		let profit = rng.random_range(100..=1099) as f64;
		return Job::new(start_time, end_time, profit);
	}
}
