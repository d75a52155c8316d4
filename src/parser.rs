use crate::problem::*;
use std::fs::read_to_string;

/// Reads a jobs CSV: one `start,end,profit` line per job with HHMM time
/// codes, blank lines skipped, and at most one alphabetic header line
/// tolerated at the top. Malformed lines panic with a message naming the
/// offending line.
pub fn parse_jobs(file_path: &str) -> Vec<Job> {
	let raw_text = read_to_string(file_path).expect("Couldn't read jobs file");
	parse_jobs_text(&raw_text)
}

fn parse_jobs_text(raw_text: &str) -> Vec<Job> {
	let mut jobs = Vec::<Job>::new();
	let mut allow_header = true;

	for line in raw_text.lines() {
		if line.trim().is_empty() { continue; }
		if allow_header {
			allow_header = false;
			if line.chars().any(|c| c.is_alphabetic()) { continue; }
		}
		let string_values: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
		if string_values.len() != 3 {
			panic!("Unexpected line in jobs file: {}", line);
		}

		let start_time = string_values[0].parse::<Time>().expect("Couldn't parse start time");
		let end_time = string_values[1].parse::<Time>().expect("Couldn't parse end time");
		let profit = string_values[2].parse::<f64>().expect("Couldn't parse profit");

		assert!(
			is_valid_time(start_time),
			"Start time {:04} is not a valid HHMM code in line: {}", start_time, line
		);
		assert!(
			is_valid_time(end_time),
			"End time {:04} is not a valid HHMM code in line: {}", end_time, line
		);
		assert!(
			start_time < end_time,
			"Start time {:04} must be before end time {:04} in line: {}",
			start_time, end_time, line
		);

		jobs.push(Job::new(start_time, end_time, profit));
	}

	jobs
}

/// Writes jobs in the same CSV format `parse_jobs` reads, header included.
pub fn write_jobs(file_path: &str, jobs: &[Job]) {
	let mut text = String::from("start,end,profit\n");
	for job in jobs {
		text.push_str(&format!("{:04},{:04},{}\n", job.start_time, job.end_time, job.profit));
	}
	std::fs::write(file_path, text).expect("Couldn't write jobs file");
}
