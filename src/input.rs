use crate::problem::{Job, Time, is_valid_time};
use std::io::{BufRead, Write};

/// Collects jobs interactively: first a job count in 1..=99, then a
/// start/end/profit triple per job. Invalid answers are rejected with a
/// message and asked again; nothing here panics on bad input, only on a
/// closed or broken stream.
pub fn read_jobs<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Vec<Job> {
	let num_jobs = loop {
		let answer = ask(input, output, "Enter the number of jobs (1-99): ");
		match answer.parse::<usize>() {
			Ok(num) if (1..=99).contains(&num) => break num,
			_ => report(output, "Invalid input. Please enter a number between 1 and 99."),
		}
	};

	let mut jobs = Vec::with_capacity(num_jobs);
	for job_index in 0..num_jobs {
		report(output, &format!("\nJob {}:", job_index + 1));
		let (start_time, end_time) = read_interval(input, output);
		let profit = read_profit(input, output);
		jobs.push(Job::new(start_time, end_time, profit));
	}

	jobs
}

fn read_interval<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> (Time, Time) {
	loop {
		let Some(start_time) = parse_time(&ask(input, output, "Enter start time (HHMM): ")) else {
			report(output, "Invalid time format. Please use HHMM (0000-2359).");
			continue;
		};
		let Some(end_time) = parse_time(&ask(input, output, "Enter end time (HHMM): ")) else {
			report(output, "Invalid time format. Please use HHMM (0000-2359).");
			continue;
		};
		if start_time < end_time {
			return (start_time, end_time);
		}
		report(output, "Start time must be before end time. Please enter times again.");
	}
}

fn read_profit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> f64 {
	loop {
		match ask(input, output, "Enter job profit: ").parse::<f64>() {
			Ok(profit) if profit.is_finite() => return profit,
			_ => report(output, "Invalid profit. Please enter a number."),
		}
	}
}

/// A 4-digit HHMM answer, or `None` when the answer is anything else.
fn parse_time(answer: &str) -> Option<Time> {
	if answer.len() != 4 {
		return None;
	}
	let time = answer.parse::<Time>().ok()?;
	if is_valid_time(time) { Some(time) } else { None }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> String {
	write!(output, "{}", prompt).expect("Couldn't write prompt");
	output.flush().expect("Couldn't flush prompt");

	let mut line = String::new();
	let num_bytes = input.read_line(&mut line).expect("Couldn't read input");
	assert!(num_bytes != 0, "Unexpected end of input");
	line.trim().to_string()
}

fn report<W: Write>(output: &mut W, message: &str) {
	writeln!(output, "{}", message).expect("Couldn't write message");
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn run(script: &str) -> (Vec<Job>, String) {
		let mut input = Cursor::new(script.to_string());
		let mut output = Vec::new();
		let jobs = read_jobs(&mut input, &mut output);
		(jobs, String::from_utf8(output).expect("Couldn't decode output"))
	}

	#[test]
	fn test_reads_two_jobs() {
		let (jobs, _output) = run("2\n0900\n1100\n50\n1130\n1300\n40.5\n");
		assert_eq!(vec![
			Job::new(900, 1100, 50.0),
			Job::new(1130, 1300, 40.5),
		], jobs);
	}

	#[test]
	fn test_reasks_for_invalid_job_count() {
		let (jobs, output) = run("0\nabc\n100\n1\n0900\n1000\n10\n");
		assert_eq!(vec![Job::new(900, 1000, 10.0)], jobs);
		assert_eq!(3, output.matches("between 1 and 99").count());
	}

	#[test]
	fn test_reasks_for_malformed_times() {
		let (jobs, output) = run("1\n900\n0970\n0900\n1000\n10\n");
		assert_eq!(vec![Job::new(900, 1000, 10.0)], jobs);
		assert_eq!(2, output.matches("Invalid time format").count());
	}

	#[test]
	fn test_reasks_when_start_is_not_before_end() {
		let (jobs, output) = run("1\n1100\n0900\n1100\n1100\n0900\n1100\n5\n");
		assert_eq!(vec![Job::new(900, 1100, 5.0)], jobs);
		assert_eq!(2, output.matches("must be before end time").count());
	}

	#[test]
	fn test_reasks_for_bad_profit() {
		let (jobs, output) = run("1\n0900\n1000\nlots\n25\n");
		assert_eq!(vec![Job::new(900, 1000, 25.0)], jobs);
		assert_eq!(1, output.matches("Invalid profit").count());
	}

	#[test]
	#[should_panic(expected = "Unexpected end of input")]
	fn test_panics_when_input_ends_early() {
		run("2\n0900\n1000\n10\n");
	}
}
