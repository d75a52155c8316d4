mod cli;
mod generator;
mod goodies;
mod input;
mod parser;
mod problem;
mod solver;

use clap::Parser;
use cli::{Args, Command};
use solver::{solve, unused_summary};

fn main() {
	let args = Args::parse();
	match args.command {
		Command::Solve { jobs_file } => run_solve(jobs_file.as_deref()),
		Command::Generate { count, output } => {
			let jobs = generator::generate_random_jobs(count);
			parser::write_jobs(&output, &jobs);
			println!("Wrote {} jobs to {}", jobs.len(), output);
		}
		Command::Goodies { input } => goodies::run(&input),
	}
}

fn run_solve(jobs_file: Option<&str>) {
	let jobs = match jobs_file {
		Some(path) => parser::parse_jobs(path),
		None => {
			let stdin = std::io::stdin();
			let stdout = std::io::stdout();
			input::read_jobs(&mut stdin.lock(), &mut stdout.lock())
		}
	};
	println!("Found {} jobs", jobs.len());

	let solution = solve(jobs);
	let summary = unused_summary(&solution.jobs, &solution.selected);

	println!("\nSelected {} jobs for a total profit of {}", solution.selected.len(), solution.max_profit);
	for &index in &solution.selected {
		let job = solution.jobs[index];
		println!("{:04} - {:04}  profit {}", job.start_time, job.end_time, job.profit);
	}

	println!("\nThe number of tasks and earnings available for others");
	println!("Tasks: {}", summary.count());
	println!("Earnings: {}", summary.total_profit);
}
