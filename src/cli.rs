use clap::{Parser, Subcommand};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(author = AUTHOR)]
#[command(about = "Maximum-profit job selection and goodies distribution", long_about = None)]
pub struct Args {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	/// Select the maximum-profit set of non-overlapping jobs
	Solve {
		/// The CSV file containing the jobs; prompts on stdin when omitted
		#[arg(short, long)]
		jobs_file: Option<String>,
	},

	/// Generate a random jobs CSV for testing
	Generate {
		/// The number of jobs to generate
		#[arg(short, long)]
		count: usize,

		/// The CSV file to write the jobs to
		#[arg(short, long)]
		output: String,
	},

	/// Pick the goodies with the smallest price spread for distribution
	Goodies {
		/// The text file containing the employee count and the price list
		#[arg(short, long, default_value = "./goodies.txt")]
		input: String,
	},
}
