use crate::problem::{Job, validate};
use crate::solver::search::{Incumbent, SearchPath, explore};

mod accounting;
mod conflict;
mod search;

pub use accounting::{UnusedSummary, unused_summary};

/// The outcome of one solve. `selected` indexes into `jobs`, which is the
/// input list re-sorted by descending profit; callers that need the
/// complement must pass this same list to `unused_summary`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
	pub jobs: Vec<Job>,
	pub selected: Vec<usize>,
	pub max_profit: f64,
}

/// Finds a conflict-free subset of `jobs` with maximum total profit.
///
/// The list is sorted by descending profit before the search starts; that
/// makes the remaining-potential bound as tight as possible early, so the
/// prune fires as often as possible. The sort is stable, so equal-profit jobs
/// keep their relative input order and results are reproducible.
///
/// The search itself is exhaustive (exponential in the worst case); the
/// descending-profit order plus the bound test is what keeps practical inputs
/// tractable.
pub fn solve(mut jobs: Vec<Job>) -> Solution {
	validate(&jobs);
	jobs.sort_by(|a, b| b.profit.total_cmp(&a.profit));

	let root = SearchPath::root(&jobs);
	let best = explore(&root, &jobs, Incumbent::empty());

	Solution { jobs, selected: best.selected, max_profit: best.profit }
}
