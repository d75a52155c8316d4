use crate::problem::Job;
use crate::solver::conflict::has_conflict;

/// The best conflict-free selection discovered so far. It starts empty with
/// zero profit and its profit never decreases during a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent {
	pub selected: Vec<usize>,
	pub profit: f64,
}

impl Incumbent {
	pub fn empty() -> Incumbent {
		Incumbent { selected: Vec::new(), profit: 0.0 }
	}
}

/// One node of the search tree: the selection built so far (strictly
/// increasing job indices), its profit, the index the candidate loop resumes
/// from, and the summed profit of every job at or after that index. The last
/// field is an upper bound on what this branch can still gain, ignoring
/// conflicts.
#[derive(Debug)]
pub struct SearchPath {
	selected: Vec<usize>,
	profit: f64,
	next_candidate: usize,
	potential_profit: f64,
}

impl SearchPath {
	pub fn root(jobs: &[Job]) -> SearchPath {
		SearchPath {
			selected: Vec::new(),
			profit: 0.0,
			next_candidate: 0,
			potential_profit: jobs.iter().map(|job| job.profit).sum(),
		}
	}
}

/// Depth-first branch-and-bound over index-ordered selections.
///
/// Each call tries every candidate index from `next_candidate` upward, so
/// every subset of jobs is generated at most once. A candidate is branched
/// into only when it fits the current selection *and* the running upper bound
/// (current profit plus the profit of everything not yet iterated past, the
/// candidate itself included) can still beat the incumbent. The running
/// potential is reduced by each candidate's profit only after that candidate
/// has been tried, which keeps the bound valid for the candidate itself.
///
/// After the candidate loop, the current selection competes against the
/// incumbent directly; that covers leaves and branches whose every extension
/// was skipped. The incumbent is returned to the caller and threaded through
/// sibling branches, never shared mutably.
pub fn explore(path: &SearchPath, jobs: &[Job], mut best: Incumbent) -> Incumbent {
	let mut remaining_potential = path.potential_profit;

	for candidate in path.next_candidate..jobs.len() {
		if !has_conflict(candidate, &path.selected, jobs)
			&& path.profit + remaining_potential > best.profit
		{
			let mut selected = path.selected.clone();
			selected.push(candidate);
			let child = SearchPath {
				selected,
				profit: path.profit + jobs[candidate].profit,
				next_candidate: candidate + 1,
				potential_profit: remaining_potential - jobs[candidate].profit,
			};
			best = explore(&child, jobs, best);
		}
		remaining_potential -= jobs[candidate].profit;
	}

	if path.profit > best.profit {
		best = Incumbent { selected: path.selected.clone(), profit: path.profit };
	}
	best
}
