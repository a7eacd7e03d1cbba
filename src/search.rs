//! Shortest-ladder search by breadth-first search.
//!
//! The graph is implicit: lexicon words are nodes and two words share an
//! edge when they differ in exactly one position. BFS visits words in
//! non-decreasing distance from the start, so the first time the end word
//! is discovered its predecessor chain is a shortest ladder.
//!
//! Neighbors are expanded in lexicographic order, which makes the chosen
//! ladder deterministic when several shortest ladders exist.

use crate::ladder::Ladder;
use crate::lexicon::Lexicon;
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Outcome of one search, with counters for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub ladder: Ladder,
    /// Words dequeued and expanded.
    pub expanded: usize,
    /// Distinct words discovered, including the start word.
    pub discovered: usize,
    /// The expansion budget ran out before the search finished.
    pub budget_exhausted: bool,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        !self.ladder.is_empty()
    }
}

/// A configured ladder search over a shared lexicon.
#[derive(Debug, Clone, Copy)]
pub struct LadderSearch<'a> {
    lexicon: &'a Lexicon,
    max_expansions: Option<usize>,
}

impl<'a> LadderSearch<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            max_expansions: None,
        }
    }

    /// Stop after expanding this many words. `None` means unbounded.
    pub fn max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Find a shortest ladder from `start` to `end`.
    ///
    /// Both words must already be normalized. The ladder is empty when
    /// `start == end`, when either word is not in the lexicon, when no
    /// path exists, or when the expansion budget runs out.
    pub fn run(&self, start: &str, end: &str) -> SearchReport {
        if start == end {
            debug!(start, "start and end are the same word");
            return SearchReport::default();
        }
        let (Some(start), Some(end)) = (self.lexicon.get(start), self.lexicon.get(end)) else {
            debug!(start, end, "start or end word is not in the lexicon");
            return SearchReport::default();
        };

        debug!(start, end, size = self.lexicon.size(), "searching for ladder");

        let mut frontier = VecDeque::from([start]);
        let mut predecessors: HashMap<&str, Option<&str>> = HashMap::from([(start, None)]);
        let mut expanded = 0;

        while let Some(word) = frontier.pop_front() {
            if self.max_expansions.is_some_and(|limit| expanded >= limit) {
                debug!(expanded, pending = frontier.len() + 1, "expansion budget exhausted");
                return SearchReport {
                    ladder: Ladder::empty(),
                    expanded,
                    discovered: predecessors.len(),
                    budget_exhausted: true,
                };
            }
            expanded += 1;

            for next in self.lexicon.neighbors(word) {
                let Entry::Vacant(slot) = predecessors.entry(next) else {
                    continue;
                };
                slot.insert(Some(word));

                if next == end {
                    let ladder = reconstruct(&predecessors, end);
                    debug!(steps = ladder.steps(), expanded, "ladder found");
                    return SearchReport {
                        ladder,
                        expanded,
                        discovered: predecessors.len(),
                        budget_exhausted: false,
                    };
                }
                frontier.push_back(next);
            }
        }

        debug!(expanded, discovered = predecessors.len(), "no ladder exists");
        SearchReport {
            ladder: Ladder::empty(),
            expanded,
            discovered: predecessors.len(),
            budget_exhausted: false,
        }
    }

    /// Run independent queries in parallel against the same lexicon.
    ///
    /// Reports come back in the order of `pairs`.
    pub fn run_many<S>(&self, pairs: &[(S, S)]) -> Vec<SearchReport>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(start, end)| self.run(start.as_ref(), end.as_ref()))
            .collect()
    }
}

/// Find a shortest ladder from `start` to `end` with no expansion budget.
///
/// Returns an empty ladder when no ladder is needed or possible.
pub fn find_shortest_ladder(lexicon: &Lexicon, start: &str, end: &str) -> Ladder {
    LadderSearch::new(lexicon).run(start, end).ladder
}

fn reconstruct(predecessors: &HashMap<&str, Option<&str>>, end: &str) -> Ladder {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(&Some(previous)) = predecessors.get(current) {
        path.push(previous.to_string());
        current = previous;
    }
    path.reverse();
    Ladder::from(path)
}
