use crate::domain::model::{CellKind, Coord, Grid};
use std::collections::{BTreeSet, HashSet, VecDeque};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells dequeued, the source included.
    pub visited: usize,
    pub sinks_found: usize,
}

/// Breadth-first walk from `source` over 4-connected grid cells.
///
/// The source is a connectivity root only: it is not a grid key and never
/// contributes a label, even if a later record reused its coordinate.
pub fn reachable_sinks(grid: &Grid, source: Coord) -> BTreeSet<char> {
    search(grid, source).0
}

pub fn search(grid: &Grid, source: Coord) -> (BTreeSet<char>, SearchStats) {
    let mut visited: HashSet<Coord> = HashSet::from([source]);
    let mut queue: VecDeque<Coord> = VecDeque::from([source]);
    let mut connected = BTreeSet::new();

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            let Some(tag) = grid.tag_at(next) else {
                continue;
            };
            if !visited.insert(next) {
                continue;
            }
            queue.push_back(next);
            if let CellKind::Sink(label) = CellKind::from_tag(tag) {
                connected.insert(label);
            }
        }
    }

    let stats = SearchStats {
        visited: visited.len(),
        sinks_found: connected.len(),
    };
    (connected, stats)
}
