use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

pub const SOURCE_TAG: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Up, down, left and right. No diagonals; steps past the `i64` range are dropped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        const STEPS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        STEPS.into_iter().filter_map(move |(dx, dy)| {
            Some(Coord::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Source,
    Sink(char),
    Pipe(char),
}

impl CellKind {
    pub fn from_tag(tag: char) -> Self {
        if tag == SOURCE_TAG {
            CellKind::Source
        } else if tag.is_alphabetic() {
            CellKind::Sink(tag)
        } else {
            CellKind::Pipe(tag)
        }
    }
}

/// Sparse map of passable cells. The source is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<Coord, char>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tag previously stored at `coord`, if any.
    pub fn insert(&mut self, coord: Coord, tag: char) -> Option<char> {
        self.cells.insert(coord, tag)
    }

    pub fn tag_at(&self, coord: Coord) -> Option<char> {
        self.cells.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(Coord, char)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Coord, char)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Everything the loader extracts from one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub grid: Grid,
    pub source: Coord,
    pub sinks: HashMap<char, Coord>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachResult {
    pub source: Coord,
    #[serde(serialize_with = "serialize_labels")]
    pub connected: BTreeSet<char>,
    #[serde(serialize_with = "serialize_labels")]
    pub unreachable: BTreeSet<char>,
}

impl ReachResult {
    pub fn from_search(layout: &GridLayout, connected: BTreeSet<char>) -> Self {
        let unreachable = layout
            .sinks
            .keys()
            .filter(|label| !connected.contains(*label))
            .copied()
            .collect();

        Self {
            source: layout.source,
            connected,
            unreachable,
        }
    }

    /// Connected labels in character-code order, no separators.
    pub fn labels(&self) -> String {
        self.connected.iter().collect()
    }
}

fn serialize_labels<S>(labels: &BTreeSet<char>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&labels.iter().collect::<String>())
}
