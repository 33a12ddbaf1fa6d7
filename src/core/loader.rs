use crate::domain::model::{CellKind, Coord, Grid, GridLayout};
use crate::domain::options::{LoaderOptions, MalformedLinePolicy, SourcePolicy};
use crate::utils::error::{ReachError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    tag: char,
    coord: Coord,
}

fn parse_record(line_no: usize, line: &str) -> Result<Record> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ReachError::format(
            line_no,
            line,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }

    let mut chars = fields[0].chars();
    let tag = match (chars.next(), chars.next()) {
        (Some(tag), None) => tag,
        _ => {
            return Err(ReachError::format(
                line_no,
                line,
                format!("tag {:?} must be a single character", fields[0]),
            ))
        }
    };

    let x = parse_axis(line_no, line, "x", fields[1])?;
    let y = parse_axis(line_no, line, "y", fields[2])?;

    Ok(Record {
        tag,
        coord: Coord::new(x, y),
    })
}

fn parse_axis(line_no: usize, line: &str, axis: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| {
        ReachError::format(line_no, line, format!("{} coordinate {:?}: {}", axis, raw, e))
    })
}

/// Builds the sparse grid, the source and the sink index from `<tag> <x> <y>` records.
///
/// Later records win for duplicate coordinates and duplicate sink labels. A second
/// `*` record replaces the source unless [`SourcePolicy::Strict`] is set. The source
/// is checked only after every record has been read, so a file without one fails
/// with [`ReachError::MissingSourceError`] before any search can start.
pub fn parse_layout(input: &str, options: &LoaderOptions) -> Result<GridLayout> {
    let mut grid = Grid::new();
    let mut source: Option<Coord> = None;
    let mut sinks: HashMap<char, Coord> = HashMap::new();
    let mut skipped = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;

        let record = match parse_record(line_no, line) {
            Ok(record) => record,
            Err(e) if options.malformed_lines == MalformedLinePolicy::Skip => {
                tracing::warn!("⚠️ Skipping line {}: {}", line_no, e);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match CellKind::from_tag(record.tag) {
            CellKind::Source => {
                if let Some(first) = source {
                    if options.source_policy == SourcePolicy::Strict {
                        return Err(ReachError::DuplicateSourceError {
                            first,
                            second: record.coord,
                            line: line_no,
                        });
                    }
                    tracing::debug!(
                        "Source moved from {} to {} on line {}",
                        first,
                        record.coord,
                        line_no
                    );
                }
                source = Some(record.coord);
            }
            CellKind::Sink(label) => {
                grid.insert(record.coord, label);
                if let Some(previous) = sinks.insert(label, record.coord) {
                    tracing::debug!("Sink {} re-declared, {} replaced by {}", label, previous, record.coord);
                }
            }
            CellKind::Pipe(tag) => {
                grid.insert(record.coord, tag);
            }
        }
    }

    let source = source.ok_or(ReachError::MissingSourceError)?;

    tracing::debug!(
        "Loaded {} passable cells, {} sinks, source at {}",
        grid.len(),
        sinks.len(),
        source
    );

    Ok(GridLayout {
        grid,
        source,
        sinks,
        skipped,
    })
}
