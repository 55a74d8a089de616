use crate::error::{ConfigError, Result};
use crate::geometry::Point;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// A scheduled click: spawn a block at `position` right before `tick` runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnEvent {
    pub tick: u64,
    pub position: Point,
}

/// Parse a spawn script from a file path.
///
/// One event per line, `<tick> <x> <y>`; blank lines and `#` comments are
/// skipped. Events come back ordered by tick, file order within a tick.
pub fn parse_script(path: &str) -> Result<Vec<SpawnEvent>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(event) = parse_line(n + 1, &line)? {
            events.push(event);
        }
    }
    events.sort_by_key(|e| e.tick);
    Ok(events)
}

/// Parse a spawn script directly from an in-memory string
pub fn parse_script_from_str(src: &str) -> Result<Vec<SpawnEvent>> {
    let mut events = Vec::new();
    for (n, line) in src.lines().enumerate() {
        if let Some(event) = parse_line(n + 1, line)? {
            events.push(event);
        }
    }
    events.sort_by_key(|e| e.tick);
    Ok(events)
}

fn parse_line(line_no: usize, raw: &str) -> Result<Option<SpawnEvent>> {
    let line = match raw.split_once('#') {
        Some((content, _)) => content,
        None => raw,
    }
    .trim();
    if line.is_empty() {
        return Ok(None);
    }

    let invalid = |why: &str| ConfigError::InvalidLine(format!("{}: {} ({:?})", line_no, why, raw));
    let mut parts = line.split_whitespace();
    let mut field = |name: &str| parts.next().ok_or_else(|| invalid(&format!("missing {}", name)));

    let tick = field("tick")?;
    let x = field("x")?;
    let y = field("y")?;
    if parts.next().is_some() {
        return Err(invalid("trailing fields"));
    }

    let tick = tick.parse().map_err(|_| invalid("bad tick"))?;
    let x = x.parse().map_err(|_| invalid("bad x"))?;
    let y = y.parse().map_err(|_| invalid("bad y"))?;
    Ok(Some(SpawnEvent {
        tick,
        position: Point::new(x, y),
    }))
}
