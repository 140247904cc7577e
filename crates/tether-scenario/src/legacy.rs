//! The three-line text scenario format.
//!
//! ```text
//! (0, 0)
//! [4, 5, 4, (2,1), (3,1), (2,2), (3,2)]
//! 20
//! ```
//!
//! Line 1 is the station as `(row, col)`. Line 2 is a bracketed list
//! `width, height, count` followed by the obstacle positions. The listed
//! positions are authoritative; a `count` that disagrees is only logged.
//! Line 3 is the energy budget. Blank lines after the third are ignored.

use log::warn;

use crate::error::ScenarioError;
use crate::scenario::{Scenario, ScheduleSection};

/// Parse a legacy text scenario.
///
/// # Errors
///
/// [`ScenarioError::Legacy`] naming the first malformed line.
pub fn parse(text: &str) -> Result<Scenario, ScenarioError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let station = parse_pair(line(&lines, 1)?).map_err(|reason| err(1, reason))?;

    let map = line(&lines, 2)?;
    let inner = map
        .strip_prefix('[')
        .and_then(|m| m.strip_suffix(']'))
        .ok_or_else(|| err(2, "map line must be enclosed in [ ]"))?;
    let items = split_top_level(inner);
    if items.len() < 3 {
        return Err(err(2, "map line needs width, height and obstacle count"));
    }
    let width = parse_u32(items[0], "width").map_err(|r| err(2, r))?;
    let height = parse_u32(items[1], "height").map_err(|r| err(2, r))?;
    let count = parse_u32(items[2], "obstacle count").map_err(|r| err(2, r))?;
    let obstacles = items[3..]
        .iter()
        .map(|item| parse_pair(item))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|r| err(2, r))?;
    if obstacles.len() != count as usize {
        warn!(
            "legacy scenario line 2: declared {count} obstacles but listed {}; using the list",
            obstacles.len()
        );
    }

    let budget = parse_u32(line(&lines, 3)?, "budget").map_err(|r| err(3, r))?;
    if let Some(extra) = lines.iter().skip(3).position(|l| !l.is_empty()) {
        return Err(err(extra + 4, "unexpected content after the budget line"));
    }

    Ok(Scenario {
        width,
        height,
        budget,
        station,
        obstacles,
        schedule: ScheduleSection::default(),
    })
}

/// Render a scenario in the legacy format. The schedule is not stored.
pub fn render(scenario: &Scenario) -> String {
    let mut map = format!(
        "[{}, {}, {}",
        scenario.width,
        scenario.height,
        scenario.obstacles.len()
    );
    for [r, c] in &scenario.obstacles {
        map.push_str(&format!(", ({r},{c})"));
    }
    map.push(']');
    let [sr, sc] = scenario.station;
    format!("({sr}, {sc})\n{map}\n{}\n", scenario.budget)
}

/// The non-empty 1-based line `n`.
fn line<'a>(lines: &[&'a str], n: usize) -> Result<&'a str, ScenarioError> {
    match lines.get(n - 1) {
        Some(l) if !l.is_empty() => Ok(*l),
        _ => Err(err(n, "missing line")),
    }
}

fn err(line: usize, reason: impl Into<String>) -> ScenarioError {
    ScenarioError::Legacy {
        line,
        reason: reason.into(),
    }
}

/// Split on commas that are not inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                out.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = s[start..].trim();
    if !last.is_empty() || !out.is_empty() {
        out.push(last);
    }
    out
}

fn parse_pair(s: &str) -> Result<[i32; 2], String> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| format!("expected (row, col), got {s:?}"))?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [r, c] => {
            let r = r
                .parse::<i32>()
                .map_err(|_| format!("bad row {r:?} in {s:?}"))?;
            let c = c
                .parse::<i32>()
                .map_err(|_| format!("bad column {c:?} in {s:?}"))?;
            Ok([r, c])
        }
        _ => Err(format!("expected two coordinates in {s:?}")),
    }
}

fn parse_u32(s: &str, what: &str) -> Result<u32, String> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| format!("{what} must be a non-negative integer, got {s:?}"))
}
