//! Console output: coverage map, run summary and step trace.

use std::fmt::Write;

use tether_core::{CellKind, CellPos, Environment};
use tether_engine::{RunReport, StepRecord};
use tether_graph::ExplorationGraph;

/// Glyph for a discovered node that was never visited.
pub const UNVISITED: char = '?';
/// Glyph for a free cell the graph never reached.
pub const UNDISCOVERED: char = '~';

/// One line per row: `S` station, `#` obstacle, `.` visited, `?`
/// discovered but unvisited, `~` never discovered.
pub fn render_map(env: &dyn Environment, graph: &ExplorationGraph) -> String {
    let mut out = String::new();
    for row in 0..env.height() as i32 {
        for col in 0..env.width() as i32 {
            let pos = CellPos::new(row, col);
            let glyph = match env.classify(pos) {
                Some(CellKind::Empty) => match graph.node(pos) {
                    Some(n) if n.is_visited() => CellKind::Empty.glyph(),
                    Some(_) => UNVISITED,
                    None => UNDISCOVERED,
                },
                Some(kind) => kind.glyph(),
                None => UNDISCOVERED,
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Multi-line run summary.
pub fn render_summary(report: &RunReport, graph: &ExplorationGraph) -> String {
    let m = &report.metrics;
    let mut out = String::new();
    let _ = writeln!(out, "rounds:      {} of {}", m.rounds_run, m.round_cap);
    let _ = writeln!(out, "excursions:  {}", m.excursions);
    let _ = writeln!(
        out,
        "steps:       {} (travel {}, forward {}, backtrack {})",
        m.counters.steps(),
        m.counters.travel,
        m.counters.forward,
        m.counters.backtrack
    );
    let _ = writeln!(
        out,
        "nodes:       {} ({} visited, {} unvisited)",
        graph.len(),
        graph.visited_count(),
        graph.unvisited_count()
    );
    let _ = writeln!(out, "elapsed:     {} us", m.elapsed_us);
    out
}

/// Per-round table: round, contour, excursions, roots harvested.
pub fn render_rounds(report: &RunReport) -> String {
    let mut out = String::from("round  Dcurr  Dcurr_  Dnext  excursions  roots\n");
    for r in &report.rounds {
        let _ = writeln!(
            out,
            "{:>5}  {:>5}  {:>6}  {:>5}  {:>10}  {:>5}",
            r.bounds.round,
            r.bounds.d_curr,
            r.bounds.d_curr_max,
            r.bounds.d_next,
            r.excursions.len(),
            r.roots_after.len()
        );
    }
    out
}

/// One line per recorded step.
pub fn render_trace(trace: &[StepRecord]) -> String {
    let mut out = String::new();
    for step in trace {
        let _ = write!(
            out,
            "r{:<3} {:<9} {} -> {}  d={}",
            step.round, step.kind, step.from, step.to, step.distance
        );
        if let Some(budget) = step.budget {
            let _ = write!(out, "  budget={budget}");
        }
        out.push('\n');
    }
    out
}
