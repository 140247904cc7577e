//! Budget-bounded excursions: travel, contour cover, depth-first walk.
//!
//! One excursion is:
//!
//! 1. choose the closest-leftmost unvisited node inside the active
//!    contour (the *target*);
//! 2. choose the launch root with the shortest tree path to the target;
//! 3. travel station → root → target along tree paths;
//! 4. walk depth-first from the target with budget `B − d(target)`,
//!    discovering new cells and visiting contour cells;
//! 5. travel back to the station.
//!
//! Every movement goes through one checked step, so the agent only ever
//! moves between 4-adjacent cells.

use std::error::Error;
use std::fmt;

use log::{debug, trace};
use smallvec::SmallVec;
use tether_core::{CellPos, Environment, GraphError, SelectionError};
use tether_graph::{ExplorationGraph, FrontierEntry};

use crate::context::{ExcursionContext, StepCounters, StepKind, StepRecord};
use crate::select::{closest_leftmost, closest_root};

// ── Errors ─────────────────────────────────────────────────────

/// Errors raised during a single excursion.
///
/// All of these indicate a broken invariant in the planner rather than a
/// recoverable condition; the session aborts the run on the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExcursionError {
    /// Two consecutive path positions are not 4-adjacent.
    NonAdjacentStep {
        /// Cell the agent was on.
        from: CellPos,
        /// Cell it was asked to enter.
        to: CellPos,
    },
    /// A travel path does not start at the agent's position.
    PathStartMismatch {
        /// The agent's position.
        expected: CellPos,
        /// The first element of the path.
        found: CellPos,
    },
    /// A travel path had no elements.
    EmptyPath,
    /// The chosen target lies further from the station than the budget.
    TargetBeyondBudget {
        /// The selected target.
        target: CellPos,
        /// Its discovery distance.
        distance: u32,
        /// The total budget.
        budget: u32,
    },
    /// Target or root selection failed.
    Selection(SelectionError),
    /// A graph operation failed.
    Graph(GraphError),
}

impl fmt::Display for ExcursionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAdjacentStep { from, to } => {
                write!(f, "step from {from} to {to} is not between adjacent cells")
            }
            Self::PathStartMismatch { expected, found } => {
                write!(f, "path starts at {found} but the agent is at {expected}")
            }
            Self::EmptyPath => write!(f, "travel path is empty"),
            Self::TargetBeyondBudget {
                target,
                distance,
                budget,
            } => write!(
                f,
                "target {target} at distance {distance} exceeds budget {budget}"
            ),
            Self::Selection(e) => write!(f, "selection failed: {e}"),
            Self::Graph(e) => write!(f, "graph error: {e}"),
        }
    }
}

impl Error for ExcursionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Selection(e) => Some(e),
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SelectionError> for ExcursionError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

impl From<GraphError> for ExcursionError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

// ── Report ─────────────────────────────────────────────────────

/// Summary of one completed excursion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcursionReport {
    /// Round the excursion ran in.
    pub round: u32,
    /// Frontier node the excursion was launched at.
    pub target: FrontierEntry,
    /// Launch root used to reach the target.
    pub root: CellPos,
    /// Steps and discoveries attributable to this excursion.
    pub counters: StepCounters,
}

// ── Explorer ───────────────────────────────────────────────────

/// One pending depth-first frame.
///
/// `budget` is local to the frame: it is charged one unit when the frame
/// steps forward into a child and one more when the agent backtracks to
/// it. Children inherit the value after the forward charge.
struct Frame {
    node: CellPos,
    distance: u32,
    budget: u32,
    neighbours: SmallVec<[CellPos; 4]>,
    next: usize,
}

/// Executes excursions against a graph and an environment.
///
/// Holds only borrows; all per-run state lives in [`ExcursionContext`].
pub struct CoverageExplorer<'a> {
    environment: &'a dyn Environment,
    graph: &'a mut ExplorationGraph,
}

impl<'a> CoverageExplorer<'a> {
    /// Borrow an environment and the graph being grown over it.
    pub fn new(environment: &'a dyn Environment, graph: &'a mut ExplorationGraph) -> Self {
        Self { environment, graph }
    }

    /// The graph being explored.
    pub fn graph(&self) -> &ExplorationGraph {
        self.graph
    }

    /// Discover the free neighbours of `pos` that are not yet nodes.
    ///
    /// New nodes get distance `d(pos) + 1`, are unvisited and hang off
    /// `pos`. Returns how many nodes were added.
    pub fn discover_around(
        &mut self,
        ctx: &mut ExcursionContext,
        pos: CellPos,
    ) -> Result<usize, ExcursionError> {
        let distance = self.graph.distance_of(pos)?;
        let mut added = 0;
        for nb in self.environment.free_neighbours(pos) {
            if !self.graph.contains(nb) {
                self.graph.add_node(nb, distance + 1, false, pos)?;
                ctx.counters.discovered += 1;
                added += 1;
            }
        }
        Ok(added)
    }

    /// Move the agent along `path`, marking unvisited nodes visited.
    ///
    /// `path[0]` must be the agent's position. Every consecutive pair must
    /// be 4-adjacent and every element must already be a node.
    pub fn travel(
        &mut self,
        ctx: &mut ExcursionContext,
        path: &[CellPos],
    ) -> Result<(), ExcursionError> {
        let Some((&first, rest)) = path.split_first() else {
            return Err(ExcursionError::EmptyPath);
        };
        if first != ctx.position {
            return Err(ExcursionError::PathStartMismatch {
                expected: ctx.position,
                found: first,
            });
        }
        for &to in rest {
            self.step(ctx, to, StepKind::Travel, None)?;
        }
        Ok(())
    }

    /// Run one excursion from the station into the active contour.
    ///
    /// The agent must be at the station on entry and is back there on
    /// success.
    ///
    /// # Errors
    ///
    /// [`SelectionError::EmptyFrontier`] (wrapped) if the contour holds
    /// no unvisited node, [`SelectionError::NoRoot`] if `roots` is empty,
    /// plus any travel or graph failure.
    pub fn cover(
        &mut self,
        ctx: &mut ExcursionContext,
        roots: &[CellPos],
    ) -> Result<ExcursionReport, ExcursionError> {
        let contour = ctx.contour();
        let frontier: Vec<FrontierEntry> = self
            .graph
            .unvisited_nodes()
            .into_iter()
            .filter(|e| contour.contains(e.distance))
            .collect();
        let target = closest_leftmost(&frontier)?;
        let (root, root_path) = closest_root(self.graph, target.pos, roots)?;
        debug!(
            "round {}: excursion to {} (d={}) via root {}",
            ctx.round(),
            target.pos,
            target.distance,
            root
        );

        let before = ctx.counters;
        let station = self.graph.station();

        let to_root = self.graph.shortest_path(station, root)?;
        self.travel(ctx, &to_root)?;
        self.travel(ctx, &root_path)?;

        let remaining = ctx.budget().checked_sub(target.distance).ok_or(
            ExcursionError::TargetBeyondBudget {
                target: target.pos,
                distance: target.distance,
                budget: ctx.budget(),
            },
        )?;
        self.depth_first_explore(ctx, target.pos, remaining)?;

        let home = self.graph.shortest_path(ctx.position, station)?;
        self.travel(ctx, &home)?;

        let counters = ctx.counters.since(&before);
        debug!(
            "round {}: excursion done, {} steps, {} discovered, {} visited",
            ctx.round(),
            counters.steps(),
            counters.discovered,
            counters.visited
        );
        Ok(ExcursionReport {
            round: ctx.round(),
            target,
            root,
            counters,
        })
    }

    /// Depth-first walk from `start` with a local budget.
    ///
    /// For each free neighbour of the current cell, in probe order:
    /// discover it if it is new, then step into it only if it is
    /// unvisited, its recorded distance is within the frame budget and
    /// inside the active contour. Entering a cell charges the frame one
    /// unit, the child explores with what is left, and the step back
    /// charges the frame again. The agent ends on `start`.
    ///
    /// Uses an explicit frame stack, so deep corridors do not grow the
    /// call stack.
    pub fn depth_first_explore(
        &mut self,
        ctx: &mut ExcursionContext,
        start: CellPos,
        budget: u32,
    ) -> Result<(), ExcursionError> {
        if ctx.position != start {
            return Err(ExcursionError::PathStartMismatch {
                expected: ctx.position,
                found: start,
            });
        }
        let contour = ctx.contour();
        let mut stack = vec![Frame {
            node: start,
            distance: self.graph.distance_of(start)?,
            budget,
            neighbours: self.environment.free_neighbours(start),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.neighbours.len() {
                let node = frame.node;
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    // Distances are >= 1 off the station, so a budget that
                    // would go negative rejects the same neighbours as 0.
                    parent.budget = parent.budget.saturating_sub(1);
                    let (to, budget) = (parent.node, parent.budget);
                    trace!("backtrack {node} -> {to}");
                    self.step(ctx, to, StepKind::Backtrack, Some(budget))?;
                }
                continue;
            }

            let nb = frame.neighbours[frame.next];
            frame.next += 1;
            let (node, node_distance, frame_budget) = (frame.node, frame.distance, frame.budget);

            if !self.graph.contains(nb) {
                self.graph.add_node(nb, node_distance + 1, false, node)?;
                ctx.counters.discovered += 1;
                trace!("discovered {nb} at d={}", node_distance + 1);
            }
            let record = self
                .graph
                .node(nb)
                .ok_or(GraphError::UnknownNode { pos: nb })?;
            let (visited, distance) = (record.is_visited(), record.distance());
            if visited || distance > frame_budget || !contour.contains(distance) {
                continue;
            }

            debug_assert!(distance <= frame_budget);
            self.step(ctx, nb, StepKind::Forward, Some(frame_budget))?;
            frame.budget = frame_budget - 1;
            let child_budget = frame.budget;
            stack.push(Frame {
                node: nb,
                distance,
                budget: child_budget,
                neighbours: self.environment.free_neighbours(nb),
                next: 0,
            });
        }
        Ok(())
    }

    /// One checked move to an adjacent node.
    fn step(
        &mut self,
        ctx: &mut ExcursionContext,
        to: CellPos,
        kind: StepKind,
        budget: Option<u32>,
    ) -> Result<(), ExcursionError> {
        let from = ctx.position;
        if !from.is_adjacent(to) {
            return Err(ExcursionError::NonAdjacentStep { from, to });
        }
        let record = self
            .graph
            .node(to)
            .ok_or(GraphError::UnknownNode { pos: to })?;
        let (visited, distance) = (record.is_visited(), record.distance());
        if !visited {
            self.graph.mark_visited(to)?;
            ctx.counters.visited += 1;
        }
        ctx.position = to;
        match kind {
            StepKind::Travel => ctx.counters.travel += 1,
            StepKind::Forward => ctx.counters.forward += 1,
            StepKind::Backtrack => ctx.counters.backtrack += 1,
        }
        let round = ctx.round();
        ctx.record(StepRecord {
            round,
            from,
            to,
            kind,
            distance,
            budget,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RoundBounds;
    use tether_space::GridEnvironment;

    fn p(r: i32, c: i32) -> CellPos {
        CellPos::new(r, c)
    }

    fn open(width: u32, height: u32) -> GridEnvironment {
        GridEnvironment::new(width, height, p(0, 0), &[]).unwrap()
    }

    fn bounds(min: u32, max: u32) -> RoundBounds {
        RoundBounds {
            round: 1,
            d_curr: min,
            d_next: min,
            b_curr: 0,
            b_curr_max: 0,
            d_curr_max: max,
        }
    }

    fn seeded(env: &GridEnvironment, budget: u32) -> (ExplorationGraph, ExcursionContext) {
        let mut graph = ExplorationGraph::new(env.station());
        let mut ctx = ExcursionContext::new(env.station(), budget, true);
        CoverageExplorer::new(env, &mut graph)
            .discover_around(&mut ctx, env.station())
            .unwrap();
        (graph, ctx)
    }

    #[test]
    fn discover_around_adds_free_neighbours_once() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.distance_of(p(0, 1)), Ok(1));
        let again = CoverageExplorer::new(&env, &mut graph)
            .discover_around(&mut ctx, p(0, 0))
            .unwrap();
        assert_eq!(again, 0);
    }

    #[test]
    fn travel_rejects_wrong_start() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        let err = CoverageExplorer::new(&env, &mut graph)
            .travel(&mut ctx, &[p(0, 1), p(0, 0)])
            .unwrap_err();
        assert_eq!(
            err,
            ExcursionError::PathStartMismatch {
                expected: p(0, 0),
                found: p(0, 1),
            }
        );
    }

    #[test]
    fn travel_rejects_diagonal() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        graph.add_node(p(1, 1), 2, false, p(0, 1)).unwrap();
        let err = CoverageExplorer::new(&env, &mut graph)
            .travel(&mut ctx, &[p(0, 0), p(1, 1)])
            .unwrap_err();
        assert_eq!(
            err,
            ExcursionError::NonAdjacentStep {
                from: p(0, 0),
                to: p(1, 1),
            }
        );
        assert_eq!(ctx.position(), p(0, 0));
    }

    #[test]
    fn travel_rejects_empty_path() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        let err = CoverageExplorer::new(&env, &mut graph)
            .travel(&mut ctx, &[])
            .unwrap_err();
        assert_eq!(err, ExcursionError::EmptyPath);
    }

    #[test]
    fn travel_marks_unvisited_and_skips_visited() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        let mut ex = CoverageExplorer::new(&env, &mut graph);
        ex.travel(&mut ctx, &[p(0, 0), p(0, 1), p(0, 0)]).unwrap();
        assert_eq!(ctx.position(), p(0, 0));
        assert_eq!(ctx.counters().travel, 2);
        assert_eq!(ctx.counters().visited, 1);
        assert_eq!(graph.is_visited(p(0, 1)), Ok(true));
        assert_eq!(graph.is_visited(p(1, 0)), Ok(false));
    }

    #[test]
    fn cover_with_empty_contour_reports_empty_frontier() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        ctx.begin_round(&bounds(5, 6));
        let err = CoverageExplorer::new(&env, &mut graph)
            .cover(&mut ctx, &[p(0, 0)])
            .unwrap_err();
        assert_eq!(err, ExcursionError::Selection(SelectionError::EmptyFrontier));
    }

    #[test]
    fn cover_without_roots_reports_no_root() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 10);
        ctx.begin_round(&bounds(0, 3));
        let err = CoverageExplorer::new(&env, &mut graph)
            .cover(&mut ctx, &[])
            .unwrap_err();
        assert_eq!(
            err,
            ExcursionError::Selection(SelectionError::NoRoot { target: p(0, 1) })
        );
    }

    #[test]
    fn cover_returns_to_station() {
        let env = open(3, 3);
        let (mut graph, mut ctx) = seeded(&env, 20);
        ctx.begin_round(&bounds(0, 20));
        let report = CoverageExplorer::new(&env, &mut graph)
            .cover(&mut ctx, &[p(0, 0)])
            .unwrap();
        assert_eq!(ctx.position(), p(0, 0));
        assert_eq!(report.target.pos, p(0, 1));
        assert_eq!(report.root, p(0, 0));
        assert_eq!(report.counters.forward, report.counters.backtrack);
        assert_eq!(graph.len(), 9);
        assert_eq!(graph.unvisited_count(), 0);
    }

    #[test]
    fn dfs_respects_frame_budget() {
        let env = open(6, 1);
        let (mut graph, mut ctx) = seeded(&env, 3);
        ctx.begin_round(&bounds(0, 10));
        let mut ex = CoverageExplorer::new(&env, &mut graph);
        ex.travel(&mut ctx, &[p(0, 0), p(0, 1)]).unwrap();
        // Remaining budget 3 - 1 = 2 allows (0,2) only: entering (0,3)
        // would need distance 3 <= 1.
        ex.depth_first_explore(&mut ctx, p(0, 1), 2).unwrap();
        assert_eq!(ctx.position(), p(0, 1));
        assert_eq!(graph.is_visited(p(0, 2)), Ok(true));
        assert_eq!(graph.is_visited(p(0, 3)), Ok(false));
        assert!(!graph.contains(p(0, 4)));
    }

    #[test]
    fn dfs_forward_steps_never_exceed_budget() {
        let env = GridEnvironment::new(5, 5, p(2, 2), &[p(1, 1), p(3, 2)]).unwrap();
        let (mut graph, mut ctx) = seeded(&env, 12);
        ctx.begin_round(&bounds(0, 12));
        CoverageExplorer::new(&env, &mut graph)
            .cover(&mut ctx, &[p(2, 2)])
            .unwrap();
        for step in ctx.trace().unwrap() {
            if step.kind == StepKind::Forward {
                assert!(step.distance <= step.budget.unwrap());
            }
        }
    }

    #[test]
    fn dfs_handles_long_corridor() {
        let len = 5_000;
        let env = open(len, 1);
        let (mut graph, mut ctx) = seeded(&env, 2 * len);
        ctx.begin_round(&bounds(0, 2 * len));
        CoverageExplorer::new(&env, &mut graph)
            .cover(&mut ctx, &[p(0, 0)])
            .unwrap();
        assert_eq!(graph.len(), len as usize);
        assert_eq!(graph.unvisited_count(), 0);
    }
}
