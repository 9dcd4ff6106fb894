//! Runs every strategy over both dimensions for one pair of cities and
//! summarizes the outcome.

use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Serialize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{AlgorithmKind, PathResult};
use crate::engine::RouteEngine;
use crate::graph::Dimension;
use crate::Result;

/// Totals of both dimensions along one path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub cost: f64,
    pub time: f64,
}

/// What a single strategy produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Found(PathResult),
    NotFound,
    /// The strategy returned an error, a malformed result, or panicked
    Failed { message: String },
}

impl RunOutcome {
    pub fn result(&self) -> Option<&PathResult> {
        match self {
            RunOutcome::Found(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// One timed invocation inside a comparison
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: AlgorithmKind,
    pub name: &'static str,
    pub dimension: Dimension,
    pub outcome: RunOutcome,
    pub elapsed_ms: f64,
    /// Answered from the result cache
    pub cached: bool,
    /// Both totals of the returned path
    pub metrics: Option<RouteMetrics>,
}

/// Lowest-cost result among the runs of one dimension
#[derive(Debug, Clone, Serialize)]
pub struct BestRoute {
    pub algorithm: AlgorithmKind,
    pub dimension: Dimension,
    pub result: PathResult,
    pub metrics: Option<RouteMetrics>,
}

/// Full comparison of all strategies for one pair of cities
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub id: Uuid,
    pub start: String,
    pub end: String,
    pub runs: Vec<AlgorithmRun>,
    pub best_cost: Option<BestRoute>,
    pub best_time: Option<BestRoute>,
    pub total_elapsed_ms: f64,
    pub computed_at: DateTime<Utc>,
}

impl Comparison {
    /// Runs of one dimension, in enumeration order
    pub fn runs_for(&self, dimension: Dimension) -> impl Iterator<Item = &AlgorithmRun> + '_ {
        self.runs.iter().filter(move |run| run.dimension == dimension)
    }

    pub fn run(&self, algorithm: AlgorithmKind, dimension: Dimension) -> Option<&AlgorithmRun> {
        self.runs
            .iter()
            .find(|run| run.algorithm == algorithm && run.dimension == dimension)
    }

    pub fn best(&self, dimension: Dimension) -> Option<&BestRoute> {
        match dimension {
            Dimension::Cost => self.best_cost.as_ref(),
            Dimension::Time => self.best_time.as_ref(),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &AlgorithmRun> + '_ {
        self.runs.iter().filter(|run| run.outcome.is_failed())
    }
}

/// Answer of [`RouteEngine::compare_all`]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CompareOutcome {
    /// Both cities exist but no route connects them; nothing was run
    Unreachable { start: String, end: String },
    Compared(Comparison),
}

impl RouteEngine {
    /// Runs all nine strategies for both dimensions between two cities.
    ///
    /// Unknown cities are an error. An unreachable pair short-circuits to
    /// [`CompareOutcome::Unreachable`] after a plain reachability check. A
    /// strategy that fails or panics is recorded as [`RunOutcome::Failed`]
    /// and the batch carries on.
    pub fn compare_all(&mut self, start: &str, end: &str) -> Result<CompareOutcome> {
        let (start, end) = self.resolve(start, end)?;
        if !self.is_reachable(&start, &end)? {
            info!("No route between {} and {}, skipping comparison", start, end);
            return Ok(CompareOutcome::Unreachable { start, end });
        }

        let batch_started = Instant::now();
        let mut runs = Vec::with_capacity(Dimension::ALL.len() * AlgorithmKind::ALL.len());
        for dimension in Dimension::ALL {
            for algorithm in AlgorithmKind::ALL {
                runs.push(self.timed_run(algorithm, &start, &end, dimension));
            }
        }
        let total_elapsed_ms = batch_started.elapsed().as_secs_f64() * 1000.0;

        let best_cost = best_route(&runs, Dimension::Cost);
        let best_time = best_route(&runs, Dimension::Time);
        info!(
            "Compared {} runs for {} -> {} in {:.3} ms",
            runs.len(),
            start,
            end,
            total_elapsed_ms
        );

        Ok(CompareOutcome::Compared(Comparison {
            id: Uuid::new_v4(),
            start,
            end,
            runs,
            best_cost,
            best_time,
            total_elapsed_ms,
            computed_at: Utc::now(),
        }))
    }

    fn timed_run(&mut self, algorithm: AlgorithmKind, start: &str, end: &str, dimension: Dimension) -> AlgorithmRun {
        let started = Instant::now();
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_cached(algorithm, start, end, dimension)
        }));
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        let (outcome, cached) = match attempt {
            Ok(Ok((Some(result), cached))) => (RunOutcome::Found(result), cached),
            Ok(Ok((None, cached))) => (RunOutcome::NotFound, cached),
            Ok(Err(err)) => {
                error!("{} ({}) failed: {}", algorithm, dimension, err);
                (RunOutcome::Failed { message: err.to_string() }, false)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("{} ({}) panicked: {}", algorithm, dimension, message);
                (RunOutcome::Failed { message }, false)
            }
        };
        let metrics = outcome
            .result()
            .and_then(|result| self.route_metrics(&result.path));

        AlgorithmRun {
            algorithm,
            name: algorithm.name(),
            dimension,
            outcome,
            elapsed_ms,
            cached,
            metrics,
        }
    }
}

/// First run with the strictly lowest cost wins
fn best_route(runs: &[AlgorithmRun], dimension: Dimension) -> Option<BestRoute> {
    let mut best: Option<&AlgorithmRun> = None;
    for run in runs.iter().filter(|run| run.dimension == dimension) {
        let Some(result) = run.outcome.result() else {
            continue;
        };
        let better = best
            .and_then(|current| current.outcome.result())
            .map_or(true, |current| result.cost < current.cost);
        if better {
            best = Some(run);
        }
    }

    let run = best?;
    Some(BestRoute {
        algorithm: run.algorithm,
        dimension,
        result: run.outcome.result()?.clone(),
        metrics: run.metrics,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
