//! Applications built on the path algorithms
//!
//! - [`CriticalPath`]: parallel job scheduling with precedence constraints,
//!   solved as longest paths in a DAG
//! - [`Arbitrage`]: currency exchange cycles that multiply a stake, found as
//!   negative cycles under `-ln(rate)` weights
//!
//! # Example
//!
//! ```
//! use classic_graph::{CriticalPath, Job};
//!
//! // Job 0 (3 time units) must finish before jobs 1 and 2 start
//! let schedule = CriticalPath::new(&[
//!     Job::new(3.0, vec![1, 2]),
//!     Job::new(2.0, vec![]),
//!     Job::new(4.0, vec![]),
//! ])
//! .unwrap();
//!
//! assert_eq!(schedule.start(2), 3.0);
//! assert_eq!(schedule.finish_time(), 7.0);
//! assert_eq!(schedule.critical_jobs(), vec![0, 2]);
//! ```

use super::bellman_ford::BellmanFord;
use super::shortest_path::{AcyclicPaths, ShortestPaths};
use super::topo::DirectedCycle;
use crate::error::{GraphError, Result};
use crate::storage::text::Tokens;
use crate::storage::{DirectedEdge, EdgeWeightedDigraph};
use tracing::debug;

#[cfg(feature = "io")]
use crate::storage::text::load;
#[cfg(feature = "io")]
use std::path::Path;

/// A job: how long it runs and which jobs may only start after it ends
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    duration: f64,
    successors: Vec<usize>,
}

impl Job {
    /// Create a job
    #[must_use]
    pub const fn new(duration: f64, successors: Vec<usize>) -> Self {
        Self {
            duration,
            successors,
        }
    }

    /// Processing time
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Jobs that must wait for this one
    #[must_use]
    pub fn successors(&self) -> &[usize] {
        &self.successors
    }
}

/// Earliest start times for jobs run in parallel on unlimited workers
///
/// Job `j` becomes the edge `j → j + N` weighted by its duration. A global
/// start vertex `2N` feeds every job start and every job end feeds the
/// finish vertex `2N + 1`; each precedence constraint is a zero-weight edge
/// from a job's end to its successor's start. Longest distances from the
/// start vertex are the earliest feasible start times.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPath {
    num_jobs: usize,
    durations: Vec<f64>,
    paths: AcyclicPaths,
}

impl CriticalPath {
    /// Schedule `jobs`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for a negative or non-finite
    /// duration, [`GraphError::VertexOutOfBounds`] for a successor that is
    /// not a job, and [`GraphError::CyclicPrecedence`] when the constraints
    /// contain a cycle.
    pub fn new(jobs: &[Job]) -> Result<Self> {
        let num_jobs = jobs.len();
        let start = 2 * num_jobs;
        let finish = start + 1;

        let mut edges = Vec::new();
        for (job, spec) in jobs.iter().enumerate() {
            if !spec.duration.is_finite() || spec.duration < 0.0 {
                return Err(GraphError::Malformed(format!(
                    "job {job} has invalid duration {}",
                    spec.duration
                )));
            }
            edges.push((job, job + num_jobs, spec.duration));
            edges.push((start, job, 0.0));
            edges.push((job + num_jobs, finish, 0.0));
            for &successor in &spec.successors {
                if successor >= num_jobs {
                    return Err(GraphError::VertexOutOfBounds {
                        vertex: successor,
                        num_vertices: num_jobs,
                    });
                }
                edges.push((job + num_jobs, successor, 0.0));
            }
        }
        let network = EdgeWeightedDigraph::from_edges(finish + 1, &edges)?;

        if let Some(&vertex) = DirectedCycle::new(&network).cycle().and_then(<[_]>::first) {
            return Err(GraphError::CyclicPrecedence(vertex % num_jobs.max(1)));
        }

        let paths = AcyclicPaths::longest(&network, start)?;
        debug!(
            num_jobs,
            finish_time = paths.distance_to(finish),
            "Job schedule computed"
        );

        Ok(Self {
            num_jobs,
            durations: jobs.iter().map(Job::duration).collect(),
            paths,
        })
    }

    /// Parse one line with the job count, then one line per job: its
    /// duration followed by the indices of its successors
    ///
    /// ```text
    /// 3
    /// 3.0 1 2
    /// 2.0
    /// 4.0
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing lines or unparsable
    /// fields, plus every error of [`CriticalPath::new`].
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().unwrap_or_default();
        let num_jobs: usize = Tokens::new(header).next("job count")?;

        let mut jobs = Vec::with_capacity(num_jobs);
        for job in 0..num_jobs {
            let line = lines.next().ok_or_else(|| {
                GraphError::Malformed(format!("expected {num_jobs} jobs, found {job}"))
            })?;
            let mut fields = Tokens::new(line);
            let duration = fields.next("job duration")?;
            let successors = line
                .split_whitespace()
                .skip(1)
                .map(|field| {
                    field.parse().map_err(|_| {
                        GraphError::Malformed(format!(
                            "job {job}: expected successor index, found {field:?}"
                        ))
                    })
                })
                .collect::<Result<_>>()?;
            jobs.push(Job::new(duration, successors));
        }

        Self::new(&jobs)
    }

    /// Load a job file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }

    /// Number of jobs
    #[must_use]
    pub const fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Earliest start time of `job`
    ///
    /// # Panics
    ///
    /// Panics if `job` is out of bounds.
    #[must_use]
    pub fn start(&self, job: usize) -> f64 {
        assert!(job < self.num_jobs, "job {job} out of bounds");
        self.paths.distance_to(job)
    }

    /// Earliest finish time of `job`
    ///
    /// # Panics
    ///
    /// Panics if `job` is out of bounds.
    #[must_use]
    pub fn finish(&self, job: usize) -> f64 {
        self.start(job) + self.durations[job]
    }

    /// Time at which every job has finished (0 for no jobs)
    #[must_use]
    pub fn finish_time(&self) -> f64 {
        self.paths.distance_to(2 * self.num_jobs + 1).max(0.0)
    }

    /// Jobs on one longest chain, in execution order
    #[must_use]
    pub fn critical_jobs(&self) -> Vec<usize> {
        self.paths
            .path_to(2 * self.num_jobs + 1)
            .unwrap_or_default()
            .iter()
            .filter(|edge| edge.from() < self.num_jobs && edge.to() == edge.from() + self.num_jobs)
            .map(DirectedEdge::from)
            .collect()
    }
}

/// One exchange in an arbitrage cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange<'a> {
    /// Currency sold
    pub from: &'a str,
    /// Currency bought
    pub to: &'a str,
    /// Units of `to` per unit of `from`
    pub rate: f64,
}

/// Search for a cycle of currency exchanges that ends with more than it
/// started
///
/// A product of rates above 1 is a sum of `-ln(rate)` below 0, so the
/// search is Bellman-Ford from the first currency over the complete
/// exchange digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Arbitrage {
    currencies: Vec<String>,
    cycle: Option<Vec<DirectedEdge>>,
}

impl Arbitrage {
    /// Look for arbitrage in a square rate table: `rates[u][v]` is the units
    /// of currency `v` bought by one unit of currency `u`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] if the table is not square over the
    /// currencies or a rate is not positive and finite.
    pub fn new(currencies: Vec<String>, rates: &[Vec<f64>]) -> Result<Self> {
        let num_currencies = currencies.len();
        if rates.len() != num_currencies {
            return Err(GraphError::Malformed(format!(
                "expected {num_currencies} rate rows, found {}",
                rates.len()
            )));
        }

        let mut edges = Vec::with_capacity(num_currencies * num_currencies);
        for (from, row) in rates.iter().enumerate() {
            if row.len() != num_currencies {
                return Err(GraphError::Malformed(format!(
                    "{}: expected {num_currencies} rates, found {}",
                    currencies[from],
                    row.len()
                )));
            }
            for (to, &rate) in row.iter().enumerate() {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(GraphError::Malformed(format!(
                        "{} -> {}: invalid rate {rate}",
                        currencies[from], currencies[to]
                    )));
                }
                edges.push((from, to, -rate.ln()));
            }
        }

        let cycle = if num_currencies == 0 {
            None
        } else {
            let market = EdgeWeightedDigraph::from_edges(num_currencies, &edges)?;
            BellmanFord::new(&market, 0)?
                .negative_cycle()
                .map(<[DirectedEdge]>::to_vec)
        };

        let arbitrage = Self { currencies, cycle };
        if let Some(gain) = arbitrage.gain() {
            debug!(gain, "Arbitrage opportunity found");
        }
        Ok(arbitrage)
    }

    /// Parse a currency count, then per currency its name and its row of rates
    ///
    /// ```text
    /// 2
    /// USD 1     0.741
    /// EUR 1.349 1
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing or non-numeric tokens,
    /// plus every error of [`Arbitrage::new`].
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let num_currencies: usize = tokens.next("currency count")?;

        let mut currencies = Vec::with_capacity(num_currencies);
        let mut rates = Vec::with_capacity(num_currencies);
        for _ in 0..num_currencies {
            currencies.push(tokens.next("currency name")?);
            let row = (0..num_currencies)
                .map(|_| tokens.next("exchange rate"))
                .collect::<Result<Vec<f64>>>()?;
            rates.push(row);
        }

        Self::new(currencies, &rates)
    }

    /// Load a rate table file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }

    /// True if some cycle of exchanges is profitable
    #[must_use]
    pub const fn has_opportunity(&self) -> bool {
        self.cycle.is_some()
    }

    /// The profitable cycle, starting and ending with the same currency
    #[must_use]
    pub fn cycle(&self) -> Option<Vec<Exchange<'_>>> {
        self.cycle.as_ref().map(|edges| {
            edges
                .iter()
                .map(|edge| Exchange {
                    from: &self.currencies[edge.from()],
                    to: &self.currencies[edge.to()],
                    rate: (-edge.weight()).exp(),
                })
                .collect()
        })
    }

    /// Factor by which one trip around the cycle multiplies a stake
    #[must_use]
    pub fn gain(&self) -> Option<f64> {
        self.cycle.as_ref().map(|edges| {
            let weight: f64 = edges.iter().map(DirectedEdge::weight).sum();
            (-weight).exp()
        })
    }
}
