//! Per-worker driver: `INIT -> WARMUP -> STEPPING(k) -> DONE`.
//!
//! [`Worker::new`] is the INIT transition. Every call to
//! [`Worker::advance`] produces exactly one new time level:
//!
//! | Phase | Work | Next |
//! |-------|------|------|
//! | `Warmup` | one halo round on `old`, upwind step, barrier, start clock | `Stepping { k: 1 }` or `Done` |
//! | `Stepping { k }` | halo round on `cur`, leapfrog `k -> k+1`, rotate | `Stepping { k: k+1 }` or `Done` |
//! | `Done` | nothing | `Done` |
//!
//! The transition into `Done` ends with a barrier so the elapsed time read
//! afterwards covers the slowest worker.

use leapfrog_comm::Communicator;
use leapfrog_core::{Problem, SchemeParams, SolverConfig};
use leapfrog_space::{partition_all, LineTopology, Links, Partition};
use tracing::{debug, warn};

use crate::error::SolverError;
use crate::halo::HaloExchange;
use crate::state::GridState;

/// Driver phase. Construction of a [`Worker`] is the INIT phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Next transition is the first-order step `t_0 -> t_1`.
    Warmup,
    /// Next transition is the leapfrog step `t_k -> t_{k+1}`.
    Stepping {
        /// Index of the current time level.
        k: usize,
    },
    /// All `K` levels are computed.
    Done,
}

/// One completed time level of one worker, as seen by a [`StepObserver`].
#[derive(Clone, Copy, Debug)]
pub struct StepView<'a> {
    /// Worker rank.
    pub rank: usize,
    /// Time-level index `k`.
    pub level: usize,
    /// `t_k`.
    pub time: f64,
    /// The worker's block.
    pub partition: Partition,
    /// Owned values at `t_k`, global indices `partition.start..partition.end()`.
    pub values: &'a [f64],
}

/// Hook invoked with every completed time level, `k = 0..=K`.
pub trait StepObserver {
    /// Inspect one level.
    fn observe(&mut self, view: &StepView<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepView<'_>),
{
    fn observe(&mut self, view: &StepView<'_>) {
        self(view)
    }
}

/// Observer that ignores every level.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn observe(&mut self, _view: &StepView<'_>) {}
}

/// Result of one worker's run.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerOutcome {
    /// Worker rank.
    pub rank: usize,
    /// The worker's block.
    pub partition: Partition,
    /// Owned values at `t_K`.
    pub values: Vec<f64>,
    /// Seconds between the post-warmup barrier and the final barrier.
    pub elapsed: f64,
}

/// One worker's solver loop.
pub struct Worker<'a, O: StepObserver + ?Sized> {
    comm: &'a mut Communicator,
    problem: &'a dyn Problem,
    observer: &'a mut O,
    params: SchemeParams,
    links: Links,
    state: GridState,
    phase: Phase,
    started: f64,
    elapsed: f64,
}

impl<'a, O: StepObserver + ?Sized> Worker<'a, O> {
    /// INIT: derive the parameters, locate this rank's block and links,
    /// allocate the levels and fill `t_0`.
    ///
    /// Rank 0 logs the Courant warning if the ratio exceeds one.
    pub fn new(
        comm: &'a mut Communicator,
        config: &SolverConfig,
        problem: &'a dyn Problem,
        observer: &'a mut O,
    ) -> Result<Self, SolverError> {
        let params = config.params()?;
        let rank = comm.rank();
        if rank == 0 {
            if let Some(warning) = params.stability() {
                warn!(lambda = warning.lambda, "{warning}");
            }
        }
        let partitions = partition_all(params.point_count(), comm.size())?;
        let links = LineTopology::new(&partitions).links(rank)?;
        let partition = partitions[rank];
        debug!(
            rank,
            start = partition.start,
            len = partition.len,
            ?links,
            "worker initialized"
        );

        let mut state = GridState::new(partition, params)?;
        state.init_initial_level(problem);
        let mut worker = Self {
            comm,
            problem,
            observer,
            params,
            links,
            state,
            phase: Phase::Warmup,
            started: 0.0,
            elapsed: 0.0,
        };
        worker.observe(0, Level::Old);
        Ok(worker)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The worker's grid state.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Compute the next time level. A no-op once `Done`.
    pub fn advance(&mut self) -> Result<Phase, SolverError> {
        match self.phase {
            Phase::Warmup => self.warmup()?,
            Phase::Stepping { k } => self.step(k)?,
            Phase::Done => {}
        }
        Ok(self.phase)
    }

    /// Advance until `Done` and return this worker's share of `t_K`.
    pub fn run(mut self) -> Result<WorkerOutcome, SolverError> {
        while self.phase != Phase::Done {
            self.advance()?;
        }
        Ok(WorkerOutcome {
            rank: self.comm.rank(),
            partition: self.state.partition(),
            values: self.state.owned_cur().to_vec(),
            elapsed: self.elapsed,
        })
    }

    fn warmup(&mut self) -> Result<(), SolverError> {
        let pending = HaloExchange::begin(self.comm, self.links, self.state.levels().old())?;
        self.state.warmup_interior(self.problem);
        pending.complete(self.comm, self.state.levels_mut().old_mut())?;
        self.state.warmup_edges(self.problem);
        self.observe(1, Level::Cur);

        self.comm.barrier()?;
        self.started = self.comm.wtime();
        self.transition(1)
    }

    fn step(&mut self, k: usize) -> Result<(), SolverError> {
        let pending = HaloExchange::begin(self.comm, self.links, self.state.levels().cur())?;
        self.state.step_interior(self.problem, k);
        pending.complete(self.comm, self.state.levels_mut().cur_mut())?;
        self.state.step_edges(self.problem, k);
        self.state.rotate();
        self.observe(k + 1, Level::Cur);
        self.transition(k + 1)
    }

    /// Enter the phase following completion of level `k`.
    fn transition(&mut self, k: usize) -> Result<(), SolverError> {
        if k < self.params.steps {
            self.phase = Phase::Stepping { k };
            return Ok(());
        }
        self.comm.barrier()?;
        self.elapsed = self.comm.wtime() - self.started;
        self.phase = Phase::Done;
        debug!(rank = self.comm.rank(), elapsed = self.elapsed, "worker done");
        Ok(())
    }

    fn observe(&mut self, level: usize, which: Level) {
        let values = match which {
            Level::Old => self.state.owned_old(),
            Level::Cur => self.state.owned_cur(),
        };
        let view = StepView {
            rank: self.comm.rank(),
            level,
            time: self.params.t(level),
            partition: self.state.partition(),
            values,
        };
        self.observer.observe(&view);
    }
}

/// Which level a freshly completed step left its result in.
#[derive(Clone, Copy)]
enum Level {
    Old,
    Cur,
}

/// Run one worker to completion.
///
/// On any failure other than a peer's abort, the group is aborted so no
/// other worker is left waiting on this one.
pub fn run_worker<O: StepObserver + ?Sized>(
    comm: &mut Communicator,
    config: &SolverConfig,
    problem: &dyn Problem,
    observer: &mut O,
) -> Result<WorkerOutcome, SolverError> {
    let result = Worker::new(comm, config, problem, observer).and_then(Worker::run);
    if let Err(e) = &result {
        if !e.is_abort() {
            warn!(rank = comm.rank(), error = %e, "worker failed, aborting group");
            comm.abort();
        }
    }
    result
}
