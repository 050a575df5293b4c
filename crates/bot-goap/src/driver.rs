use bot_core::{RecordFactory, RecordRuntime, TickContext, WorldMut, WorldView};
use bot_tools::{NullTraceSink, TraceEvent, TraceSink};

use crate::{select_goal, ExecStatus, Goal, NodePool, PlanExecutor, Planner, WorldState};

/// Replanning policy knobs.
///
/// How often to replan is deliberately configuration, not a hard-coded
/// policy: by default the driver replans only when forced (invalidation, no
/// progress, goal change), while `replan_every_ticks` turns on unconditional
/// periodic replanning for worlds that drift under the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDriverConfig {
    /// Minimum interval (in ticks) between planning passes, to avoid
    /// cancel/restart thrash when inputs fluctuate.
    pub min_replan_interval_ticks: u32,
    /// Replan unconditionally every N ticks, even while a plan is healthy.
    pub replan_every_ticks: Option<u32>,
    /// Capacity of the pass-scoped search node pool.
    pub pool_capacity: usize,
}

impl Default for PlanDriverConfig {
    fn default() -> Self {
        Self {
            min_replan_interval_ticks: 0,
            replan_every_ticks: None,
            pool_capacity: 256,
        }
    }
}

/// What the agent is doing after a driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveStatus {
    /// No goal applies or no plan could be found; the caller should run its
    /// default/idle behavior this tick.
    Idle,
    /// A plan is executing (or about to be rebuilt next tick).
    Running,
    /// The active goal was just reached.
    GoalReached,
}

type StateFn<W> = Box<dyn FnMut(&TickContext, <W as WorldView>::Agent, &W) -> WorldState>;

/// Per-agent planning loop: goal selection, (re)planning, and plan stepping.
///
/// One driver owns one agent's node pool and record runtime. All failure is
/// absorbed here — a failed pass degrades to [`DriveStatus::Idle`], never to
/// a fault crossing the planning/execution boundary.
pub struct PlanDriver<W, F>
where
    W: WorldMut + 'static,
    F: RecordFactory<W> + Clone,
{
    planner: Planner<W, F::Spec>,
    factory: F,
    goals: Vec<Goal>,
    config: PlanDriverConfig,
    state_fn: StateFn<W>,
    pool: NodePool<F::Spec>,
    records: RecordRuntime<W>,
    executor: Option<PlanExecutor<W, F>>,
    active_goal: Option<&'static str>,
    last_planned_tick: Option<u64>,
    pending_replan: bool,
    sink: Box<dyn TraceSink>,
}

impl<W, F> PlanDriver<W, F>
where
    W: WorldMut + 'static,
    F: RecordFactory<W> + Clone,
{
    pub fn new(
        planner: Planner<W, F::Spec>,
        factory: F,
        goals: Vec<Goal>,
        state_fn: impl FnMut(&TickContext, W::Agent, &W) -> WorldState + 'static,
    ) -> Self {
        let config = PlanDriverConfig::default();
        Self {
            planner,
            factory,
            goals,
            pool: NodePool::with_capacity(config.pool_capacity),
            config,
            state_fn: Box::new(state_fn),
            records: RecordRuntime::default(),
            executor: None,
            active_goal: None,
            last_planned_tick: None,
            pending_replan: false,
            sink: Box::new(NullTraceSink),
        }
    }

    pub fn with_config(mut self, config: PlanDriverConfig) -> Self {
        self.config = config;
        self.pool = NodePool::with_capacity(config.pool_capacity);
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn active_goal(&self) -> Option<&'static str> {
        self.active_goal
    }

    pub fn is_executing(&self) -> bool {
        self.executor.is_some()
    }

    fn can_replan_now(&self, tick: u64) -> bool {
        let min = self.config.min_replan_interval_ticks as u64;
        match self.last_planned_tick {
            None => true,
            Some(last) => tick.saturating_sub(last) >= min,
        }
    }

    pub fn drive(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> DriveStatus {
        let current = (self.state_fn)(ctx, agent, world);

        let Some(goal) = select_goal(&self.goals, &current).copied() else {
            // Nothing left to want: tear down any in-flight record.
            self.records.deactivate_current(ctx, agent, world);
            self.executor = None;
            self.active_goal = None;
            return DriveStatus::Idle;
        };

        if self.active_goal != Some(goal.name()) {
            // A different goal preempts whatever is running.
            self.records.deactivate_current(ctx, agent, world);
            self.executor = None;
            self.active_goal = Some(goal.name());
            self.pending_replan = true;
            self.sink
                .emit(TraceEvent::new(ctx.tick, "driver.goal").with_a(goal.priority() as u64));
        }

        if let (Some(every), Some(last)) = (self.config.replan_every_ticks, self.last_planned_tick)
        {
            if ctx.tick.saturating_sub(last) >= every as u64 {
                self.pending_replan = true;
            }
        }

        if self.executor.is_none() {
            self.pending_replan = true;
        }

        if self.pending_replan && self.can_replan_now(ctx.tick) {
            self.sink.emit(TraceEvent::new(ctx.tick, "plan.call"));
            let plan = self
                .planner
                .plan(ctx, agent, &*world, &current, &goal, &mut self.pool);
            self.last_planned_tick = Some(ctx.tick);
            self.pending_replan = false;

            match plan {
                Some(plan) => {
                    self.sink.emit(
                        TraceEvent::new(ctx.tick, "plan.start").with_a(plan.len() as u64),
                    );
                    self.records.deactivate_current(ctx, agent, world);
                    self.executor = Some(PlanExecutor::new(plan, self.factory.clone()));
                }
                None => {
                    self.sink.emit(TraceEvent::new(ctx.tick, "plan.none"));
                    self.records.deactivate_current(ctx, agent, world);
                    self.executor = None;
                    return DriveStatus::Idle;
                }
            }
        }

        let Some(executor) = self.executor.as_mut() else {
            // Throttled: waiting out the replan interval.
            return DriveStatus::Idle;
        };

        match executor.tick(ctx, agent, world, &mut self.records, self.sink.as_mut()) {
            ExecStatus::Running => DriveStatus::Running,
            ExecStatus::Invalidated => {
                self.sink.emit(TraceEvent::new(ctx.tick, "plan.invalidated"));
                self.executor = None;
                self.pending_replan = true;
                DriveStatus::Running
            }
            ExecStatus::Completed => {
                self.executor = None;
                let after = (self.state_fn)(ctx, agent, world);
                if goal.is_satisfied_by(&after) {
                    self.sink.emit(TraceEvent::new(ctx.tick, "plan.goal_reached"));
                    self.active_goal = None;
                    DriveStatus::GoalReached
                } else {
                    // The plan ran out without achieving its goal: the
                    // modeled effects did not actually occur. Replan.
                    self.sink.emit(TraceEvent::new(ctx.tick, "plan.no_progress"));
                    self.pending_replan = true;
                    DriveStatus::Running
                }
            }
        }
    }

    /// External cancellation (a higher-priority event took over). Safe at any
    /// tick boundary, idempotent.
    pub fn cancel(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        self.records.deactivate_current(ctx, agent, world);
        self.executor = None;
        self.pending_replan = true;
    }
}
