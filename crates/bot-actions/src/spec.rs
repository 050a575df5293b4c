use bot_core::{ActionRecord, RecordFactory, TickContext, Vec3};
use bot_goap::Planner;
use bot_nav::{NavWorldMut, NavWorldView};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dodge::{DodgeToSpotAction, DodgeToSpotRecord};
use crate::run::{RunToNavTargetAction, RunToNavTargetRecord};

/// Serializable step produced by the planning actions in this crate. The
/// executor rebuilds the runtime record from this alone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BotActionSpec {
    DodgeToSpot {
        spot: Vec3,
    },
    RunToNavTarget {
        target: Vec3,
        travel_time_millis: u32,
    },
}

/// Builds the runtime record for each [`BotActionSpec`] variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct BotRecordFactory;

impl<W> RecordFactory<W> for BotRecordFactory
where
    W: NavWorldMut + 'static,
{
    type Spec = BotActionSpec;

    fn build(
        &self,
        spec: &BotActionSpec,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &W,
    ) -> Box<dyn ActionRecord<W>> {
        match *spec {
            BotActionSpec::DodgeToSpot { spot } => Box::new(DodgeToSpotRecord::new(spot)),
            BotActionSpec::RunToNavTarget {
                target,
                travel_time_millis,
            } => Box::new(RunToNavTargetRecord::new(target, travel_time_millis)),
        }
    }
}

/// A planner loaded with every action this crate defines.
pub fn default_planner<W>() -> Planner<W, BotActionSpec>
where
    W: NavWorldView + 'static,
{
    Planner::new(vec![Box::new(DodgeToSpotAction), Box::new(RunToNavTargetAction)])
}
