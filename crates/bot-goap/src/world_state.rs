use bot_core::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Max squared distance two spatial values may differ by and still compare
/// equal. Origins coming out of the simulation are quantized, so goal tests
/// and precondition checks must absorb the rounding drift instead of
/// requiring exact equality.
pub const MAX_ROUNDING_SQUARE_DISTANCE_ERROR: f32 = 12.0;

/// Tolerance for direction-vector comparisons (squared distance between unit
/// vectors).
const DIR_SQUARE_EPSILON: f32 = 1e-3;

/// Tolerance for scalar comparisons.
const SCALAR_EPSILON: f32 = 1e-3;

/// A point-valued variable paired with an independent "don't-care" flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OriginVar {
    value: Vec3,
    ignored: bool,
}

impl OriginVar {
    pub fn value(&self) -> Vec3 {
        self.value
    }

    /// Assign a concrete value. Assigning implies caring: the ignore flag is
    /// cleared.
    pub fn set_value(&mut self, value: Vec3) -> &mut Self {
        self.value = value;
        self.ignored = false;
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn set_ignored(&mut self, ignored: bool) -> &mut Self {
        self.ignored = ignored;
        self
    }

    fn matches(&self, other: &OriginVar) -> bool {
        self.value.distance_squared(other.value) <= MAX_ROUNDING_SQUARE_DISTANCE_ERROR
    }
}

impl Default for OriginVar {
    fn default() -> Self {
        Self {
            value: Vec3::ZERO,
            ignored: true,
        }
    }
}

/// A direction-valued variable with an ignore flag. Compared with a tighter
/// tolerance than origins since values are unit-length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirVar {
    value: Vec3,
    ignored: bool,
}

impl DirVar {
    pub fn value(&self) -> Vec3 {
        self.value
    }

    pub fn set_value(&mut self, value: Vec3) -> &mut Self {
        self.value = value;
        self.ignored = false;
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn set_ignored(&mut self, ignored: bool) -> &mut Self {
        self.ignored = ignored;
        self
    }

    fn matches(&self, other: &DirVar) -> bool {
        self.value.distance_squared(other.value) <= DIR_SQUARE_EPSILON
    }
}

impl Default for DirVar {
    fn default() -> Self {
        Self {
            value: Vec3::ZERO,
            ignored: true,
        }
    }
}

/// A scalar variable with an ignore flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarVar {
    value: f32,
    ignored: bool,
}

impl ScalarVar {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) -> &mut Self {
        self.value = value;
        self.ignored = false;
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn set_ignored(&mut self, ignored: bool) -> &mut Self {
        self.ignored = ignored;
        self
    }

    fn matches(&self, other: &ScalarVar) -> bool {
        (self.value - other.value).abs() <= SCALAR_EPSILON
    }
}

impl Default for ScalarVar {
    fn default() -> Self {
        Self {
            value: 0.0,
            ignored: true,
        }
    }
}

/// A boolean variable with an ignore flag. Compared exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoolVar {
    value: bool,
    ignored: bool,
}

impl BoolVar {
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) -> &mut Self {
        self.value = value;
        self.ignored = false;
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn set_ignored(&mut self, ignored: bool) -> &mut Self {
        self.ignored = ignored;
        self
    }

    fn matches(&self, other: &BoolVar) -> bool {
        self.value == other.value
    }
}

impl Default for BoolVar {
    fn default() -> Self {
        Self {
            value: false,
            ignored: true,
        }
    }
}

/// A fixed-shape bag of typed variables describing a situation.
///
/// Doubles as search state and, with most variables ignored, as a partial
/// goal specification. `WorldState` is `Copy`: every copy is a fully
/// independent snapshot and transitions never mutate their input.
///
/// The default state ignores every variable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldState {
    bot_origin: OriginVar,
    nav_target_origin: OriginVar,
    dodge_hazard_spot: OriginVar,
    hazard_hit_point: OriginVar,
    hazard_direction: DirVar,
    potential_hazard_damage: ScalarVar,
    has_reacted_to_hazard: BoolVar,
}

impl WorldState {
    pub fn bot_origin(&self) -> &OriginVar {
        &self.bot_origin
    }

    pub fn bot_origin_mut(&mut self) -> &mut OriginVar {
        &mut self.bot_origin
    }

    pub fn nav_target_origin(&self) -> &OriginVar {
        &self.nav_target_origin
    }

    pub fn nav_target_origin_mut(&mut self) -> &mut OriginVar {
        &mut self.nav_target_origin
    }

    pub fn dodge_hazard_spot(&self) -> &OriginVar {
        &self.dodge_hazard_spot
    }

    pub fn dodge_hazard_spot_mut(&mut self) -> &mut OriginVar {
        &mut self.dodge_hazard_spot
    }

    pub fn hazard_hit_point(&self) -> &OriginVar {
        &self.hazard_hit_point
    }

    pub fn hazard_hit_point_mut(&mut self) -> &mut OriginVar {
        &mut self.hazard_hit_point
    }

    pub fn hazard_direction(&self) -> &DirVar {
        &self.hazard_direction
    }

    pub fn hazard_direction_mut(&mut self) -> &mut DirVar {
        &mut self.hazard_direction
    }

    pub fn potential_hazard_damage(&self) -> &ScalarVar {
        &self.potential_hazard_damage
    }

    pub fn potential_hazard_damage_mut(&mut self) -> &mut ScalarVar {
        &mut self.potential_hazard_damage
    }

    pub fn has_reacted_to_hazard(&self) -> &BoolVar {
        &self.has_reacted_to_hazard
    }

    pub fn has_reacted_to_hazard_mut(&mut self) -> &mut BoolVar {
        &mut self.has_reacted_to_hazard
    }

    /// Goal-satisfaction test: every variable the goal cares about must be
    /// present here and match within tolerance. Variables the goal ignores
    /// are unconstrained.
    pub fn satisfies(&self, goal: &WorldState) -> bool {
        self.unsatisfied_vars(goal) == 0
    }

    /// Number of goal variables this state fails to satisfy.
    pub fn unsatisfied_vars(&self, goal: &WorldState) -> u32 {
        let mut missing = 0;
        if !goal.bot_origin.ignored
            && (self.bot_origin.ignored || !self.bot_origin.matches(&goal.bot_origin))
        {
            missing += 1;
        }
        if !goal.nav_target_origin.ignored
            && (self.nav_target_origin.ignored
                || !self.nav_target_origin.matches(&goal.nav_target_origin))
        {
            missing += 1;
        }
        if !goal.dodge_hazard_spot.ignored
            && (self.dodge_hazard_spot.ignored
                || !self.dodge_hazard_spot.matches(&goal.dodge_hazard_spot))
        {
            missing += 1;
        }
        if !goal.hazard_hit_point.ignored
            && (self.hazard_hit_point.ignored
                || !self.hazard_hit_point.matches(&goal.hazard_hit_point))
        {
            missing += 1;
        }
        if !goal.hazard_direction.ignored
            && (self.hazard_direction.ignored
                || !self.hazard_direction.matches(&goal.hazard_direction))
        {
            missing += 1;
        }
        if !goal.potential_hazard_damage.ignored
            && (self.potential_hazard_damage.ignored
                || !self.potential_hazard_damage.matches(&goal.potential_hazard_damage))
        {
            missing += 1;
        }
        if !goal.has_reacted_to_hazard.ignored
            && (self.has_reacted_to_hazard.ignored
                || !self.has_reacted_to_hazard.matches(&goal.has_reacted_to_hazard))
        {
            missing += 1;
        }
        missing
    }

    /// Full structural equality with tolerance: same ignore flags everywhere,
    /// and matching values for every non-ignored variable. Used by the search
    /// to prune duplicate states.
    pub fn congruent(&self, other: &WorldState) -> bool {
        if self.bot_origin.ignored != other.bot_origin.ignored
            || (!self.bot_origin.ignored && !self.bot_origin.matches(&other.bot_origin))
        {
            return false;
        }
        if self.nav_target_origin.ignored != other.nav_target_origin.ignored
            || (!self.nav_target_origin.ignored
                && !self.nav_target_origin.matches(&other.nav_target_origin))
        {
            return false;
        }
        if self.dodge_hazard_spot.ignored != other.dodge_hazard_spot.ignored
            || (!self.dodge_hazard_spot.ignored
                && !self.dodge_hazard_spot.matches(&other.dodge_hazard_spot))
        {
            return false;
        }
        if self.hazard_hit_point.ignored != other.hazard_hit_point.ignored
            || (!self.hazard_hit_point.ignored
                && !self.hazard_hit_point.matches(&other.hazard_hit_point))
        {
            return false;
        }
        if self.hazard_direction.ignored != other.hazard_direction.ignored
            || (!self.hazard_direction.ignored
                && !self.hazard_direction.matches(&other.hazard_direction))
        {
            return false;
        }
        if self.potential_hazard_damage.ignored != other.potential_hazard_damage.ignored
            || (!self.potential_hazard_damage.ignored
                && !self.potential_hazard_damage.matches(&other.potential_hazard_damage))
        {
            return false;
        }
        if self.has_reacted_to_hazard.ignored != other.has_reacted_to_hazard.ignored
            || (!self.has_reacted_to_hazard.ignored
                && !self.has_reacted_to_hazard.matches(&other.has_reacted_to_hazard))
        {
            return false;
        }
        true
    }
}
