use bot_core::Vec3;
use bot_goap::{WorldState, MAX_ROUNDING_SQUARE_DISTANCE_ERROR};

#[test]
fn default_state_ignores_every_variable() {
    let state = WorldState::default();
    assert!(state.bot_origin().is_ignored());
    assert!(state.dodge_hazard_spot().is_ignored());
    assert!(state.hazard_hit_point().is_ignored());
    assert!(state.hazard_direction().is_ignored());
    assert!(state.potential_hazard_damage().is_ignored());
    assert!(state.has_reacted_to_hazard().is_ignored());

    // An all-ignored goal constrains nothing.
    assert!(state.satisfies(&WorldState::default()));
}

#[test]
fn goal_ignored_variables_are_unconstrained() {
    let mut goal = WorldState::default();
    goal.has_reacted_to_hazard_mut().set_value(true);

    let mut a = WorldState::default();
    a.has_reacted_to_hazard_mut().set_value(true);
    a.bot_origin_mut().set_value(Vec3::new(1.0, 2.0, 3.0));

    // Differs from `a` only in variables the goal ignores.
    let mut b = a;
    b.bot_origin_mut().set_value(Vec3::new(500.0, -4.0, 9.0));
    b.potential_hazard_damage_mut().set_value(75.0);

    assert!(a.satisfies(&goal));
    assert!(b.satisfies(&goal));
}

#[test]
fn goal_variables_must_be_present_not_just_unequal() {
    let mut goal = WorldState::default();
    goal.has_reacted_to_hazard_mut().set_value(true);

    // The variable is ignored in the state: not satisfied, even though the
    // underlying default value happens to be comparable.
    let state = WorldState::default();
    assert!(!state.satisfies(&goal));
}

#[test]
fn spatial_comparison_absorbs_rounding_drift() {
    let mut goal = WorldState::default();
    goal.bot_origin_mut().set_value(Vec3::new(100.0, 0.0, 0.0));

    let mut near = WorldState::default();
    let drift = (MAX_ROUNDING_SQUARE_DISTANCE_ERROR - 1.0).sqrt();
    near.bot_origin_mut()
        .set_value(Vec3::new(100.0 + drift, 0.0, 0.0));
    assert!(near.satisfies(&goal));

    let mut far = WorldState::default();
    far.bot_origin_mut().set_value(Vec3::new(110.0, 0.0, 0.0));
    assert!(!far.satisfies(&goal));
}

#[test]
fn set_value_clears_the_ignore_flag() {
    let mut state = WorldState::default();
    assert!(state.dodge_hazard_spot().is_ignored());
    state
        .dodge_hazard_spot_mut()
        .set_value(Vec3::new(1.0, 1.0, 0.0));
    assert!(!state.dodge_hazard_spot().is_ignored());

    state.dodge_hazard_spot_mut().set_ignored(true);
    assert!(state.dodge_hazard_spot().is_ignored());
}

#[test]
fn copies_are_fully_independent() {
    let mut original = WorldState::default();
    original.bot_origin_mut().set_value(Vec3::new(5.0, 5.0, 0.0));

    let mut copy = original;
    copy.bot_origin_mut().set_value(Vec3::new(900.0, 0.0, 0.0));
    copy.has_reacted_to_hazard_mut().set_value(true);

    assert_eq!(original.bot_origin().value(), Vec3::new(5.0, 5.0, 0.0));
    assert!(original.has_reacted_to_hazard().is_ignored());
}

#[test]
fn congruence_requires_matching_ignore_flags() {
    let mut a = WorldState::default();
    a.bot_origin_mut().set_value(Vec3::new(1.0, 0.0, 0.0));

    let mut b = a;
    assert!(a.congruent(&b));

    b.bot_origin_mut().set_ignored(true);
    assert!(!a.congruent(&b));

    // Same flags, different values.
    let mut c = a;
    c.bot_origin_mut().set_value(Vec3::new(50.0, 0.0, 0.0));
    assert!(!a.congruent(&c));
}
