use super::*;
use crate::util::catalog::{ACHIEVEMENTS, ROADMAP};

// =============================================================
// WizardStep
// =============================================================

#[test]
fn step_numbers_round_trip() {
    for step in WizardStep::ALL {
        assert_eq!(WizardStep::from_number(step.number()), Some(step));
    }
    assert_eq!(WizardStep::from_number(0), None);
    assert_eq!(WizardStep::from_number(5), None);
}

#[test]
fn next_saturates_at_roadmap() {
    assert_eq!(WizardStep::UserType.next(), WizardStep::Degree);
    assert_eq!(WizardStep::Degree.next(), WizardStep::Field);
    assert_eq!(WizardStep::Field.next(), WizardStep::Roadmap);
    assert_eq!(WizardStep::Roadmap.next(), WizardStep::Roadmap);
}

#[test]
fn only_roadmap_has_no_catalog() {
    assert_eq!(WizardStep::UserType.catalog(), Some(Catalog::UserTypes));
    assert_eq!(WizardStep::Degree.catalog(), Some(Catalog::Degrees));
    assert_eq!(WizardStep::Field.catalog(), Some(Catalog::Fields));
    assert_eq!(WizardStep::Roadmap.catalog(), None);
}

// =============================================================
// WizardState
// =============================================================

#[test]
fn new_state_starts_at_step_one_with_nothing_selected() {
    let state = WizardState::new();
    assert_eq!(state.step.number(), 1);
    assert!(state.user_type.is_none());
    assert!(state.degree.is_none());
    assert!(state.field.is_none());
    assert!(!state.is_complete());
}

#[test]
fn step_is_one_plus_selection_count_and_caps_at_four() {
    let mut state = WizardState::new();
    state.select_user_type("student");
    assert_eq!(state.step.number(), 2);
    state.select_degree("masters");
    assert_eq!(state.step.number(), 3);
    state.select_field("data");
    assert_eq!(state.step.number(), 4);

    state.select_field("software");
    state.select_user_type("hobbyist");
    state.select_degree("bootcamp");
    assert_eq!(state.step.number(), 4);
}

#[test]
fn each_selection_touches_only_its_own_field() {
    let mut state = WizardState::new();
    state.select_user_type("professional");
    assert_eq!(state.user_type.as_deref(), Some("professional"));
    assert!(state.degree.is_none());
    assert!(state.field.is_none());

    state.select_degree("self-taught");
    assert_eq!(state.user_type.as_deref(), Some("professional"));
    assert_eq!(state.degree.as_deref(), Some("self-taught"));
    assert!(state.field.is_none());

    state.select_field("business");
    assert_eq!(state.user_type.as_deref(), Some("professional"));
    assert_eq!(state.degree.as_deref(), Some("self-taught"));
    assert_eq!(state.field.as_deref(), Some("business"));
}

#[test]
fn unknown_id_is_stored_but_highlights_nothing() {
    let mut state = WizardState::new();
    state.select_user_type("astronaut");
    assert_eq!(state.user_type.as_deref(), Some("astronaut"));
    assert_eq!(state.step, WizardStep::Degree);
    assert!(Catalog::UserTypes.items().iter().all(|item| !state.is_selected(Catalog::UserTypes, item.id)));
}

#[test]
fn out_of_order_selection_records_and_advances() {
    let mut state = WizardState::new();
    state.select_field("cyber");
    assert_eq!(state.field.as_deref(), Some("cyber"));
    assert!(state.user_type.is_none());
    assert_eq!(state.step, WizardStep::Degree);
}

#[test]
fn select_dispatches_by_catalog() {
    let mut state = WizardState::new();
    state.select(Catalog::UserTypes, "hobbyist");
    state.select(Catalog::Degrees, "bachelors");
    state.select(Catalog::Fields, "software");
    assert_eq!(state.selection(Catalog::UserTypes), Some("hobbyist"));
    assert_eq!(state.selection(Catalog::Degrees), Some("bachelors"));
    assert_eq!(state.selection(Catalog::Fields), Some("software"));
    assert!(state.is_complete());
}

#[test]
fn progress_indicator_fills_reached_circles_and_passed_connectors() {
    let mut state = WizardState::new();
    state.select_user_type("student");
    assert!(state.circle_filled(1));
    assert!(state.circle_filled(2));
    assert!(!state.circle_filled(3));
    assert!(state.connector_filled(1));
    assert!(!state.connector_filled(2));
    assert!(!state.connector_filled(3));
}

#[test]
fn student_bootcamp_cyber_scenario_reaches_roadmap() {
    let mut state = WizardState::new();

    state.select_user_type("student");
    assert_eq!(state.step.number(), 2);
    assert_eq!(state.user_type.as_deref(), Some("student"));
    assert_eq!(state.step.catalog(), Some(Catalog::Degrees));

    state.select_degree("bootcamp");
    assert_eq!(state.step.number(), 3);

    state.select_field("cyber");
    assert_eq!(state.step.number(), 4);
    assert!(state.is_complete());
    assert_eq!(state.step.catalog(), None);
    assert_eq!(ROADMAP.len(), 3);
    assert_eq!(ACHIEVEMENTS.len(), 3);
    assert!((1..=4).all(|n| state.circle_filled(n)));
}
