use super::*;

// =============================================================
// DraftState defaults
// =============================================================

#[test]
fn draft_starts_empty_on_the_connect_step() {
    let draft = DraftState::default();
    assert_eq!(draft.step, WizardStep::Connect);
    assert!(draft.repo_url.is_empty());
    assert!(draft.live_url.is_empty());
    assert!(!draft.analyzing);
    assert!(!draft.analyzed);
    assert!(draft.title.is_empty());
    assert_eq!(draft.category, Category::Fun);
    assert_eq!(draft.gradient_index, 0);
    assert_eq!(draft.icon_index, 0);
}

// =============================================================
// can_analyze
// =============================================================

#[test]
fn analysis_requires_at_least_one_url() {
    let mut draft = DraftState::default();
    assert!(!draft.can_analyze());

    draft.repo_url = "https://github.com/you/your-app".into();
    assert!(draft.can_analyze());

    draft.repo_url.clear();
    draft.live_url = "https://your-app.vercel.app".into();
    assert!(draft.can_analyze());
}

#[test]
fn whitespace_urls_do_not_unlock_analysis() {
    let draft = DraftState {
        repo_url: "   ".into(),
        live_url: "\t".into(),
        ..DraftState::default()
    };
    assert!(!draft.can_analyze());
}

// =============================================================
// apply_analysis
// =============================================================

#[test]
fn apply_analysis_fills_the_card_fields() {
    let mut draft = DraftState {
        analyzing: true,
        ..DraftState::default()
    };
    draft.apply_analysis(canned_analysis());

    assert_eq!(draft.title, "My Awesome App");
    assert_eq!(draft.tagline, "A delightful tool that solves a real problem");
    assert!(draft.description.starts_with("An intelligent app"));
    assert_eq!(draft.category, Category::Productivity);
    assert!(!draft.analyzing);
    assert!(draft.analyzed);
}

// =============================================================
// Choice accessors
// =============================================================

#[test]
fn gradient_and_icon_follow_the_chosen_index() {
    let draft = DraftState {
        gradient_index: 3,
        icon_index: 7,
        ..DraftState::default()
    };
    assert_eq!(draft.gradient(), "from-amber-500 to-orange-600");
    assert_eq!(draft.icon(), "🎮");
}

#[test]
fn out_of_range_choices_fall_back_to_the_first_entry() {
    let draft = DraftState {
        gradient_index: 99,
        icon_index: 99,
        ..DraftState::default()
    };
    assert_eq!(draft.gradient(), GRADIENT_CHOICES[0]);
    assert_eq!(draft.icon(), ICON_CHOICES[0]);
}

#[test]
fn wizard_steps_number_in_order() {
    assert_eq!(WizardStep::Connect.number(), 1);
    assert_eq!(WizardStep::Customize.number(), 2);
    assert_eq!(WizardStep::Preview.number(), 3);
    assert_eq!(WizardStep::Customize.label(), "Customize");
}
