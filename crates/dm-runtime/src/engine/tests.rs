use super::*;
use dm_core::{GeoPoint, UserAction};

fn welcome_rows() -> Vec<ScriptRow> {
    vec![
        ScriptRow::new("", "Welcome").tagged("start"),
        ScriptRow::new("yes|y", "Great!").tagged("confirm"),
        ScriptRow::new("no|n", "OK then").with_negative("Please say yes or no"),
    ]
}

fn engine(rows: &[ScriptRow]) -> DialogueEngine {
    DialogueEngine::from_rows(rows, DialogueEngineOptions::default()).expect("engine should build")
}

#[test]
fn new_starts_at_first_step() {
    let engine = engine(&welcome_rows());
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.count(), 3);
    assert_eq!(engine.current_step().reaction, "Welcome");
    assert_eq!(engine.candidate_positions(), &[1]);
}

#[test]
fn new_rejects_hand_built_graph_with_dangling_candidate() {
    let mut script = dm_compiler::compile_script(&welcome_rows()).expect("compile should pass");
    script.steps[1].candidate_positions = vec![9];
    let error = DialogueEngine::new(script, DialogueEngineOptions::default())
        .err()
        .expect("dangling candidate should fail");
    assert_eq!(error.code, "DM_SCRIPT_INVALID");
    assert_eq!(error.row, Some(1));
}

#[test]
fn new_rejects_empty_compiled_script() {
    let script = CompiledScript {
        steps: Vec::new(),
        tags: Default::default(),
        warnings: Vec::new(),
    };
    let error = DialogueEngine::new(script, DialogueEngineOptions::default())
        .err()
        .expect("empty script should fail");
    assert_eq!(error.code, "DM_SCRIPT_EMPTY");
}

#[test]
fn end_to_end_negative_then_next() {
    let mut engine = engine(&welcome_rows());

    assert_eq!(engine.react("anything"), "Welcome");
    assert_eq!(engine.position(), 0);

    assert_eq!(engine.next(), "Welcome");
    assert_eq!(engine.position(), 1);
}

#[test]
fn react_follows_linear_order_and_wraps() {
    let rows = vec![
        ScriptRow::new("hi", "Hello"),
        ScriptRow::new("yes", "Good"),
        ScriptRow::new("bye", "Farewell"),
    ];
    let mut engine = engine(&rows);

    assert_eq!(engine.react("yes"), "Good");
    assert_eq!(engine.position(), 1);
    assert_eq!(engine.react("  BYE "), "Farewell");
    assert_eq!(engine.position(), 2);
    assert_eq!(engine.react("Hi"), "Hello");
    assert_eq!(engine.position(), 0);
}

#[test]
fn react_tries_candidates_in_listed_order() {
    let rows = vec![
        ScriptRow::new("", "Do you like Tolstoy?").branching("specific|fallback"),
        ScriptRow::new("yes|of course", "Which novel?").tagged("specific"),
        ScriptRow::new("[anytext]", "Tell me more").tagged("fallback"),
    ];
    let mut engine = engine(&rows);
    assert_eq!(engine.react("Of course"), "Which novel?");
    assert_eq!(engine.position(), 1);

    engine.reset();
    assert_eq!(engine.react("not really"), "Tell me more");
    assert_eq!(engine.position(), 2);
}

#[test]
fn react_without_match_prefers_step_negative_reaction() {
    let rows = vec![
        ScriptRow::new("", "Ready?").with_negative("Answer yes or no"),
        ScriptRow::new("yes", "Go"),
    ];
    let mut engine = engine(&rows);
    assert_eq!(engine.react("maybe"), "Answer yes or no");
    assert_eq!(engine.position(), 0);
}

#[test]
fn react_without_match_uses_engine_default_next() {
    let rows = vec![ScriptRow::new("", "Ready?"), ScriptRow::new("yes", "Go")];
    let mut engine = DialogueEngine::from_rows(
        &rows,
        DialogueEngineOptions {
            default_negative_response: Some("Sorry?".to_string()),
            ..DialogueEngineOptions::default()
        },
    )
    .expect("engine should build");
    assert_eq!(engine.react("maybe"), "Sorry?");
}

#[test]
fn empty_default_negative_response_is_ignored() {
    let rows = vec![ScriptRow::new("", "Ready?"), ScriptRow::new("yes", "Go")];
    let mut engine = DialogueEngine::from_rows(
        &rows,
        DialogueEngineOptions {
            default_negative_response: Some(String::new()),
            ..DialogueEngineOptions::default()
        },
    )
    .expect("engine should build");
    assert_eq!(engine.react("maybe"), "Ready?");
}

#[test]
fn get_negative_response_repeats_current_position_reaction() {
    let mut engine = engine(&welcome_rows());
    engine.react("anything");
    engine.next();
    // Row 0 has no negative reaction; the fallback is the reaction at the
    // engine's own position, which is now 1.
    assert_eq!(engine.get_negative_response(0), "Great!");
    assert_eq!(engine.get_negative_response(2), "Please say yes or no");
    assert_eq!(engine.get_negative_response(42), "Great!");
}

#[test]
fn matched_step_with_empty_reaction_falls_back() {
    let rows = vec![
        ScriptRow::new("", "Start"),
        ScriptRow {
            action: Some("go".to_string()),
            reaction: None,
            negative_reaction: Some("Keep going".to_string()),
            ..ScriptRow::default()
        },
    ];
    let mut engine = engine(&rows);
    assert_eq!(engine.react("go"), "Keep going");
    assert_eq!(engine.position(), 1);
}

#[test]
fn next_walks_sequentially_then_restarts() {
    let rows = vec![
        ScriptRow::new("", "one").branching("c"),
        ScriptRow::new("", "two"),
        ScriptRow::new("", "three").tagged("c"),
    ];
    let mut engine = engine(&rows);
    assert_eq!(engine.next(), "one");
    assert_eq!(engine.next(), "two");
    assert_eq!(engine.next(), "three");
    assert_eq!(engine.position(), 3);

    assert_eq!(engine.next(), DEFAULT_RESTART_MESSAGE);
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.next(), "one");
}

#[test]
fn restart_message_can_be_overridden() {
    let mut engine = DialogueEngine::from_rows(
        &[ScriptRow::new("", "only")],
        DialogueEngineOptions {
            restart_message: Some("Again!".to_string()),
            ..DialogueEngineOptions::default()
        },
    )
    .expect("engine should build");
    assert_eq!(engine.next(), "only");
    assert_eq!(engine.next(), "Again!");
}

#[test]
fn react_after_walking_off_the_end_restarts_first() {
    let rows = vec![ScriptRow::new("", "one"), ScriptRow::new("hi", "two")];
    let mut engine = engine(&rows);
    engine.next();
    engine.next();
    assert_eq!(engine.position(), 2);
    assert_eq!(engine.current_step().index, 0);

    assert_eq!(engine.react("hi"), "two");
    assert_eq!(engine.position(), 1);
}

#[test]
fn reset_is_idempotent() {
    let mut engine = engine(&welcome_rows());
    engine.next();
    engine.reset();
    engine.reset();
    assert_eq!(engine.position(), 0);
    assert_eq!(engine.count(), 3);
}

#[test]
fn is_valid_action_literal_alternatives_are_case_insensitive() {
    let engine = engine(&welcome_rows());
    assert!(engine.is_valid_action("hello|hi", &"Hello"));
    assert!(engine.is_valid_action("hello | HI", &" hi  "));
    assert!(!engine.is_valid_action("hello|hi", &"hey"));
    assert!(engine.is_valid_action("", &""));
    assert!(!engine.is_valid_action("", &"x"));
}

#[test]
fn is_valid_action_placeholders_always_match() {
    let engine = engine(&welcome_rows());
    assert!(engine.is_valid_action("/start", &"whatever"));
    assert!(engine.is_valid_action("[anytext]", &"whatever"));
    assert!(engine.is_valid_action("[initial]", &UserAction::Timer));
    assert!(engine.is_valid_action("[pause 10]", &UserAction::Timer));
    assert!(engine.is_valid_action("[location]", &"anything"));
}

#[test]
fn is_valid_action_rejects_unknown_brackets_and_textless_events() {
    let engine = engine(&welcome_rows());
    assert!(!engine.is_valid_action("[photo]", &"photo"));
    assert!(!engine.is_valid_action("yes", &UserAction::Timer));
}

#[test]
fn location_placeholder_delegates_to_matcher() {
    let rows = vec![
        ScriptRow::new("", "Where are you?"),
        ScriptRow::new("[location Yasnaya Polyana]", "Welcome to the estate"),
    ];
    let matcher: Arc<dyn LocationMatcher> =
        Arc::new(|_pattern: &str, action: &dyn ActionEvent| action.location().is_some());
    let mut engine = DialogueEngine::from_rows(
        &rows,
        DialogueEngineOptions {
            location_matcher: Some(matcher),
            ..DialogueEngineOptions::default()
        },
    )
    .expect("engine should build");
    assert!(engine.has_location_matcher());

    assert_eq!(engine.react("in Moscow"), "Where are you?");
    assert_eq!(engine.position(), 0);

    let point = GeoPoint {
        latitude: 54.07,
        longitude: 37.52,
    };
    assert_eq!(
        engine.react(UserAction::Location { point }),
        "Welcome to the estate"
    );
    assert_eq!(engine.position(), 1);
}

#[test]
fn matcher_receives_raw_pattern() {
    let matcher: Arc<dyn LocationMatcher> =
        Arc::new(|pattern: &str, _action: &dyn ActionEvent| pattern == "[location tula]");
    let engine = DialogueEngine::from_rows(
        &welcome_rows(),
        DialogueEngineOptions {
            location_matcher: Some(matcher),
            ..DialogueEngineOptions::default()
        },
    )
    .expect("engine should build");
    assert!(engine.is_valid_action("[location tula]", &"x"));
    assert!(!engine.is_valid_action("[location moscow]", &"x"));
}

#[test]
fn react_accepts_user_actions_by_reference() {
    let rows = vec![ScriptRow::new("", "Hi"), ScriptRow::new("/start", "Started")];
    let mut engine = engine(&rows);
    let action = UserAction::from_line("/start");
    assert_eq!(engine.react(&action), "Started");
}

#[test]
fn needs_proactive_detects_pause_candidates() {
    let rows = vec![
        ScriptRow::new("", "Let me think").branching("answer|wait"),
        ScriptRow::new("no", "Fine").tagged("answer").branching("end"),
        ScriptRow::new("[pause 10]", "Here is a thought").tagged("wait"),
        ScriptRow::new("yes", "Done").tagged("end"),
    ];
    let mut engine = engine(&rows);
    assert!(engine.needs_proactive());
    assert_eq!(engine.proactive_delay(), Some(Duration::from_secs(10)));

    engine.react("no");
    assert_eq!(engine.position(), 1);
    assert!(!engine.needs_proactive());
    assert_eq!(engine.proactive_delay(), None);
}

#[test]
fn needs_proactive_is_false_for_literal_candidates() {
    let engine = engine(&welcome_rows());
    assert!(!engine.needs_proactive());
}

#[test]
fn needs_proactive_matches_marker_inside_literal_action() {
    let rows = vec![ScriptRow::new("", "a"), ScriptRow::new("ok [pause]", "b")];
    let engine = engine(&rows);
    assert!(engine.needs_proactive());
    assert_eq!(engine.proactive_delay(), Some(DEFAULT_PAUSE));
}

#[test]
fn proactive_delay_uses_configured_default_pause() {
    let rows = vec![ScriptRow::new("", "a"), ScriptRow::new("[pause]", "b")];
    let mut engine = DialogueEngine::from_rows(
        &rows,
        DialogueEngineOptions {
            default_pause: Some(Duration::from_secs(2)),
            ..DialogueEngineOptions::default()
        },
    )
    .expect("engine should build");
    assert_eq!(engine.proactive_delay(), Some(Duration::from_secs(2)));

    assert_eq!(engine.react(UserAction::Timer), "b");
    assert_eq!(engine.position(), 1);
}

#[test]
fn engines_do_not_share_state() {
    let rows = welcome_rows();
    let mut first = engine(&rows);
    let second = engine(&rows);
    first.next();
    first.next();
    assert_eq!(first.position(), 2);
    assert_eq!(second.position(), 0);
}

#[test]
fn engine_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<DialogueEngine>();
}
