//! Full dialogues driven through the conversation state machine.

use nrd_whois::conversation::{messages, step, Effect, Input, State};

const MAX_DAYS: usize = 31;

/// Feeds messages in order and returns every effect plus the final state.
fn run_dialogue(messages_in: &[&str]) -> (State, Vec<Effect>) {
    let mut state = State::default();
    let mut effects = Vec::new();
    for text in messages_in {
        let transition = step(state, Input::parse(text), MAX_DAYS);
        state = transition.next;
        effects.extend(transition.effects);
    }
    (state, effects)
}

fn replies(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Reply(text) => Some(text.as_str()),
            Effect::RunPipeline { .. } => None,
        })
        .collect()
}

#[test]
fn test_all_domains_session() {
    let (state, effects) = run_dialogue(&["/start", "20240115", "todos"]);

    assert_eq!(state, State::Idle);
    assert_eq!(
        replies(&effects),
        vec![messages::WELCOME, messages::ASK_MODE, messages::SEARCHING_ALL]
    );
    match effects.last() {
        Some(Effect::RunPipeline { dates, keywords }) => {
            assert_eq!(dates.compact_strings(), vec!["20240115"]);
            assert!(keywords.is_none());
        }
        other => panic!("expected a pipeline run, got {:?}", other),
    }
}

#[test]
fn test_keyword_session_with_retries() {
    let (state, effects) = run_dialogue(&[
        "/start",
        "ayer",
        "20240101-20240103",
        "quizas",
        "PALABRAS",
        " ",
        "shop,deal",
    ]);

    assert_eq!(state, State::Idle);
    let texts = replies(&effects);
    assert_eq!(texts[0], messages::WELCOME);
    assert!(texts[1].starts_with(messages::INVALID_DATE));
    assert_eq!(texts[2], messages::ASK_MODE);
    assert_eq!(texts[3], messages::INVALID_MODE);
    assert_eq!(texts[4], messages::ASK_KEYWORDS);
    assert_eq!(texts[5], messages::NO_KEYWORDS);
    assert_eq!(texts[6], "Buscando dominios con: shop, deal");

    let runs: Vec<_> = effects
        .iter()
        .filter(|e| matches!(e, Effect::RunPipeline { .. }))
        .collect();
    assert_eq!(runs.len(), 1);
    match runs[0] {
        Effect::RunPipeline { dates, keywords } => {
            assert_eq!(
                dates.compact_strings(),
                vec!["20240101", "20240102", "20240103"]
            );
            assert_eq!(
                keywords.as_deref(),
                Some(&["shop".to_string(), "deal".to_string()][..])
            );
        }
        Effect::Reply(_) => unreachable!(),
    }
}

#[test]
fn test_text_before_start_is_ignored() {
    let (state, effects) = run_dialogue(&["hola", "20240115"]);
    assert_eq!(state, State::Idle);
    assert!(effects.is_empty());
}

#[test]
fn test_new_session_after_completion() {
    let (state, effects) = run_dialogue(&["/start", "20240115", "todos", "/start"]);
    assert_eq!(state, State::AwaitingDate);
    assert_eq!(replies(&effects).last(), Some(&messages::WELCOME));
}

#[test]
fn test_range_over_limit_is_rejected() {
    let (state, effects) = run_dialogue(&["/start", "20240101-20240301"]);
    assert_eq!(state, State::AwaitingDate);
    assert_eq!(
        replies(&effects)[1],
        "Formato inválido. Intenta otra vez. (el rango tiene 61 días y el máximo es 31)"
    );
}
