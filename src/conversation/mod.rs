//! Per-chat conversation state machine.
//!
//! The dialogue is modelled as a pure function: [`step`] takes the current
//! [`State`] and one incoming message and returns the next state plus the
//! [`Effect`]s to perform. The bot layer executes effects; nothing here
//! touches the network.

pub mod messages;

use crate::listing::{normalize_keywords, parse_date_input, DateRange};

/// Where a chat is in the dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    /// No session in progress.
    #[default]
    Idle,
    /// Welcome sent, waiting for a date or date range.
    AwaitingDate,
    /// Dates accepted, waiting for `todos` or `palabras`.
    AwaitingMode { dates: DateRange },
    /// Keyword mode chosen, waiting for the comma-separated list.
    AwaitingKeywords { dates: DateRange },
}

/// One incoming message, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Start,
    /// Any other `/command`.
    Command(String),
    Text(String),
}

impl Input {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.strip_prefix('/') {
            Some(command) => {
                // "/start@my_bot extra" -> "start"
                let name = command
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_lowercase();
                if name == "start" {
                    Input::Start
                } else {
                    Input::Command(name)
                }
            }
            None => Input::Text(trimmed.to_string()),
        }
    }
}

/// Something the bot layer must do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Reply(String),
    /// Collect, enrich and deliver; `keywords: None` means every domain.
    RunPipeline {
        dates: DateRange,
        keywords: Option<Vec<String>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: State) -> Self {
        Transition {
            next: state,
            effects: Vec::new(),
        }
    }

    fn to(next: State, effects: Vec<Effect>) -> Self {
        Transition { next, effects }
    }
}

fn reply(text: impl Into<String>) -> Effect {
    Effect::Reply(text.into())
}

/// Advances the dialogue by one message.
///
/// `max_days` bounds the number of days a range may expand to.
pub fn step(state: State, input: Input, max_days: usize) -> Transition {
    match (state, input) {
        (State::Idle, Input::Start) => {
            Transition::to(State::AwaitingDate, vec![reply(messages::WELCOME)])
        }
        (State::Idle, _) => Transition::stay(State::Idle),

        // commands never reach the dialogue once a session is open
        (state, Input::Start | Input::Command(_)) => Transition::stay(state),

        (State::AwaitingDate, Input::Text(text)) => match parse_date_input(&text, max_days) {
            Ok(dates) => Transition::to(
                State::AwaitingMode { dates },
                vec![reply(messages::ASK_MODE)],
            ),
            Err(e) => Transition::to(
                State::AwaitingDate,
                vec![reply(messages::invalid_date(&e))],
            ),
        },

        (State::AwaitingMode { dates }, Input::Text(text)) => {
            match text.trim().to_lowercase().as_str() {
                "todos" => Transition::to(
                    State::Idle,
                    vec![
                        reply(messages::SEARCHING_ALL),
                        Effect::RunPipeline {
                            dates,
                            keywords: None,
                        },
                    ],
                ),
                "palabras" => Transition::to(
                    State::AwaitingKeywords { dates },
                    vec![reply(messages::ASK_KEYWORDS)],
                ),
                _ => Transition::to(
                    State::AwaitingMode { dates },
                    vec![reply(messages::INVALID_MODE)],
                ),
            }
        }

        (State::AwaitingKeywords { dates }, Input::Text(text)) => {
            let keywords = normalize_keywords(&text);
            if keywords.is_empty() {
                return Transition::to(
                    State::AwaitingKeywords { dates },
                    vec![reply(messages::NO_KEYWORDS)],
                );
            }
            Transition::to(
                State::Idle,
                vec![
                    reply(messages::searching_keywords(&keywords)),
                    Effect::RunPipeline {
                        dates,
                        keywords: Some(keywords),
                    },
                ],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const MAX_DAYS: usize = 31;

    fn text(s: &str) -> Input {
        Input::Text(s.to_string())
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_input_parse() {
        assert_eq!(Input::parse("/start"), Input::Start);
        assert_eq!(Input::parse("  /START@nrd_bot "), Input::Start);
        assert_eq!(Input::parse("/help"), Input::Command("help".to_string()));
        assert_eq!(Input::parse(" 20240115 "), text("20240115"));
    }

    #[test]
    fn test_idle_ignores_everything_but_start() {
        let t = step(State::Idle, text("hola"), MAX_DAYS);
        assert_eq!(t.next, State::Idle);
        assert!(t.effects.is_empty());

        let t = step(State::Idle, Input::Start, MAX_DAYS);
        assert_eq!(t.next, State::AwaitingDate);
        assert_eq!(t.effects, vec![Effect::Reply(messages::WELCOME.to_string())]);
    }

    #[test]
    fn test_invalid_date_stays() {
        let t = step(State::AwaitingDate, text("2024-01-15"), MAX_DAYS);
        assert_eq!(t.next, State::AwaitingDate);
        match &t.effects[..] {
            [Effect::Reply(msg)] => assert!(msg.starts_with(messages::INVALID_DATE)),
            other => panic!("unexpected effects: {:?}", other),
        }

        let t = step(State::AwaitingDate, text("20240120-20240110"), MAX_DAYS);
        assert_eq!(t.next, State::AwaitingDate);
        assert_eq!(
            t.effects,
            vec![Effect::Reply(
                "Formato inválido. Intenta otra vez. \
                 (la fecha inicial 20240120 es posterior a la final 20240110)"
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_all_mode_runs_pipeline() {
        let t = step(State::AwaitingDate, text("20240115"), MAX_DAYS);
        let dates = DateRange::single(jan(15));
        assert_eq!(
            t.next,
            State::AwaitingMode {
                dates: dates.clone()
            }
        );

        let t = step(t.next, text("  TODOS "), MAX_DAYS);
        assert_eq!(t.next, State::Idle);
        assert_eq!(
            t.effects,
            vec![
                Effect::Reply(messages::SEARCHING_ALL.to_string()),
                Effect::RunPipeline {
                    dates,
                    keywords: None
                },
            ]
        );
    }

    #[test]
    fn test_unknown_mode_reprompts() {
        let dates = DateRange::single(jan(15));
        let t = step(
            State::AwaitingMode {
                dates: dates.clone(),
            },
            text("algunos"),
            MAX_DAYS,
        );
        assert_eq!(t.next, State::AwaitingMode { dates });
        assert_eq!(
            t.effects,
            vec![Effect::Reply(messages::INVALID_MODE.to_string())]
        );
    }

    #[test]
    fn test_keyword_mode_runs_pipeline_with_normalized_list() {
        let t = step(State::AwaitingDate, text("20240101-20240103"), MAX_DAYS);
        let t = step(t.next, text("Palabras"), MAX_DAYS);
        let dates = DateRange::between(jan(1), jan(3)).unwrap();
        assert_eq!(
            t.next,
            State::AwaitingKeywords {
                dates: dates.clone()
            }
        );

        let t = step(t.next, text(" Shop, deal ,"), MAX_DAYS);
        assert_eq!(t.next, State::Idle);
        let keywords = vec!["shop".to_string(), "deal".to_string()];
        assert_eq!(
            t.effects,
            vec![
                Effect::Reply(messages::searching_keywords(&keywords)),
                Effect::RunPipeline {
                    dates,
                    keywords: Some(keywords)
                },
            ]
        );
    }

    #[test]
    fn test_empty_keyword_list_reprompts() {
        let dates = DateRange::single(jan(15));
        let state = State::AwaitingKeywords { dates };
        let t = step(state.clone(), text(" , ,"), MAX_DAYS);
        assert_eq!(t.next, state);
        assert_eq!(
            t.effects,
            vec![Effect::Reply(messages::NO_KEYWORDS.to_string())]
        );
    }

    #[test]
    fn test_commands_ignored_mid_session() {
        let t = step(State::AwaitingDate, Input::Start, MAX_DAYS);
        assert_eq!(t.next, State::AwaitingDate);
        assert!(t.effects.is_empty());

        let dates = DateRange::single(jan(15));
        let state = State::AwaitingMode { dates };
        let t = step(state.clone(), Input::Command("cancel".to_string()), MAX_DAYS);
        assert_eq!(t.next, state);
        assert!(t.effects.is_empty());
    }
}
