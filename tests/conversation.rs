//! End-to-end conversations through the public API.
//!
//! Run with: cargo test --test conversation

use std::collections::HashMap;
use std::io::Write;

use meha::config::{Config, TOKEN_VAR};
use meha::responder::defaults;
use meha::responder::{ConversationState, Emotion, Responder};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

fn responder() -> Responder {
    Responder::new(Default::default()).expect("builtin content is valid")
}

#[test]
fn test_full_conversation() {
    let r = responder();
    let mut state = ConversationState::new();
    let mut rng = StdRng::seed_from_u64(42);

    let first = r.handle(&mut state, "hello", &mut rng);
    assert_eq!(first.messages(), vec![defaults::WELCOME, defaults::GENERIC_PROMPT]);

    let second = r.handle(&mut state, "I feel so overwhelmed", &mut rng);
    assert_eq!(second.welcome, None);
    assert!(second.body.ends_with(defaults::EXERCISE_FOLLOW_UP));
    assert!(state.last_exercise(Emotion::Stress).is_some());

    let third = r.handle(&mut state, "ok, a story please", &mut rng);
    assert!(third.body.ends_with(defaults::STORY_FOLLOW_UP));

    let fourth = r.handle(&mut state, "now a joke", &mut rng);
    assert!(fourth.body.ends_with(defaults::JOKE_FOLLOW_UP));

    let last = r.handle(&mut state, "Quit", &mut rng);
    assert_eq!(last.text(), defaults::CLOSING);
}

#[test]
fn test_conversations_are_isolated() {
    let r = responder();
    let mut store: HashMap<i64, ConversationState> = HashMap::new();
    let mut rng = StdRng::seed_from_u64(7);

    let a = r.handle(store.entry(1).or_default(), "I'm angry", &mut rng);
    let b = r.handle(store.entry(2).or_default(), "hi", &mut rng);
    let a_again = r.handle(store.entry(1).or_default(), "hi", &mut rng);

    assert!(a.welcome.is_some());
    assert!(b.welcome.is_some());
    assert!(a_again.welcome.is_none());
    assert!(store[&1].last_exercise(Emotion::Anger).is_some());
    assert!(store[&2].last_exercise(Emotion::Anger).is_none());
}

#[test]
fn test_concurrent_conversations() {
    let r = responder();
    let replies: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let r = &r;
                s.spawn(move || {
                    let mut state = ConversationState::new();
                    let mut rng = StdRng::seed_from_u64(seed);
                    let mut last = String::new();
                    for _ in 0..50 {
                        last = r.handle(&mut state, "feeling lonely", &mut rng).body;
                    }
                    last
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for reply in replies {
        assert!(reply.ends_with(defaults::EXERCISE_FOLLOW_UP));
    }
}

#[test]
fn test_responder_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
        "content": {
            "keywords": [
                { "emotion": "anxiety", "words": ["panic"] },
                { "emotion": "stress", "words": ["panic", "pressure"] },
                { "emotion": "sadness", "words": ["blue"] },
                { "emotion": "motivation", "words": ["stuck"] },
                { "emotion": "loneliness", "words": ["alone"] },
                { "emotion": "anger", "words": ["mad"] },
                { "emotion": "confusion", "words": ["puzzled"] }
            ]
        }
    }"#,
    )
    .unwrap();

    let config = Config::load_with_env(Some(file.path()), |var| {
        (var == TOKEN_VAR).then(|| "42:secret".to_string())
    })
    .unwrap();
    let r = Responder::new(config.content).unwrap();

    // shared keyword goes to the first declared category
    assert_eq!(r.detect_emotion("PANIC!"), Emotion::Anxiety);
    assert_eq!(r.detect_emotion("so much pressure"), Emotion::Stress);
    assert_eq!(r.detect_emotion("anxious"), Emotion::Neutral);
}

#[test]
fn test_malformed_content_fails_at_startup() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "content": { "exercises": { "anxiety": ["breathe"] } } }"#).unwrap();

    let config = Config::load_with_env(Some(file.path()), |var| {
        (var == TOKEN_VAR).then(|| "42:secret".to_string())
    })
    .unwrap();
    let err = Responder::new(config.content).unwrap_err();
    assert!(err.to_string().contains("no exercises for 'stress'"));
}
