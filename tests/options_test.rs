use trivia_query::{Difficulty, QueryKey, TriviaOptions};

#[test]
fn test_options_defaults() {
    let opts = TriviaOptions::default();
    assert_eq!(opts.difficulty, Difficulty::All);
    assert_eq!(opts.offset, 0);
    assert!(opts.limit.is_none());
    assert!(opts.enabled);
}

#[test]
fn test_options_builder() {
    let opts = TriviaOptions::default()
        .difficulty(Difficulty::Hard)
        .offset(20)
        .limit(10)
        .enabled(false);

    assert_eq!(opts.difficulty, Difficulty::Hard);
    assert_eq!(opts.offset, 20);
    assert_eq!(opts.limit, Some(10));
    assert!(!opts.enabled);
}

#[test]
fn test_options_deserialize_with_missing_fields() {
    let opts: TriviaOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, TriviaOptions::default());

    let opts: TriviaOptions =
        serde_json::from_str(r#"{"difficulty": "easy", "limit": null}"#).unwrap();
    assert_eq!(opts.difficulty, Difficulty::Easy);
    assert!(opts.limit.is_none());
    assert!(opts.enabled);
}

#[test]
fn test_absent_limit_keys_agree() {
    for difficulty in [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::All,
    ] {
        for offset in [0, 1, 25, u32::MAX] {
            let omitted = TriviaOptions::default().difficulty(difficulty).offset(offset);
            let cleared = omitted.clone().limit(3).no_limit();
            let parsed: TriviaOptions = serde_json::from_value(serde_json::json!({
                "difficulty": difficulty,
                "offset": offset,
                "limit": null,
            }))
            .unwrap();

            let expected = QueryKey::new(difficulty, offset, None);
            assert_eq!(QueryKey::from(&omitted), expected);
            assert_eq!(QueryKey::from(&cleared), expected);
            assert_eq!(QueryKey::from(&parsed), expected);
        }
    }
}
