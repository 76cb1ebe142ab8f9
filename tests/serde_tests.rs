#![cfg(feature = "serde")]

//! Integration tests for serde support of `Maybe` and `Either`.

use rstest::rstest;
use yafl::data::{Either, Maybe};

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<String> = Maybe::Just("value".to_string());
    let absent: Maybe<String> = Maybe::Nothing;

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Maybe<String> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<String> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn test_maybe_json_format() {
    let present: Maybe<i32> = Maybe::Just(42);
    let absent: Maybe<i32> = Maybe::Nothing;

    assert_eq!(serde_json::to_string(&present).unwrap(), r#"{"Just":42}"#);
    assert_eq!(serde_json::to_string(&absent).unwrap(), r#""Nothing""#);
}

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let failed: Either<String, i32> = Either::Error("error".to_string());
    let succeeded: Either<String, i32> = Either::Ok(42);

    let failed_json = serde_json::to_string(&failed).unwrap();
    let succeeded_json = serde_json::to_string(&succeeded).unwrap();

    let restored_failed: Either<String, i32> = serde_json::from_str(&failed_json).unwrap();
    let restored_succeeded: Either<String, i32> = serde_json::from_str(&succeeded_json).unwrap();

    assert_eq!(failed, restored_failed);
    assert_eq!(succeeded, restored_succeeded);
}

#[rstest]
fn test_either_json_format() {
    let failed: Either<String, i32> = Either::Error("bad".to_string());
    let succeeded: Either<String, i32> = Either::Ok(7);

    assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"Error":"bad"}"#);
    assert_eq!(serde_json::to_string(&succeeded).unwrap(), r#"{"Ok":7}"#);
}

#[rstest]
fn test_nested_in_struct() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Lookup {
        key: String,
        hit: Maybe<Either<String, u32>>,
    }

    let lookup = Lookup {
        key: "answer".to_string(),
        hit: Maybe::Just(Either::Ok(42)),
    };

    let json = serde_json::to_string(&lookup).unwrap();
    let restored: Lookup = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, lookup);
}

#[rstest]
fn test_rejects_unknown_variant() {
    let parsed: Result<Maybe<i32>, _> = serde_json::from_str(r#"{"Some":1}"#);
    assert!(parsed.is_err());
}
