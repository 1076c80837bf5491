//! Integration tests for the service layer through the public API.

use numstats::api::{RawInput, StatsRequest};
use numstats::services::{self, ParseError};

#[test]
fn test_describe_four_values() {
    let stats = services::describe(RawInput::from("1,2,3,4")).unwrap();

    assert_eq!(stats.count, 4);
    assert_eq!(stats.sum, 10.0);
    assert_eq!(stats.mean, 2.5);
    assert_eq!(stats.median, 2.5);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);
    assert!((stats.stdev_population - 1.118).abs() < 1e-3);
    assert!((stats.stdev_sample - 1.291).abs() < 1e-3);
    assert_eq!(stats.sorted_values, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_describe_single_value() {
    let stats = services::describe(RawInput::from(vec![5.0])).unwrap();

    assert_eq!(stats.count, 1);
    assert_eq!(stats.sum, 5.0);
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.median, 5.0);
    assert_eq!(stats.min, 5.0);
    assert_eq!(stats.max, 5.0);
    assert_eq!(stats.stdev_population, 0.0);
    assert!(stats.stdev_sample.is_nan());
    assert_eq!(stats.sorted_values, vec![5.0]);
}

#[test]
fn test_delimiter_equivalence() {
    let inputs = ["1,2,3", "1 2 3", "1, 2, 3"];
    for input in inputs {
        let numbers = services::parse(RawInput::from(input)).unwrap();
        assert_eq!(numbers.as_slice(), &[1.0, 2.0, 3.0], "input {input:?}");
    }
}

#[test]
fn test_string_and_list_agree() {
    let from_text = services::describe(RawInput::from("4 -1 2.5 2.5")).unwrap();
    let from_list = services::describe(RawInput::from(vec![4.0, -1.0, 2.5, 2.5])).unwrap();

    assert_eq!(from_text.sorted_values, from_list.sorted_values);
    assert_eq!(from_text.mean, from_list.mean);
    assert_eq!(from_text.stdev_sample, from_list.stdev_sample);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(
        services::describe(RawInput::from("")).unwrap_err(),
        ParseError::EmptyInput
    );
    assert_eq!(
        services::describe(RawInput::from(Vec::<f64>::new())).unwrap_err(),
        ParseError::EmptyInput
    );
}

#[test]
fn test_invalid_token() {
    let err = services::describe(RawInput::from("1, a, 3")).unwrap_err();
    assert!(matches!(err, ParseError::InvalidToken { ref token, position: 1 } if token == "a"));
}

#[test]
fn test_request_body_into_result() {
    let request: StatsRequest = serde_json::from_str(r#"{"numbers": [2, 8]}"#).unwrap();
    let stats = services::describe(request.numbers).unwrap();

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["mean"], 5.0);
    assert_eq!(json["stdevPopulation"], 3.0);
    assert_eq!(json["sorted"], serde_json::json!([2.0, 8.0]));
}
