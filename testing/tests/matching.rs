//! Matching, ordering and verification behavior of the mock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use respmock_core::prelude::*;
use respmock_testing::helpers::init_test_tracing;
use respmock_testing::{
    ExpectedInt, ExpectedString, MatchOrder, MockConfig, MockError, new_mock, new_mock_with_config,
};
use std::time::Duration;

fn mock_error(err: &Error) -> &MockError {
    err.downcast_ref::<MockError>()
        .expect("error should be raised by the mock")
}

#[test]
fn test_get_value_then_nil() {
    init_test_tracing();
    let (client, mock) = new_mock();
    mock.expect_get("user:1").set_val("ada");
    mock.expect_get("user:2").redis_nil();

    assert_eq!(client.get("user:1").result().unwrap(), "ada");

    let reply = client.get("user:2");
    assert_eq!(reply.val(), "");
    assert_eq!(reply.result(), Err(Error::Nil));

    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_scan_page_and_cursor() {
    let (client, mock) = new_mock();
    let page = vec!["key1".to_string(), "key2".to_string(), "key3".to_string()];
    mock.expect_scan(0, "key*", 3).set_val(page.clone(), 5_u64);

    let (got, cursor) = client.scan(0, "key*", 3).result().unwrap();
    assert_eq!(got, page);
    assert_eq!(cursor, 5);
}

#[test]
fn test_server_error_passes_through() {
    let (client, mock) = new_mock();
    mock.expect_incr("name")
        .set_err(Error::server("ERR value is not an integer or out of range"));

    let reply = client.incr("name");
    assert_eq!(*reply.val(), 0);
    assert_eq!(
        reply.result(),
        Err(Error::server("ERR value is not an integer or out of range"))
    );
}

#[test]
fn test_strict_order_mismatch_leaves_head_pending() {
    let (client, mock) = new_mock();
    mock.expect_get("a").set_val("1");
    mock.expect_get("b").set_val("2");

    let err = client.get("b").result().unwrap_err();
    assert_eq!(
        mock_error(&err),
        &MockError::Mismatch {
            expected: "get a".to_string(),
            actual: "get b".to_string(),
            reason: "argument 0 is 'b', expected 'a'".to_string(),
        }
    );

    assert_eq!(client.get("a").result().unwrap(), "1");
    assert_eq!(client.get("b").result().unwrap(), "2");
    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_mismatched_arguments_are_reported() {
    let (client, mock) = new_mock();
    mock.expect_set("key", "value", Some(Duration::from_secs(10)))
        .set_val("OK");

    let err = client
        .set("key", "value", Some(Duration::from_secs(20)))
        .result()
        .unwrap_err();
    assert!(matches!(
        mock_error(&err),
        MockError::Mismatch { reason, .. } if reason.contains("argument 3")
    ));
}

#[test]
fn test_unexpected_call_after_clear() {
    let (client, mock) = new_mock();
    mock.expect_get("a").set_val("1");
    mock.clear_expect();

    let err = client.get("a").result().unwrap_err();
    assert_eq!(
        mock_error(&err),
        &MockError::UnexpectedCall {
            command: "get a".to_string()
        }
    );
    assert!(mock.expectations().is_empty());
    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_expectation_is_single_use_by_default() {
    let (client, mock) = new_mock();
    mock.expect_get("key").set_val("value");

    assert_eq!(client.get("key").result().unwrap(), "value");
    let err = client.get("key").result().unwrap_err();
    assert!(matches!(mock_error(&err), MockError::UnexpectedCall { .. }));
}

#[test]
fn test_unmet_expectations_are_listed() {
    let (client, mock) = new_mock();
    mock.expect_get("a").set_val("1");
    mock.expect_get("b").set_val("2");
    mock.unordered().expect_incr("hits").set_val(1);

    client.get("a").result().unwrap();

    assert_eq!(
        mock.expectations_were_met(),
        Err(MockError::Unmet {
            pending: vec!["get b".to_string(), "incr hits".to_string()]
        })
    );
}

#[test]
fn test_any_order_when_ordering_is_off() {
    let (client, mock) = new_mock();
    mock.match_expectations_in_order(false);
    mock.expect_get("a").set_val("1");
    mock.expect_get("b").set_val("2");

    assert_eq!(client.get("b").result().unwrap(), "2");
    assert_eq!(client.get("a").result().unwrap(), "1");
    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_ordering_can_be_disabled_by_config() {
    let config = MockConfig::builder().match_in_order(false).build();
    let (client, mock) = new_mock_with_config(config);
    mock.expect_incr("b").set_val(2);
    mock.expect_incr("a").set_val(1);

    assert_eq!(client.incr("a").result().unwrap(), 1);
    assert_eq!(client.incr("b").result().unwrap(), 2);
}

#[test]
fn test_unordered_expectation_matches_ahead_of_strict_sequence() {
    let (client, mock) = new_mock();
    mock.expect_get("a").set_val("1");
    mock.unordered().expect_ping().set_val("PONG");
    mock.expect_get("b").set_val("2");

    assert_eq!(client.get("a").result().unwrap(), "1");
    assert_eq!(client.get("b").result().unwrap(), "2");
    assert_eq!(client.ping().result().unwrap(), "PONG");
    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_modifiers_do_not_leak_into_original_handle() {
    let (_client, mock) = new_mock();
    mock.unordered().expect_ping();
    mock.expect_echo("hi");

    let orders: Vec<MatchOrder> = mock.expectations().iter().map(|e| e.order).collect();
    assert_eq!(orders, vec![MatchOrder::Unordered, MatchOrder::Strict]);
}

#[test]
fn test_times_allows_repeated_calls() {
    let (client, mock) = new_mock();
    mock.times(3).expect_incr("hits").set_val(7);

    for _ in 0..2 {
        assert_eq!(client.incr("hits").result().unwrap(), 7);
    }
    assert!(matches!(
        mock.expectations_were_met(),
        Err(MockError::Unmet { .. })
    ));

    assert_eq!(client.incr("hits").result().unwrap(), 7);
    assert!(mock.expectations_were_met().is_ok());

    let info = &mock.expectations()[0];
    assert_eq!((info.times, info.triggered), (3, 3));
    assert!(info.is_consumed());
}

#[test]
fn test_regexp_arguments() {
    let (client, mock) = new_mock();
    mock.regexp()
        .expect_set("session:[a-f0-9]+", ".*", Some(Duration::from_secs(30)))
        .set_val("OK");

    let reply = client.set("session:9f2c", "payload", Some(Duration::from_secs(30)));
    assert_eq!(reply.result().unwrap(), "OK");
}

#[test]
fn test_regexp_by_default_from_config() {
    let config = MockConfig::builder().regexp_by_default(true).build();
    let (client, mock) = new_mock_with_config(config);
    mock.expect_get("^user:[0-9]+$").set_val("ada");

    let err = client.get("user:x").result().unwrap_err();
    assert!(matches!(mock_error(&err), MockError::Mismatch { .. }));
    assert_eq!(client.get("user:42").result().unwrap(), "ada");
}

#[test]
fn test_invalid_pattern_fails_the_call() {
    let (client, mock) = new_mock();
    mock.regexp().expect_get("user:(").set_val("ada");

    let err = client.get("user:1").result().unwrap_err();
    assert!(matches!(
        mock_error(&err),
        MockError::InvalidPattern { pattern, .. } if pattern == "user:("
    ));
}

#[test]
fn test_invalid_pattern_in_unordered_pool() {
    let (client, mock) = new_mock();
    mock.unordered().regexp().expect_get("user:(").set_val("ada");

    let err = client.get("user:1").result().unwrap_err();
    assert!(matches!(
        mock_error(&err),
        MockError::InvalidPattern { pattern, .. } if pattern == "user:("
    ));

    mock.match_expectations_in_order(false);
    mock.regexp().expect_get("session:(").set_val("s");
    let err = client.get("session:1").result().unwrap_err();
    assert!(matches!(mock_error(&err), MockError::InvalidPattern { .. }));
}

#[test]
fn test_custom_match() {
    let (client, mock) = new_mock();
    mock.custom_match(|expected: &Command, actual: &Command| {
        if actual.arguments().first() == expected.arguments().first() {
            Ok(())
        } else {
            Err("different key".to_string())
        }
    })
    .expect_set("key", "ignored", None)
    .set_val("OK");

    assert_eq!(
        client
            .set("key", "anything", Some(Duration::from_secs(1)))
            .result()
            .unwrap(),
        "OK"
    );
}

#[test]
fn test_custom_match_rejection() {
    let (client, mock) = new_mock();
    mock.custom_match(|_: &Command, _: &Command| Err("never".to_string()))
        .expect_del(&["a"])
        .set_val(1);

    let err = client.del(&["a"]).result().unwrap_err();
    assert!(matches!(
        mock_error(&err),
        MockError::Mismatch { reason, .. } if reason == "never"
    ));
}

#[test]
fn test_shape_mismatch_is_an_error() {
    let (client, mock) = new_mock();
    let expected: ExpectedString = mock.expect_command(Command::new("incr").arg("n"));
    expected.set_val("1");

    let err = client.incr("n").result().unwrap_err();
    assert!(matches!(mock_error(&err), MockError::ShapeMismatch { .. }));
    assert_eq!(mock.expectations().len(), 1);
    assert!(mock.expectations_were_met().is_err());
}

#[test]
fn test_any_order_picks_expectation_of_matching_shape() {
    let (client, mock) = new_mock();
    mock.match_expectations_in_order(false);
    let as_string: ExpectedString = mock.expect_command(Command::new("incr").arg("n"));
    as_string.set_val("1");
    let as_int: ExpectedInt = mock.expect_command(Command::new("incr").arg("n"));
    as_int.set_val(5);

    assert_eq!(client.incr("n").result().unwrap(), 5);
    let err = client.incr("n").result().unwrap_err();
    assert!(matches!(mock_error(&err), MockError::ShapeMismatch { .. }));
    assert!(mock.expectations_were_met().is_err());
}

#[test]
fn test_generic_expect_uses_client_method() {
    let (client, mock) = new_mock();
    let expected: ExpectedInt = mock.expect(|c| c.hset("h", &[("f", "v")]));
    expected.set_val(1);

    assert_eq!(client.hset("h", &[("f", "v")]).result().unwrap(), 1);
}

#[test]
fn test_last_configuration_wins() {
    let (client, mock) = new_mock();
    let expected = mock.expect_get("k");
    expected.set_err(Error::server("ERR first"));
    expected.set_val("second");

    assert_eq!(client.get("k").result().unwrap(), "second");
}

#[test]
fn test_clones_share_expectations() {
    let (client, mock) = new_mock();
    let expected = mock.expect_lpop("queue");
    let worker = client.clone();
    expected.set_val("job-1");

    assert_eq!(worker.lpop("queue").result().unwrap(), "job-1");
    assert!(client.lpop("queue").result().is_err());
    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_binary_arguments_match_exactly() {
    let (client, mock) = new_mock();
    mock.expect_set("blob", vec![0x00_u8, 0xff, 0x10], None)
        .set_val("OK");

    let err = client
        .set("blob", vec![0x00_u8, 0xfe, 0x10], None)
        .result()
        .unwrap_err();
    assert!(matches!(mock_error(&err), MockError::Mismatch { .. }));
    assert_eq!(
        client
            .set("blob", vec![0x00_u8, 0xff, 0x10], None)
            .result()
            .unwrap(),
        "OK"
    );
}

#[test]
fn test_mock_errors_render_readably() {
    let err = MockError::Unmet {
        pending: vec!["get a".to_string(), "get b".to_string()],
    };
    assert_eq!(err.to_string(), "there are 2 unmet expectations: get a; get b");
}
