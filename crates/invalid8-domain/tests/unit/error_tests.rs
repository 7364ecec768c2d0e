//! Error construction and display

use invalid8_domain::error::Error;

#[test]
fn test_not_connected_display() {
    let error = Error::not_connected("memory");

    assert!(error.is_not_connected());
    assert_eq!(error.to_string(), "memory adapter is not connected");
}

#[test]
fn test_fetch_keeps_message_and_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    let error = Error::fetch_with_source("user lookup", io);

    assert_eq!(error.to_string(), "Fetch failed: user lookup");
    assert!(std::error::Error::source(&error).is_some());
    assert!(!error.is_not_connected());
}

#[test]
fn test_unknown_adapter_lists_choices() {
    let error = Error::UnknownAdapter {
        name: "memcached".to_string(),
        available: vec!["memory", "redis"],
    };

    let message = error.to_string();
    assert!(message.contains("memcached"));
    assert!(message.contains("redis"));
}

#[test]
fn test_json_errors_convert() {
    let parse = serde_json::from_str::<u32>("not json").unwrap_err();
    let error: Error = parse.into();

    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_string_conversions() {
    assert_eq!(Error::from("plain").to_string(), "plain");
    assert_eq!(Error::from(String::from("owned")).to_string(), "owned");
}
