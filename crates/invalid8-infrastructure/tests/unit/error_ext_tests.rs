//! Error context helpers

use invalid8_domain::error::Error;
use invalid8_infrastructure::error_ext::{ContextKind, ErrorContext};
use std::error::Error as _;
use std::io;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    match failing_io().context("Failed to read config") {
        Err(Error::Infrastructure { message, source }) => {
            assert_eq!(message, "Failed to read config: no such file");
            assert!(source.is_some());
        }
        other => panic!("expected infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let error = failing_io().config_context("Bad settings").unwrap_err();

    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("Bad settings: no such file"));
}

#[test]
fn test_fetch_context_wraps_as_fetch_with_source() {
    let error = "forty-two"
        .parse::<u32>()
        .fetch_context("Count endpoint returned garbage")
        .unwrap_err();

    match &error {
        Error::Fetch { message, .. } => {
            assert!(message.starts_with("Count endpoint returned garbage: "));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert!(error.source().is_some());
}

#[test]
fn test_success_passes_through_untouched() {
    let ok: Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.context_as(ContextKind::Fetch, "unused").unwrap(), 7);
}
