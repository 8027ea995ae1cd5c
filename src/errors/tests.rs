//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, LoweringWarning, SemanticWarning};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.tac".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.is_lexical());
    assert!(!error.is_syntax());
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.tac".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.tac");
}

#[test]
fn test_syntax_error_names() {
    let position = Position(0, Rc::new("test.tac".to_string()));

    let cases = [
        (
            ErrorImpl::UnexpectedToken {
                token: "}".to_string(),
            },
            "UnexpectedToken",
        ),
        (
            ErrorImpl::UnexpectedTokenDetailed {
                token: "5".to_string(),
                message: "expected `=`".to_string(),
            },
            "UnexpectedTokenDetailed",
        ),
        (
            ErrorImpl::UnexpectedEndOfInput {
                expected: "`;`".to_string(),
            },
            "UnexpectedEndOfInput",
        ),
        (
            ErrorImpl::TrailingTokens {
                token: "5".to_string(),
            },
            "TrailingTokens",
        ),
    ];

    for (internal, name) in cases {
        let error = Error::new(internal, position.clone());
        assert_eq!(error.get_error_name(), name);
        assert!(error.is_syntax());
    }
}

#[test]
fn test_interchange_error_is_neither_lexical_nor_syntax() {
    let error = Error::new(
        ErrorImpl::Interchange {
            message: "unknown variant".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "Interchange");
    assert!(!error.is_lexical());
    assert!(!error.is_syntax());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.tac".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0, Rc::new("test.tac".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`}`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(7, Rc::new("main.tac".to_string())),
    );

    assert_eq!(error.to_string(), "unrecognised token: \"@\" at main.tac:7");
}

#[test]
fn test_semantic_warning_messages() {
    let undeclared = SemanticWarning::Undeclared {
        name: "y".to_string(),
        scope: "if".to_string(),
    };
    assert_eq!(
        undeclared.to_string(),
        "identifier \"y\" is not declared (used in scope \"if\")"
    );

    let duplicate = SemanticWarning::DuplicateDeclaration {
        name: "x".to_string(),
        scope: "global".to_string(),
    };
    assert_eq!(
        duplicate.to_string(),
        "duplicate declaration of \"x\" in scope \"global\""
    );
}

#[test]
fn test_lowering_warning_messages() {
    let unsupported = LoweringWarning::UnsupportedNode {
        kind: "ControlStructure".to_string(),
        value: Some("while".to_string()),
    };
    assert_eq!(
        unsupported.to_string(),
        "unsupported node kind ControlStructure (while)"
    );

    let bare = LoweringWarning::UnsupportedNode {
        kind: "Program".to_string(),
        value: None,
    };
    assert_eq!(bare.to_string(), "unsupported node kind Program");
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_source_too_large_tip() {
    let error = Error::new(
        ErrorImpl::SourceTooLarge { length: 5_000_000_000 },
        Position(0, Rc::new("big.tac".to_string())),
    );

    assert!(!error.is_lexical());
    assert!(!error.is_syntax());
    assert_eq!(
        error.get_tip().to_string(),
        "Source is 5000000000 bytes, offsets are limited to 4294967295 bytes"
    );
}
