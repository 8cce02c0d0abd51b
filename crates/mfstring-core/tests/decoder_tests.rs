/// Strict list decoding.
use mfstring_core::{
    decode, decode_with, DecodeOptions, ListEncodingError, SlashEncodingError, SlashErrorReason,
    Strictness,
};

fn strict(text: &str) -> Result<Vec<String>, ListEncodingError> {
    decode(text, Strictness::Strict)
}

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn decode_empty_text() {
    assert_eq!(strict("").unwrap(), Vec::<String>::new());
}

#[test]
fn decode_only_separators() {
    assert_eq!(strict(" ,\n\r\t ").unwrap(), Vec::<String>::new());
}

#[test]
fn decode_two_items() {
    assert_eq!(strict(r#""apple" "pear""#).unwrap(), vec!["apple", "pear"]);
}

#[test]
fn decode_empty_item() {
    assert_eq!(strict(r#""""#).unwrap(), vec![""]);
    assert_eq!(strict(r#""" """#).unwrap(), vec!["", ""]);
}

#[test]
fn decode_items_without_separator() {
    assert_eq!(strict(r#""a""b""#).unwrap(), vec!["a", "b"]);
}

#[test]
fn decode_all_separator_kinds() {
    let text = "\"a\",\"b\"\n\"c\"\r\n\t\"d\" , \"e\"";
    assert_eq!(strict(text).unwrap(), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn decode_leading_and_trailing_separators() {
    assert_eq!(strict("  \"a\" \"b\"\n").unwrap(), vec!["a", "b"]);
}

#[test]
fn decode_escaped_quote_does_not_end_item() {
    assert_eq!(strict(r#""say \"hi\"""#).unwrap(), vec![r#"say "hi""#]);
}

#[test]
fn decode_escaped_backslash_before_closing_quote() {
    assert_eq!(
        strict(r#""final slash\\" "next""#).unwrap(),
        vec![r"final slash\", "next"]
    );
}

#[test]
fn decode_whitespace_inside_items_is_preserved() {
    assert_eq!(
        strict("\" padded \" \"two\nlines\"").unwrap(),
        vec![" padded ", "two\nlines"]
    );
}

#[test]
fn decode_unicode_items() {
    let text = "\"caf\u{00e9}\" \"\u{4f60}\u{597d}\" \"\u{1f600}\"";
    assert_eq!(strict(text).unwrap(), vec!["caf\u{00e9}", "\u{4f60}\u{597d}", "\u{1f600}"]);
}

#[test]
fn decode_classic_encoding_sample() {
    let text = concat!(
        r#""MFString in classic encoding." "#,
        r#""You should see single backslash: \\" "#,
        r#""You should see double quote: \"""#,
    );
    assert_eq!(
        strict(text).unwrap(),
        vec![
            "MFString in classic encoding.",
            r"You should see single backslash: \",
            r#"You should see double quote: ""#,
        ]
    );
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn decode_unterminated_item_fails() {
    let err = strict(r#""apple" "this item never ends\""#).unwrap_err();
    assert_eq!(
        err,
        ListEncodingError::Unterminated {
            offset: 8,
            remainder: r#"this item never ends\""#.to_string(),
        }
    );
    assert!(err
        .to_string()
        .contains("encoded MFString not terminated by unescaped quote"));
}

#[test]
fn decode_lone_quote_fails() {
    let err = strict("\"").unwrap_err();
    assert_eq!(
        err,
        ListEncodingError::Unterminated {
            offset: 0,
            remainder: String::new(),
        }
    );
}

#[test]
fn decode_unexpected_character_fails() {
    let err = strict(r#""apple" x "pear""#).unwrap_err();
    assert_eq!(err, ListEncodingError::UnexpectedCharacter { ch: 'x', offset: 8 });
    assert_eq!(err.offset(), 8);
}

#[test]
fn decode_unquoted_text_fails() {
    let err = strict("apple").unwrap_err();
    assert_eq!(err, ListEncodingError::UnexpectedCharacter { ch: 'a', offset: 0 });
}

#[test]
fn decode_invalid_escape_in_item_fails() {
    let err = strict(r#""apple" "bad \x" "pear""#).unwrap_err();
    assert_eq!(
        err,
        ListEncodingError::InvalidItem {
            offset: 9,
            source: SlashEncodingError {
                input: r"bad \x".to_string(),
                offset: 4,
                reason: SlashErrorReason::InvalidEscape('x'),
            },
        }
    );
}

#[test]
fn decode_invalid_item_exposes_source() {
    use std::error::Error;

    let err = strict(r#""bad \x""#).unwrap_err();
    let source = err.source().expect("InvalidItem carries its slash error");
    assert!(source.to_string().contains("invalid slash-encoded value"));
}

#[test]
fn strict_decode_never_reports_to_sink() {
    let mut warnings: Vec<ListEncodingError> = Vec::new();
    let result = decode_with(r#"x "apple""#, &DecodeOptions::strict(), &mut warnings);
    assert!(result.is_err());
    assert!(warnings.is_empty());
}
