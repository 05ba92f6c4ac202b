use proptest::prelude::*;
use rstest::rstest;
use vocabtape::vocab::{NormalizeError, is_secret_command, normalize};

#[rstest]
#[case("", "Invalid JSON")]
#[case("{\"fr\": \"chat\"}", "JSON must be an array")]
#[case("[1]", "Row 1 is not an object")]
#[case("[{\"fr\": \"chat\", \"de\": \"Katze\"}, []]", "Row 2 is not an object")]
#[case("[[\"chat\", \"Katze\"]]", "Row 1 is not an object")]
#[case("[{\"fr\": \"chat\", \"n\": 3}]", "Row 1 must contain at least two string fields")]
fn test_rejected_input_messages(#[case] input: &str, #[case] expected: &str) {
    let err = normalize(input).err().map(|e| e.to_string()).unwrap_or_default();
    assert!(err.starts_with(expected), "{err:?} should start with {expected:?}");
}

#[test]
fn test_non_string_fields_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let rows = normalize(r#"[{"fr": "chat", "n": 1, "de": "Katze", "tags": ["a"]}]"#)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].keys().collect::<Vec<_>>(), ["fr", "de"]);
    Ok(())
}

#[test]
fn test_row_position_is_one_based() {
    let err = normalize(r#"[{"a": "1", "b": "2"}, {"a": "1", "b": "2"}, "x"]"#).err();
    assert_eq!(err, Some(NormalizeError::RowNotObject { row: 3 }));
    assert_eq!(err.and_then(|e| e.row()), Some(3));
}

#[rstest]
#[case("secret website", true)]
#[case("  Secret Website\n", true)]
#[case("SECRET WEBSITE", true)]
#[case("secret  website", false)]
#[case("secret", false)]
fn test_secret_phrase_matching(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_secret_command(input), expected);
}

fn deck_rows() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z ]{0,12}", "[A-Za-z]{0,12}"), 0..20)
}

proptest! {
    #[test]
    fn prop_two_string_fields_always_normalize(rows in deck_rows()) {
        let json = serde_json::to_string(
            &rows
                .iter()
                .map(|(fr, de)| serde_json::json!({ "fr": fr, "de": de }))
                .collect::<Vec<_>>(),
        )?;
        let parsed = normalize(&json);
        prop_assert!(parsed.is_ok());
        let parsed = parsed.unwrap_or_default();
        prop_assert_eq!(parsed.len(), rows.len());
        for (row, (fr, de)) in parsed.iter().zip(&rows) {
            prop_assert_eq!(row.get("fr"), Some(fr.as_str()));
            prop_assert_eq!(row.get("de"), Some(de.as_str()));
        }
    }

    #[test]
    fn prop_secret_phrase_is_never_a_deck(pad_left in "[ \t]{0,3}", pad_right in "[ \t\n]{0,3}") {
        let input = format!("{pad_left}secret website{pad_right}");
        prop_assert!(is_secret_command(&input));
        prop_assert!(normalize(&input).is_err());
    }
}
