use delulu_interface::extract_json;

#[test]
fn bare_json_is_returned_trimmed() {
    assert_eq!(
        extract_json("  {\"a\": 1}\n").as_deref(),
        Some("{\"a\": 1}")
    );
}

#[test]
fn unlabeled_fence_is_unwrapped() {
    let response = "```\n{\"a\": [1, 2]}\n```";
    assert_eq!(extract_json(response).as_deref(), Some("{\"a\": [1, 2]}"));
}

#[test]
fn balanced_object_is_cut_out_of_prose() {
    let response = "The segment is {\"text\": \"A door {creaks}\", \"n\": {\"x\": 1}} as requested.";
    assert_eq!(
        extract_json(response).as_deref(),
        Some("{\"text\": \"A door {creaks}\", \"n\": {\"x\": 1}}")
    );
}

#[test]
fn escaped_quotes_do_not_end_strings() {
    let response = "Result: {\"text\": \"She said \\\"}\\\" softly\"} done";
    assert_eq!(
        extract_json(response).as_deref(),
        Some("{\"text\": \"She said \\\"}\\\" softly\"}")
    );
}

#[test]
fn truncated_fence_returns_remaining_content() {
    let response = "```json\n{\"a\": 1}";
    assert_eq!(extract_json(response).as_deref(), Some("{\"a\": 1}"));
}

#[test]
fn no_json_yields_none() {
    assert_eq!(extract_json("nothing to see"), None);
    assert_eq!(extract_json("{ unterminated"), None);
}

#[test]
fn bare_json_with_fence_markers_in_strings_is_kept_whole() {
    let response = r#"{"text": "She typed ```run``` into the terminal", "n": 1}"#;
    assert_eq!(extract_json(response).as_deref(), Some(response));
}

#[test]
fn bare_json_with_braces_in_strings_is_kept_whole() {
    let response = r#"  {"text": "} then { and {{ again", "choices": [{"text": "}"}]}  "#;
    assert_eq!(extract_json(response).as_deref(), Some(response.trim()));
}

#[test]
fn fenced_json_with_fence_markers_inside_falls_back_to_braces() {
    let response = "```json\n{\"text\": \"a ```code``` sample\"}\n```";
    assert_eq!(
        extract_json(response).as_deref(),
        Some("{\"text\": \"a ```code``` sample\"}")
    );
}
