use focusdesk::clients::gemini::{error_summary, extract_candidate_text, CoachError};

#[test]
fn extracts_first_candidate_text_verbatim() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"Block your calendar."}]}}]}"#;
    assert_eq!(extract_candidate_text(body).unwrap(), "Block your calendar.");
}

#[test]
fn first_candidate_wins_when_several_are_returned() {
    let body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "first"}, {"text": "second part"}]}},
            {"content": {"parts": [{"text": "other candidate"}]}}
        ]
    }"#;
    assert_eq!(extract_candidate_text(body).unwrap(), "first");
}

#[test]
fn missing_candidates_is_an_empty_reply() {
    for body in [
        "{}",
        r#"{"candidates":[]}"#,
        r#"{"candidates":[{"content":null}]}"#,
        r#"{"candidates":[{"content":{"parts":[]}}]}"#,
        "not json at all",
    ] {
        assert!(matches!(
            extract_candidate_text(body),
            Err(CoachError::EmptyReply)
        ));
    }
}

#[test]
fn error_summary_prefers_the_upstream_message() {
    let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
    assert_eq!(error_summary(body), "Resource has been exhausted");
}

#[test]
fn error_summary_truncates_opaque_bodies() {
    let body = "x".repeat(2000);
    let summary = error_summary(&body);
    assert!(summary.len() < 400);
    assert!(summary.ends_with("..."));
}

#[test]
fn status_error_displays_code_and_body() {
    let err = CoachError::Status {
        code: 429,
        body: "Resource has been exhausted".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("429"));
    assert!(text.contains("Resource has been exhausted"));
}
