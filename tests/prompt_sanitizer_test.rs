use lexrelay::infrastructure::observability::sanitize_prompt;

#[test]
fn given_short_prompt_when_sanitizing_then_returned_trimmed() {
    assert_eq!(sanitize_prompt("  what is a lien?  "), "what is a lien?");
}

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncated_with_length_note() {
    let long = "a".repeat(250);
    let sanitized = sanitize_prompt(&long);

    assert!(sanitized.len() < long.len());
    assert!(sanitized.contains("250 chars total"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacted() {
    let sanitized = sanitize_prompt("use Bearer sk-abc123 for auth");

    assert!(!sanitized.contains("sk-abc123"));
    assert!(sanitized.contains("[REDACTED]"));
}

#[test]
fn given_api_key_parameter_when_sanitizing_then_redacted() {
    let sanitized = sanitize_prompt("call it with api_key=secret-value please");

    assert!(!sanitized.contains("secret-value"));
    assert!(sanitized.contains("api_key=[REDACTED]"));
}
