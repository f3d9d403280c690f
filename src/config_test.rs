use super::*;

#[test]
fn parse_port_defaults_when_absent() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("not-a-port")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT: not-a-port"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn normalize_redirect_keeps_url() {
    assert_eq!(
        normalize_redirect(Some("https://example.test/".into())).as_deref(),
        Some("https://example.test/")
    );
}

#[test]
fn normalize_redirect_trims() {
    assert_eq!(
        normalize_redirect(Some("  https://example.test  ".into())).as_deref(),
        Some("https://example.test")
    );
}

#[test]
fn normalize_redirect_drops_blank() {
    assert_eq!(normalize_redirect(Some("   ".into())), None);
    assert_eq!(normalize_redirect(None), None);
}
