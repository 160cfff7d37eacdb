use super::*;

// =============================================================
// parse_port
// =============================================================

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

// =============================================================
// HostConfig
// =============================================================

#[test]
fn from_lookup_reads_port() {
    let config = HostConfig::from_lookup(|key| (key == "PORT").then(|| "4100".to_owned())).unwrap();
    assert_eq!(config, HostConfig { port: 4100 });
}

#[test]
fn from_lookup_without_port_uses_default() {
    let config = HostConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let addr = HostConfig { port: 3000 }.bind_addr();
    assert_eq!(addr.to_string(), "0.0.0.0:3000");
}
