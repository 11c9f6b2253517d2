use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_blank_values_use_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_vars_reads_host_and_port() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6_host() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("3000")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_vars_rejects_non_numeric_port() {
    assert_eq!(
        ServerConfig::from_vars(None, Some("http")),
        Err(ConfigError::InvalidPort("http".into()))
    );
}

#[test]
fn from_vars_rejects_out_of_range_port() {
    assert_eq!(
        ServerConfig::from_vars(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".into()))
    );
}

#[test]
fn from_vars_rejects_hostname() {
    assert_eq!(
        ServerConfig::from_vars(Some("localhost"), None),
        Err(ConfigError::InvalidAddr("localhost".into()))
    );
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
    assert_eq!(ConfigError::InvalidAddr("y".into()).to_string(), "invalid HOST: y");
}
