use super::*;

#[test]
fn config_error_converts_transparently() {
    let err = ServerError::from(ConfigError::InvalidPort("abc".into()));
    assert!(matches!(err, ServerError::Config(ConfigError::InvalidPort(_))));
    assert_eq!(err.to_string(), "invalid PORT: abc");
}

#[test]
fn bind_error_names_address() {
    let err = ServerError::Bind {
        addr: "127.0.0.1:3000".parse().unwrap(),
        source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
    };
    assert_eq!(err.to_string(), "failed to bind 127.0.0.1:3000: address in use");
}

#[test]
fn leptos_config_error_message() {
    let err = ServerError::LeptosConfig("missing site root".into());
    assert_eq!(err.to_string(), "leptos configuration: missing site root");
}
