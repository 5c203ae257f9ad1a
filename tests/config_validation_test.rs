use minimart::config::{AppConfig, LogFormat, ServerConfig};

#[test]
fn default_configuration_is_valid() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.logging.level, "info");
    assert!(matches!(config.logging.format, LogFormat::Json));

    config.validate().expect("defaults should validate");
}

#[test]
fn blank_host_is_rejected() {
    let config = AppConfig {
        server: ServerConfig {
            host: "   ".to_string(),
            port: 3000,
        },
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, minimart::Error::Config(_)));
}
