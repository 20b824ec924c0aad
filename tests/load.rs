use std::time::Duration;

use modbus_ip_config::{ConfigError, DeviceConnectionConfig, DEFAULT_TIMEOUT};

#[test]
fn load_defaults_timeout() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = DeviceConnectionConfig::load("host: 10.0.0.5\nport: 502\n")?;
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.timeout()?, Duration::from_secs(5));
    assert_eq!(config.address(), "10.0.0.5:502");
    Ok(())
}

#[test]
fn load_fails_fast_on_missing_host() {
    let err = DeviceConnectionConfig::load("port: 502\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingRequiredField { field: "host", .. }
    ));
}

#[test]
fn load_fails_fast_on_missing_port() {
    let err = DeviceConnectionConfig::load("host: 10.0.0.5\ntimeout: 10s\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingRequiredField { field: "port", .. }
    ));
    assert!(err.to_string().starts_with("'port'"));
}

#[test]
fn load_keeps_explicit_values() -> anyhow::Result<()> {
    let config = DeviceConnectionConfig::load(
        "host: plc-2\nport: 5020\nslaveId: 7\ntimeout: 1h30m\nfailOnError: true\n",
    )?;
    assert_eq!(config.slave_id, 7);
    assert!(config.fail_on_error);
    assert_eq!(config.timeout, "1h30m");
    assert_eq!(config.timeout()?, Duration::from_secs(5400));
    Ok(())
}

#[test]
fn load_does_not_check_timeout_format() {
    // a malformed timeout only surfaces when the consumer parses it
    let config = DeviceConnectionConfig::load("host: plc\nport: 502\ntimeout: abc\n").unwrap();
    assert!(matches!(
        config.timeout(),
        Err(ConfigError::InvalidDurationFormat { .. })
    ));
}
