use anyhow::{Context, Result};
use modbus_ip_config::DeviceConnectionConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{:#}", &e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: modbus_ip_config <device.yaml>")?;

    let doc = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let out = check(&doc).with_context(|| format!("loading {path}"))?;
    print!("{}", out);
    Ok(())
}

/// Load and validate one device document, returning the effective config as YAML.
fn check(doc: &str) -> Result<String> {
    let config = DeviceConnectionConfig::load(doc)?;
    let timeout = config.timeout()?;

    log::info!("device {} ok, timeout: {:?}", config.address(), &timeout);
    Ok(serde_yaml::to_string(&config)?)
}
