// Environment configuration, loaded once at startup
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub traccar_url: String,
    pub traccar_user: String,
    pub traccar_password: String,
    pub mapbox_url: String,
    pub mapbox_token: String,
    pub drawings_file: String,
    pub public_dir: String,
}

fn builder_with_defaults()
-> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("port", 3000)?
        .set_default("traccar_url", "https://demo2.traccar.org")?
        .set_default("traccar_user", "")?
        .set_default("traccar_password", "")?
        .set_default("mapbox_url", "https://api.mapbox.com")?
        .set_default("mapbox_token", "")?
        .set_default("drawings_file", "drawings.json")?
        .set_default("public_dir", "public")
}

/// Build the configuration from environment variables (PORT, TRACCAR_USER,
/// TRACCAR_PASSWORD, MAPBOX_TOKEN, ...) layered over the defaults.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::Environment::default())
        .build()?;

    Ok(settings.try_deserialize()?)
}
