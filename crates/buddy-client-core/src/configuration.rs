//! Client settings layered from `configuration/base.toml`,
//! `configuration/<environment>.toml` and `APP_` environment variables

use buddy_shared::const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS;
use std::path::Path;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub client: ClientSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ClientSettings {
    /// Scheme, host and port of the backend, without trailing slash
    pub server_address: String,
}

/// Loads the configuration from the `configuration` folder of the current
/// directory. Missing files are skipped
pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    get_configuration_from(&base_path.join("configuration"), environment)
}

pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Configuration, config::ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .set_default("client.server_address", CLIENT_DEFAULT_SERVER_ADDRESS)?
        .add_source(config::File::from(configuration_directory.join("base.toml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_CLIENT__SERVER_ADDRESS=http://example.com would set `Settings.client.server_address`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("local", Environment::Local)]
    #[case("Production", Environment::Production)]
    fn environment_parsed(#[case] input: &str, #[case] expected: Environment) {
        assert_eq!(Environment::try_from(input.to_string()), Ok(expected));
    }

    #[test]
    fn unknown_environment_rejected() {
        assert!(Environment::try_from("staging".to_string()).is_err());
    }

    #[test]
    fn files_are_layered() {
        let dir = std::env::temp_dir().join(format!("buddy-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("base.toml"),
            "[client]\nserver_address = \"http://base:1\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("production.toml"),
            "[client]\nserver_address = \"https://buddy.example.com\"\n",
        )
        .unwrap();

        let local = get_configuration_from(&dir, Environment::Local).unwrap();
        let production = get_configuration_from(&dir, Environment::Production).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        if std::env::var("APP_CLIENT__SERVER_ADDRESS").is_err() {
            assert_eq!(local.client.server_address, "http://base:1");
            assert_eq!(
                production.client.server_address,
                "https://buddy.example.com"
            );
        }
    }
}
