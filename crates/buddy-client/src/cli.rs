use buddy_client_core::configuration::get_configuration;
use buddy_shared::const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[arg(
        long,
        help = "Address of the backend. Overrides the configuration files (eg. http://localhost:8080)"
    )]
    pub server: Option<String>,
}

impl Cli {
    /// The address passed on the command line, otherwise the one from the
    /// configuration, otherwise the default
    pub fn server_address(&self) -> String {
        if let Some(server) = &self.server {
            return server.clone();
        }
        match get_configuration() {
            Ok(configuration) => configuration.client.server_address,
            Err(e) => {
                tracing::warn!(?e, "failed to read configuration, using default server");
                CLIENT_DEFAULT_SERVER_ADDRESS.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_flag_wins() {
        let cli = Cli::parse_from(["buddy-client", "--server", "http://example.com:9000"]);

        assert!(!cli.is_to_std_out);
        assert_eq!(cli.server_address(), "http://example.com:9000");
    }

    #[test]
    fn stdout_short_flag() {
        let cli = Cli::parse_from(["buddy-client", "-s"]);

        assert!(cli.is_to_std_out);
        assert!(cli.server.is_none());
    }
}
