use clap::Parser;
use std::net::SocketAddr;

/// Serve the per-user point wallet HTTP API
#[derive(Parser, Debug)]
#[command(name = "point-service")]
#[command(about = "Per-user point wallet with charge/use operations", long_about = None)]
pub struct CliArgs {
    /// Socket address the HTTP server listens on
    #[arg(
        long = "listen",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "Socket address to bind, e.g. 0.0.0.0:8080"
    )]
    pub listen: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(&["program"], "127.0.0.1:8080")]
    #[case::custom_port(&["program", "--listen", "127.0.0.1:9999"], "127.0.0.1:9999")]
    #[case::all_interfaces(&["program", "--listen", "0.0.0.0:8080"], "0.0.0.0:8080")]
    fn test_listen_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.listen, expected.parse::<SocketAddr>().unwrap());
    }

    #[rstest]
    #[case::missing_value(&["program", "--listen"])]
    #[case::not_an_address(&["program", "--listen", "not-an-address"])]
    #[case::missing_port(&["program", "--listen", "127.0.0.1"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
