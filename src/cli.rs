use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host of the chat server to connect to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port of the chat server to connect to.
    #[arg(long, default_value_t = 6000)]
    pub port: u16,

    /// Character marking a stdin line as a local command rather than chat text.
    #[arg(long, default_value_t = '/')]
    pub prefix: char,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_original_endpoint() {
        let cli = Cli::try_parse_from(["linechat"]).expect("parse with no flags");
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 6000);
        assert_eq!(cli.prefix, '/');
    }

    #[test]
    fn endpoint_is_overridable() {
        let cli = Cli::try_parse_from(["linechat", "--host", "chat.example", "--port", "7000"])
            .expect("parse with endpoint flags");
        assert_eq!(cli.host, "chat.example");
        assert_eq!(cli.port, 7000);
    }
}
