use clap::Parser;
use plexbox_core::message::RenderOptions;

/// Show the Plex "now playing" session in the VRChat chatbox over OSC.
#[derive(Parser, Debug, Clone)]
#[command(name = "plexbox", version, about)]
pub struct Args {
    /// Plex server address, including protocol and port
    /// (example: http://127.0.0.1:32400)
    #[arg(short, long, env = "PLEX_SERVER_ADDRESS")]
    pub address: String,

    /// Plex server token (X-Plex-Token)
    #[arg(short, long, env = "PLEX_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Polling rate for contacting the Plex API, in milliseconds
    #[arg(short = 'p', long = "polling-rate", default_value_t = 500)]
    pub polling_rate_ms: u64,

    /// "Short" mode: disables the subtitle for tracks
    #[arg(short, long)]
    pub short: bool,

    /// Small timestamps, rendered with superscript characters
    #[arg(short = 'u', long)]
    pub superscript: bool,
}

impl Args {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            short: self.short,
            superscript: self.superscript,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["plexbox", "-a", "http://127.0.0.1:32400", "-t", "secret"]);
        assert_eq!(args.polling_rate_ms, 500);
        assert!(!args.short);
        assert!(!args.superscript);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "plexbox",
            "--address",
            "http://plex.local:32400",
            "--token",
            "secret",
            "--polling-rate",
            "1000",
            "--short",
            "--superscript",
        ]);
        assert_eq!(args.polling_rate_ms, 1000);
        let opts = args.render_options();
        assert!(opts.short);
        assert!(opts.superscript);
    }
}
