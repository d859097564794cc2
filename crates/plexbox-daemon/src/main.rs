mod chatbox;
mod cli;
mod plex;
mod poll;

use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let plex = plex::PlexClient::new(&args.address, &args.token);
    let chatbox = chatbox::ChatboxClient::connect().await?;

    info!(
        "Mirroring {} to the VRChat chatbox every {}ms",
        args.address, args.polling_rate_ms
    );

    let bridge = poll::Bridge::new(plex, chatbox, args.render_options(), args.polling_rate_ms);
    bridge.run().await
}
