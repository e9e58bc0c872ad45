use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imgur_client::ImgurClient;
use imgur_feed::config::Config;
use imgur_feed::{route, QueryMode, RequestParams};

/// Turn an Imgur query into a normalized JSON feed on stdout.
#[derive(Parser)]
#[command(name = "imgur-feed")]
struct Cli {
    /// Query mode: user, tag, gallery, or leaderboard
    #[arg(long)]
    mode: String,

    /// Account whose submissions to fetch (user mode)
    #[arg(long)]
    username: Option<String>,

    /// Tag to filter the gallery by (tag mode)
    #[arg(long)]
    tag: Option<String>,

    /// Gallery section: hot, top, or user (gallery mode)
    #[arg(long)]
    section: Option<String>,

    /// Gallery sort: viral, top, time, or rising (gallery mode)
    #[arg(long)]
    sort: Option<String>,

    /// Gallery window: day, week, month, year, or all (gallery mode)
    #[arg(long)]
    window: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("imgur_feed=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let params = RequestParams {
        username: cli.username,
        tag: cli.tag,
        section: cli.section,
        sort: cli.sort,
        window: cli.window,
    };
    let query = QueryMode::from_request(&cli.mode, &params)?;
    info!(feed = %query, "Building feed");

    let client = ImgurClient::new();
    let items = route(&client, &query, &config.api_key).await?;

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
