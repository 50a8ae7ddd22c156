//! scr-server - serves the soil form page and the crop recommendation API.

use clap::Parser;
use scr_server::ServerConfig;

#[derive(Parser)]
#[command(
    name = "scr-server",
    version,
    about = "Soil to crop recommendation server"
)]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    scr_server::run(cli.config).await
}
