use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

mod interactive;
mod profile_manager;

use interactive::InteractiveApp;

#[derive(Parser, Debug)]
#[command(version = "0.1.0", about = "Interactive console for the order management server")]
pub struct Arguments {
    /// The server deployment root, e.g. http://localhost:8080/ordermanagement-web. When given, this overrides both
    /// the ORDER_SERVER_URL environment variable and profile selection.
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Arguments::parse();
    let mut app = InteractiveApp::new(args.server);
    app.run().await
}
