use clap::Parser;
use newslog::adapter::inbound::cli::{self, command::Cli, output};
use tracing::{error, info};

fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = match args.load_config() {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("newslog starting");

    if let Err(e) = cli::execute(&args, &config) {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
