use clap::Parser;
use shirtstat::adapter::inbound::cli::command::Cli;
use shirtstat::adapter::inbound::cli::run;
use tracing::error;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match run::load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = run::execute(&cli, config) {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
