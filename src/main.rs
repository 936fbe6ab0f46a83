use clap::Parser;
use study_cafe::utils::logger;
use study_cafe::{CliConfig, ConsoleInput, ConsoleOutput, CsvCatalog, PassMachine};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose, config.log_json);
    tracing::debug!("Resolved config: {:?}", config);

    let catalog = CsvCatalog::new(&config.pass_list, &config.locker_list);
    let input = ConsoleInput::new(BufReader::new(tokio::io::stdin()));
    let output = ConsoleOutput::new(tokio::io::stdout());

    PassMachine::new(catalog, input, output).run().await;
}
