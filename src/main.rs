use clap::Parser;
use file_indexer::args::Args;
use file_indexer::config::RunConfig;
use file_indexer::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.debug);

    let outcome = RunConfig::try_from(args).and_then(|config| file_indexer::run(&config));
    match outcome {
        Ok(summary) => {
            presentation::print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            presentation::print_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
