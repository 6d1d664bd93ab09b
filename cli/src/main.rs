use std::{io, process::ExitCode};

use clap::Parser;
use console::style;
use zsnap::library::{
    backend::ShellBackend,
    cli::Cli,
    config::PlanConfig,
    exit::{codes, exit_code},
    logging::setup_logging,
    plan::Planner,
    prompt::KeypressConfirm,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    setup_logging(args.verbose);

    let config = PlanConfig::from(&args);

    match Planner::new(&ShellBackend::new(), &KeypressConfirm, &config, io::stdout())
        .run()
        .await
    {
        Ok(_) => ExitCode::from(codes::SUCCESS),
        Err(err) => {
            eprintln!("{} {}", style("Error:").red().bold(), err);
            ExitCode::from(exit_code(&err))
        }
    }
}
