use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let command = orbit_explorer::RunGuiCommand::new(orbit_explorer::ExplorerConfig::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "orbit explorer exited with an error");
            ExitCode::FAILURE
        }
    }
}
