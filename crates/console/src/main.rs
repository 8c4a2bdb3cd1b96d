//! The main function for the Athenaeum console client
use std::process::ExitCode;

#[allow(
    clippy::print_stderr,
    reason = "Tracing might not be available if run() failed before its initialization"
)]
#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = console::run().await {
        eprintln!("Failed to start Athenaeum! Error: {error:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
