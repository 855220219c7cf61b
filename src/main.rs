//! Unit Converter (uconv)
//!
//! An interactive converter between length and mass units.

use tracing_subscriber::EnvFilter;

use uconv::{build_info, repl};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with the prompt)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("uconv=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();

    // Run the interactive session; state is discarded on exit
    repl::run().await?;

    Ok(())
}
