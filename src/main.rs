//! DotSleuth — dotfile inventory for the home directory.
//!
//! Thin binary entry point. All logic lives in the `dotsleuth-core`
//! and `dotsleuth-report` crates.

use std::io::Write;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Diagnostics go to stderr so the
    // report on stdout stays clean; the default level is WARN because the
    // report itself is the user-facing output.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    // A fatal error propagates out of main and is printed to stderr as
    // `Error: <message>` with a non-zero exit status; nothing is written
    // to stdout in that case.
    let inventory = dotsleuth_core::scanner::inventory_home()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dotsleuth_report::render(&inventory, &mut out)?;
    out.flush()?;

    Ok(())
}
