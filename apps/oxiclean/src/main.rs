use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use oxiclean_file_extension::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oxiclean")]
#[command(about = "A collection of tools for cleaning up codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Enforce or forbid file extensions in import specifiers
    FileExtensionInImport(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::FileExtensionInImport(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!(
                "Running file extension check (fix: {}, using {} threads)",
                cfg.fix, num_threads
            );
            debug!("Config: root={:?}, glob={:?}", cfg.root, cfg.glob);

            let result = oxiclean_file_extension::run_file_extension_check(cfg)?;
            debug!("Found {} violations", result.reports.len());

            let elapsed_ms = start.elapsed().as_millis();

            if result.reports.is_empty() {
                oxiclean_file_extension::print_no_violations_message(&mut stdout, &result)?;
            } else {
                oxiclean_file_extension::print_reports(&mut stdout, &result)?;
            }

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files_analyzed.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;

            if !result.reports.is_empty() {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
