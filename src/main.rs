use anyhow::Context;
use clap::Parser;
use std::io::Write;
use timeout_checker::utils::logger;
use timeout_checker::{CliConfig, TimeoutChecker};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let Some((source_file, repo_root)) = config.targets() else {
        print_usage();
        return Ok(());
    };

    if !config.extra_args.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", config.extra_args);
    }

    let layout = match config.load_layout() {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            println!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let checker = TimeoutChecker::new(layout);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let exit_code = match checker.run(&source_file, &repo_root, &mut out) {
        Ok(outcome) => {
            tracing::debug!("Outcome: {:?}", outcome);
            outcome.exit_code()
        }
        Err(e) => {
            tracing::error!("Check failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            writeln!(out, "{}", e.user_friendly_message()).context("failed to write to stdout")?;
            1
        }
    };

    out.flush().context("failed to flush stdout")?;
    drop(out);

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Missing arguments are not an error; the usage line is best effort.
fn print_usage() {
    let program = match std::env::current_exe() {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            tracing::warn!("Unable to get executable path: {}", e);
            "timeout-checker".to_string()
        }
    };
    println!("Usage: {} <path_to_source_file> <repo_root>", program);
}
