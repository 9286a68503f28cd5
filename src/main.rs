use anyhow::Result;
use clap::Parser;
use sigparse::cli::{log_level_for, Cli, Commands};
use sigparse::commands::parse::ParseOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Parse {
            signatures,
            input,
            format,
            output,
            fail_fast,
            no_parallel,
            plain,
        } => {
            let options = ParseOptions {
                signatures,
                input,
                format,
                output,
                fail_fast,
                no_parallel,
                plain,
            };
            sigparse::commands::parse::handle_parse(options, sigparse::config::load_config())
        }
        Commands::Init { force } => sigparse::commands::init::init_config(force),
    }
}

// RUST_LOG, when set, takes precedence over -v
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
