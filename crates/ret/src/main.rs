//! Command-line interface for the `ret` retrieval engine.

mod cli;

use std::process::ExitCode;

use cli::{CommandContext, args::parse_cli, commands};

fn main() -> ExitCode {
    let cli = parse_cli();

    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    if let cli::args::Commands::Config(cmd) = cli.command {
        return commands::config::run(&ctx, &cmd);
    }

    let engine = match ctx.build_engine() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx, &engine)
}
