use clap::Parser;
use env_logger::Env;
use log::error;
use std::process::exit;
use swalign::util::version::built_info;

pub mod commands;

use anyhow::Result;
use commands::{align::Align, command::Command};
use enum_dispatch::enum_dispatch;

#[derive(Parser, Debug)]
#[command(version = built_info::VERSION.as_str())]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[enum_dispatch(Command)]
#[derive(Parser, Debug)]
enum Subcommand {
    Align(Align),
}

fn run(args: &Args) -> Result<()> {
    args.subcommand.execute()
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args: Args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Args};
    use clap::Parser;

    #[test]
    fn test_run_reports_missing_sequence() {
        let args = Args::parse_from(["swalign", "align", "-a", "ACGT"]);
        let message = format!("{:#}", run(&args).unwrap_err());
        assert!(message.contains("sequence b is missing"));
    }
}
