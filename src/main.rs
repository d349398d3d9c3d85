use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use vcpctl::{execute, Args, Cmd, MonitorRegistry};

fn run(cmd: Cmd) -> Result<()> {
    let mut registry = if cmd.needs_monitors() {
        MonitorRegistry::enumerate()
    } else {
        MonitorRegistry::new(Vec::new())
    };

    execute(&cmd, &mut registry)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(args.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
