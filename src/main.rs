mod commands;

use std::process::ExitCode;

use clap::CommandFactory;
use log::error;
use pokego::cli::{Args, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let args = match Args::try_parse_normalized(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // Help output is not an error; everything else is a usage error
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    if args.version {
        println!("pokego version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let Some(command) = args.command else {
        eprintln!("{}", Args::command().render_help());
        return ExitCode::FAILURE;
    };

    if !command.has_required() {
        print_command_usage(command.name());
        return ExitCode::FAILURE;
    }

    let result = match command {
        Command::Http { url, timeout, verbose } => {
            commands::http(&url, timeout, verbose).await
        }
        Command::Sighup { name, all, verbose } => {
            commands::sighup(&name, all, verbose)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_command_usage(name: &str) {
    let mut cmd = Args::command();
    cmd.build();
    if let Some(sub) = cmd.find_subcommand_mut(name) {
        eprintln!("{}", sub.render_help());
    }
}
