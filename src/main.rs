mod config;
mod error;
mod invocation;
mod launch;
mod shell;
mod system;
mod translate;

use clap::{error::ErrorKind, CommandFactory, Parser};
use config::Config;
use error::Error;
use launch::{LaunchOptions, Launcher};
use log::debug;
use shell::ShellKind;
use std::io;
use std::process::exit;
use system::OsSystem;

const EXAMPLES: &str = "\
EXAMPLES:
    # Open a file in its default Windows application:
    wslopen notes.txt

    # Open the current directory in Windows File Explorer:
    wslopen .

    # Open a URL in the default Windows browser:
    wslopen https://github.com";

/// A utility to open files, directories, and URLs from WSL in Windows.
#[derive(Parser, Debug)]
#[clap(author, version, after_help = EXAMPLES)]
struct CliArgs {
    /// Enable quiet mode, suppressing informational output.
    #[clap(short, long, action)]
    pub quiet: bool,
    /// Perform a dry run, printing the command without executing it.
    #[clap(short = 'x', long, action)]
    pub dry_run: bool,
    /// Windows command host used to open the target.
    #[clap(short, long, value_enum, default_value_t = ShellKind::PowerShell)]
    pub shell: ShellKind,
    /// The target to open. This can be a WSL path to a file or directory
    /// (e.g., './document.txt', '.') or a full URL (e.g., 'https://google.com').
    #[clap(value_name = "URL_or_FILE_PATH", value_parser)]
    pub targets: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("WSLOPEN_LOG", "warn")).init();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            exit(1);
        }
    };
    debug!("{args:?}");

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", anyhow::Error::from(e));
        exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), Error> {
    let input = match args.targets.as_slice() {
        [input] => input,
        _ => {
            let _ = CliArgs::command().write_long_help(&mut io::stderr());
            eprintln!();
            return Err(Error::Usage);
        }
    };

    let config = Config::from_env();
    let options = LaunchOptions {
        quiet: args.quiet,
        dry_run: args.dry_run,
        shell: args.shell,
    };
    Launcher::new(&OsSystem, &config, options).run(input, &mut io::stdout(), &mut io::stderr())
}
