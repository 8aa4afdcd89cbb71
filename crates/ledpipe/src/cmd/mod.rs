use std::path::PathBuf;

use clap::{Args, Subcommand};
use ledpipe::DEFAULT_SOCKET_PATH;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod send;
pub mod serve;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lighting gateway.
    Serve(ServeArgs),
    /// Send a single command frame to a running gateway.
    Send(SendArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Serve(args) => serve::run(args, format),
        Command::Send(args) => send::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Socket path to bind.
    #[arg(default_value = DEFAULT_SOCKET_PATH)]
    pub path: PathBuf,
    /// Print a state snapshot after every applied change.
    #[arg(long)]
    pub watch: bool,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Socket path to connect to.
    #[arg(default_value = DEFAULT_SOCKET_PATH)]
    pub path: PathBuf,
    /// Command id to send.
    #[arg(long, short = 'c')]
    pub command: u32,
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex-encoded payload.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}
