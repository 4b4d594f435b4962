//! `tinyc`: parse, compile and run Tiny programs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::constants::{CompilerConfig, IDENTIFIER_PREFIX, RUNTIME_BINDING, RUNTIME_MODULE};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;
use tiny_cli::{exec, io, pipeline};
use tiny_parser::ParseOptions;

#[derive(Parser, Debug)]
#[command(name = "tinyc", author, version, about = "Compile Tiny programs to JavaScript", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a program and print its syntax tree as JSON
    Parse {
        /// Source file (stdin when absent or `-`)
        input: Option<PathBuf>,
        /// Output file (stdout when absent or `-`)
        output: Option<PathBuf>,
        /// Attach source locations to every node
        #[arg(short, long)]
        location: bool,
    },
    /// Compile a program to JavaScript
    Compile {
        /// Source file (stdin when absent or `-`)
        input: Option<PathBuf>,
        /// Output file (stdout when absent or `-`)
        output: Option<PathBuf>,
        /// Read a JSON syntax tree instead of Tiny source
        #[arg(long)]
        ast: bool,
        /// Prefix for renamed variables
        #[arg(long, default_value = IDENTIFIER_PREFIX)]
        prefix: String,
    },
    /// Compile a program and run it with Node.js
    Exec {
        /// Source file (stdin when absent or `-`)
        input: Option<PathBuf>,
        /// JavaScript interpreter to run
        #[arg(long, default_value = "node")]
        node: PathBuf,
    },
}

fn run(cli: Cli) -> Result<ExitCode> {
    debug!("{cli:?}");
    match cli.command {
        Command::Parse {
            input,
            output,
            location,
        } => {
            let source = io::read_input(input.as_deref())?;
            let json = pipeline::parse_to_json(&source, ParseOptions { location })?;
            io::write_output(output.as_deref(), &json)?;
        }
        Command::Compile {
            input,
            output,
            ast,
            prefix,
        } => {
            let config = CompilerConfig::new(&prefix, RUNTIME_BINDING, RUNTIME_MODULE)?;
            let text = io::read_input(input.as_deref())?;
            let js = if ast {
                pipeline::compile_json(&text, &config)?
            } else {
                pipeline::compile_source(&text, &config)?
            };
            io::write_output(output.as_deref(), &js)?;
        }
        Command::Exec { input, node } => {
            let source = io::read_input(input.as_deref())?;
            let js = pipeline::compile_source(&source, &CompilerConfig::default())?;
            let status = exec::run(&js, &node)?;
            return Ok(match status.code() {
                Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
                None => ExitCode::FAILURE,
            });
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
