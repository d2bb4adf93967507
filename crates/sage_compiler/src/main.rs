mod cli;
mod compilation;

use std::path::{Path, PathBuf};

use clap::Parser as _;
use temp_dir::TempDir;

use crate::cli::{Cli, Command, Emit};
use crate::compilation::{Compilation, CompilerResult};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> CompilerResult<i32> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            input,
            source,
            output,
            emit,
        } => {
            let output = output.unwrap_or_else(|| default_output(&input, source));
            let compilation = load(input, source)?;

            match emit {
                Some(Emit::Tokens) => {
                    println!("{}", serde_json::to_string_pretty(&compilation.tokens())?);
                }
                Some(Emit::Ast) => {
                    println!("{}", serde_json::to_string_pretty(&compilation.parse()?)?);
                }
                Some(Emit::Asm) => {
                    print!("{}", compilation.build_asm()?);
                }
                None => {
                    let workdir = TempDir::new()?;
                    compilation.build_executable(workdir.path(), &output)?;
                }
            }

            Ok(0)
        }

        Command::Run { input } => {
            let compilation = load(input, false)?;

            let workdir = TempDir::new()?;
            let exe = workdir.path().join("a.out");
            compilation.build_executable(workdir.path(), &exe)?;

            let status = std::process::Command::new(&exe).status()?;

            // the platform truncates exit statuses to their low 8 bits
            Ok(status.code().unwrap_or(1))
        }
    }
}

fn load(input: String, literal_source: bool) -> CompilerResult<Compilation> {
    if literal_source {
        Compilation::new("<unnamed>", input)
    } else {
        let text = std::fs::read_to_string(&input)?;
        Compilation::new(input, text)
    }
}

fn default_output(input: &str, literal_source: bool) -> PathBuf {
    if literal_source {
        PathBuf::from("a.out")
    } else {
        Path::new(input).with_extension("")
    }
}
