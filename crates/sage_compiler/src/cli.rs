use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a program.
    Build {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source
        /// instead of as the source file path.
        #[clap(long, short, action)]
        source: bool,

        /// The output executable path. Defaults to the input path with its
        /// extension removed.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print an intermediate form to stdout instead of producing an
        /// executable.
        #[arg(long, value_enum)]
        emit: Option<Emit>,
    },

    /// Build a program, run it and exit with its exit status.
    Run {
        /// The input file.
        input: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Tokens,
    Ast,
    Asm,
}
