use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Lexer and parser for the Monkey language")]
pub struct Options {
    #[command(subcommand)]
    pub operation: Operation,
    /// Increase logging verbosity (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the tokens of a source file, one per line
    Tokens { file: String },
    /// Parse a source file and print its syntax tree
    Parse { file: String },
}

impl Options {
    /// Verbosity for the logger: errors and warnings are always shown.
    pub fn log_level(&self) -> usize {
        1 + usize::from(self.verbose)
    }
}
