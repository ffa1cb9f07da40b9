use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use log::info;
use monkey::{error::PositionalError, lex, Lexer, Parser};

mod commandline;

use commandline::{Operation, Options};

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.log_level())
        .init()?;

    match &options.operation {
        Operation::Tokens { file } => {
            let content = read_source(file)?;
            for token in lex(&content) {
                println!("{:?}\t{}", token.source, token);
            }
        }
        Operation::Parse { file } => {
            let content = read_source(file)?;
            let mut parser = Parser::new(Lexer::new(&content));
            let program = parser.parse_program();

            if !parser.errors().is_empty() {
                for error in parser.errors() {
                    eprintln!("{:?}: {}", error.range(), error.describe());
                }
                bail!("Found {} syntax error(s) in {}", parser.errors().len(), file);
            }

            for statement in &program.statements {
                println!("{}", statement);
            }
        }
    }

    Ok(())
}

fn read_source(file: &str) -> Result<String> {
    info!("Reading {}", file);
    fs::read_to_string(file).with_context(|| format!("Unable to read {}", file))
}
