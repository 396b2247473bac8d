use std::{fs::read_to_string, path::PathBuf, rc::Rc, time::Instant};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use script_parser::{display_error, parse_expression, parse_program, parse_statement};
use tracing::{info, Level};

/// Which grammar rule the whole source file is parsed as.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq, Copy)]
enum Entry {
    Program,
    Statement,
    Expression,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Source file to parse
    source: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Entry::Program)]
    entry: Entry,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .init();

    let contents = read_to_string(&args.source)
        .with_context(|| format!("reading {:?}", args.source))?;
    let file_name = args
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.source.display().to_string());
    let file = Rc::new(file_name);

    let start = Instant::now();
    let parsed = match args.entry {
        Entry::Program => parse_program(&contents, file).map(|ast| format!("{:#?}", ast)),
        Entry::Statement => parse_statement(&contents, file).map(|ast| format!("{:#?}", ast)),
        Entry::Expression => parse_expression(&contents, file).map(|ast| format!("{:#?}", ast)),
    };

    info!(elapsed = ?start.elapsed(), entry = ?args.entry, "parsed");

    match parsed {
        Ok(ast) => {
            println!("{}", ast);
            Ok(())
        }
        Err(error) => {
            eprint!("{}", display_error(&error, &contents));
            bail!("{}", error)
        }
    }
}
