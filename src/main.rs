use std::fs;

use clap::Parser;
use pseudocod::{interpreter::io::StdIo, linter, printer};

/// pseudocod is an interpreter for the Romanian classroom pseudocode used in
/// algorithm exercises.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the normalized source instead of running it.
    #[arg(short, long)]
    lint: bool,

    /// Print the parsed program in canonical form instead of running it.
    #[arg(short, long)]
    tree: bool,

    /// Path to the pseudocode source file.
    file: String,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.file);
        std::process::exit(1);
    });

    if args.lint {
        print!("{}", linter::normalize(&source));
        return;
    }

    if args.tree {
        match pseudocod::parse(&source) {
            Ok(program) => print!("{}", printer::pretty(&program)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut io = StdIo::new();
    if let Err(e) = pseudocod::run(&source, &mut io) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
