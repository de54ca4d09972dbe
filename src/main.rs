use std::{fs, io, path::PathBuf};

use clap::Parser;
use tally::{Function, Session};

/// tally evaluates arithmetic expressions such as `1 + 2 * sqrt(9)`.
///
/// Every line shares one environment. With no expressions and no file,
/// expressions are read from standard input, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Prints the parsed expression tree next to each result.
    #[arg(short, long)]
    tree: bool,

    /// Lists the available functions and constants, then exits.
    #[arg(short, long)]
    list: bool,

    /// Prints the session history once all input has been evaluated.
    #[arg(long)]
    history: bool,

    expressions: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut session = Session::new();

    if args.list {
        list_definitions(&session);
        return;
    }

    let lines: Vec<String> = if let Some(path) = &args.file {
        fs::read_to_string(path).unwrap_or_else(|_| {
                                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                              path.display());
                                    std::process::exit(1);
                                })
                                .lines()
                                .map(str::to_string)
                                .collect()
    } else if args.expressions.is_empty() {
        io::stdin().lines()
                   .map(|line| {
                       line.unwrap_or_else(|e| {
                               eprintln!("Failed to read from standard input: {e}");
                               std::process::exit(1);
                           })
                   })
                   .collect()
    } else {
        args.expressions
    };

    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        let entry = session.submit(line);
        match &entry.parsed {
            Ok(rendered) if args.tree => println!("{rendered} = {}", entry.value),
            Ok(_) => println!("{}", entry.value),
            Err(e) => {
                eprintln!("{line}: {e}");
                println!("{}", entry.value);
            },
        }
    }

    if args.history {
        for (i, entry) in session.history().iter().enumerate() {
            let marker = if entry.is_valid() { ' ' } else { '!' };
            println!("{:>3}{marker} {} => {}", i + 1, entry.input, entry.value);
        }
    }
}

fn list_definitions(session: &Session) {
    let environment = session.environment();

    println!("Functions:");
    for name in environment.functions.names() {
        let arity = environment.functions.get(name).map_or(0, Function::arity);
        println!("  {name}/{arity}");
    }

    let mut constants: Vec<(&str, f64)> = environment.variables.constants().collect();
    constants.sort_by(|a, b| a.0.cmp(b.0));

    println!("Constants:");
    for (name, value) in constants {
        println!("  {name} = {value}");
    }
}
