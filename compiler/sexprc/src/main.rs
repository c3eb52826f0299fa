//! `sexpr`: run, parse or explore s-expression scripts.

use std::io::{self, Write};

use sexpr_eval::Environment;
use sexprc::{
    demo, init_tracing, open_parser, parse_forms, parse_run_options, run_script, CommandOutcome,
    RunOptions,
};

const RUN_USAGE: &str =
    "Usage: sexpr run <file.sexpr|-> [--keep-going] [--no-prelude] [--keep-shebang]";
const PARSE_USAGE: &str = "Usage: sexpr parse <file.sexpr|-> [--keep-going] [--keep-shebang]";

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let outcome = match command.as_str() {
        "demo" => {
            if let Err(err) = demo(&mut io::stdout().lock()) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
            CommandOutcome::default()
        }
        "parse" => {
            let (options, path) = options_or_exit(&args[2..], RunOptions::default());
            let Some(path) = path else {
                eprintln!("{PARSE_USAGE}");
                std::process::exit(1);
            };
            let mut parser = parser_or_exit(&path, &options);
            io_or_exit(parse_forms(
                &mut parser,
                options.keep_going,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            ))
        }
        "run" => {
            let (options, path) = options_or_exit(&args[2..], RunOptions::default());
            let Some(path) = path else {
                eprintln!("{RUN_USAGE}");
                std::process::exit(1);
            };
            run(&path, &options)
        }
        "repl" => {
            let defaults = RunOptions {
                keep_going: true,
                ..RunOptions::default()
            };
            let (options, _) = options_or_exit(&args[2..], defaults);
            run("-", &options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            CommandOutcome::default()
        }
        "version" | "--version" | "-V" => {
            println!("sexpr {}", env!("CARGO_PKG_VERSION"));
            CommandOutcome::default()
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sexpr"))
            {
                run(command, &RunOptions::default())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    if !outcome.is_success() {
        std::process::exit(1);
    }
}

fn run(path: &str, options: &RunOptions) -> CommandOutcome {
    let parser = parser_or_exit(path, options);
    let env = Environment::new();
    io_or_exit(run_script(parser, &env, options, &mut io::stderr().lock()))
}

fn options_or_exit(args: &[String], defaults: RunOptions) -> (RunOptions, Option<String>) {
    parse_run_options(args, defaults).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    })
}

fn parser_or_exit(path: &str, options: &RunOptions) -> sexpr_parse::Parser<Box<dyn io::BufRead>> {
    open_parser(path, options).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    })
}

fn io_or_exit(result: io::Result<CommandOutcome>) -> CommandOutcome {
    result.unwrap_or_else(|err| {
        let _ = writeln!(io::stderr(), "error: {err}");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("sexpr: s-expression script engine");
    println!();
    println!("Usage: sexpr <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file|->      Run a script ('-' reads stdin)");
    println!("  parse <file|->    Print each top-level form in printed form");
    println!("  repl              Run forms from stdin, continuing after errors");
    println!("  demo              Print one value of each s-expression kind");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Options:");
    println!("  --keep-going, -k  Report errors and continue with the next form");
    println!("  --no-prelude      Bind only 'builtin' (no if/let/print)");
    println!("  --keep-shebang    Parse a leading #! line instead of skipping it");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=sexpr_eval=debug) for tracing output on stderr.");
}
