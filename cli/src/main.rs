//! runlet CLI
//!
//! Usage:
//!   runlet-cli <SCRIPT>          Run a script file
//!   runlet-cli -e <CODE>         Run an inline program
//!   runlet-cli -d <SCRIPT>       Dump tokens and AST before running
//!   cat file | runlet-cli        Read source from stdin
//!
//! With no script, no -e and a terminal on stdin, the CLI reads a program
//! interactively: lines are collected until a lone `run` line, the program
//! is executed, and the reader starts over.

mod output;

use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use runlet_lang::error::RunletError;
use runlet_lang::interpreter::Interpreter;
use runlet_lang::lexer::Lexer;
use runlet_lang::parser::Parser as RunletParser;

/// Tree-walking interpreter for the runlet scripting language
#[derive(Parser, Debug)]
#[command(name = "runlet-cli")]
#[command(version, about = "runlet interpreter", long_about = None)]
struct Args {
    /// The script file to run (optional if using -e or stdin)
    script: Option<PathBuf>,

    /// Run an inline program instead of a file
    #[arg(short = 'e', long = "eval")]
    eval: Option<String>,

    /// Print the token stream and AST before running
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match get_source(&args) {
        Ok(Some(source)) => run_source(&source, args.debug),
        Ok(None) => run_interactive(args.debug),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

/// Resolve the program text: -e flag > file argument > piped stdin.
/// `None` means no source was supplied and stdin is a terminal, so the
/// caller should switch to interactive reading.
fn get_source(args: &Args) -> Result<Option<String>, String> {
    if let Some(ref inline) = args.eval {
        return Ok(Some(inline.clone()));
    }

    if let Some(ref script_path) = args.script {
        let content = std::fs::read_to_string(script_path)
            .map_err(|e| format!("Error reading file {:?}: {}", script_path, e))?;
        return Ok(Some(content));
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Error reading from stdin: {}", e))?;
        return Ok(Some(content));
    }

    Ok(None)
}

/// Read programs from a terminal, one per `run` line, until end of input.
/// An error terminates only the current program; the reader starts over.
fn run_interactive(debug: bool) -> ExitCode {
    let stdin = io::stdin();

    loop {
        let mut source = String::new();
        loop {
            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => return ExitCode::SUCCESS,
                Ok(_) => {
                    let line = line.trim_end();
                    source.push_str(line);
                    source.push('\n');
                    if line == "run" {
                        break;
                    }
                }
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    return ExitCode::from(1);
                }
            }
        }

        let _ = run_source(&source, debug);
    }
}

fn run_source(source: &str, debug: bool) -> ExitCode {
    // the grammar requires the final `run` line to end with a newline
    let mut text = source.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }

    let mut lexer = Lexer::new(&text);
    if let Err(e) = lexer.tokenize() {
        eprintln!("{}", RunletError::from(e));
        return ExitCode::from(2);
    }

    if debug {
        println!("Tokens:");
        print!("{}", output::format_tokens(lexer.tokens()));
    }

    let mut parser = RunletParser::new(lexer);
    let ast = match parser.parse() {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("{}", RunletError::from(e));
            return ExitCode::from(2);
        }
    };

    if debug {
        println!("AST:");
        print!("{}", output::format_ast(ast));
    }

    let mut interpreter = Interpreter::new();
    if let Err(e) = interpreter.run(ast) {
        eprintln!("{}", RunletError::from(e));
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
