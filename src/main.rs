use std::{
    fs,
    io::{self, BufRead, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use tally::interpreter::{
    evaluator::core::Evaluator, lexer::tokenize, parser::core::parse_program,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

const PROMPT: &str = ">>> ";

/// tally is a tiny integer language: `let` binds a name, `exit` ends the
/// program with an exit code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read CONTENTS as a path to a script file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the value of the last statement after running a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Logs at debug level unless TALLY_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,

    /// Script source, or a path when --file is given. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.contents {
        Some(contents) => run_script(&contents, args.file, args.pipe_mode),
        None => run_session(),
    }
}

/// Installs a stderr subscriber filtered by `TALLY_LOG`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();
}

/// Parses and evaluates a whole script once.
///
/// An exit-statement ends the process from inside the evaluator. Otherwise
/// the result is discarded unless pipe mode asks for it.
fn run_script(contents: &str, is_file: bool, pipe_mode: bool) -> ExitCode {
    let source = if is_file {
        match fs::read(contents) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                debug!(error = %e, "failed to read script");
                eprintln!("Could not open file: {contents}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.to_string()
    };

    let program = match parse_program(&tokenize(&source)) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut evaluator = Evaluator::new();
    match evaluator.eval_program(program) {
        Ok(value) => {
            if pipe_mode {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates one line at a time against a single evaluator.
fn run_session() -> ExitCode {
    let mut evaluator = Evaluator::new();

    if io::stdin().is_terminal() {
        run_interactive(&mut evaluator)
    } else {
        run_piped(&mut evaluator)
    }
}

fn run_interactive(evaluator: &mut Evaluator) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the line editor: {e}");
            return ExitCode::FAILURE;
        },
    };

    println!("Running REPL. Type 'exit <num>;' to quit.");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    debug!(error = %e, "history entry not recorded");
                }
                interpret_line(&line, evaluator);
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                return ExitCode::FAILURE;
            },
        }
    }
}

fn run_piped(evaluator: &mut Evaluator) -> ExitCode {
    let mut stdin = io::stdin().lock();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match stdin.read_until(b'\n', &mut buffer) {
            Ok(0) => return ExitCode::SUCCESS,
            // Invalid UTF-8 becomes U+FFFD, which the lexer skips.
            Ok(_) => interpret_line(&String::from_utf8_lossy(&buffer), evaluator),
            Err(e) => {
                eprintln!("Error reading input: {e}");
                return ExitCode::FAILURE;
            },
        }
    }
}

/// Runs one line of session input, printing its value or its error.
///
/// Failures are reported and the session goes on. Statements on the line
/// that completed before the failure keep their bindings.
fn interpret_line(line: &str, evaluator: &mut Evaluator) {
    if line.trim().is_empty() {
        return;
    }

    let program = match parse_program(&tokenize(line)) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };

    match evaluator.eval_program(program) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
