use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use env_logger::Builder;
use log::{debug, info};

use loxwalk::ast_printer::AstPrinter;
use loxwalk::error::RunError;
use loxwalk::scanner::Scanner;
use loxwalk::session::Session;

/// Exit code for command line misuse.
const EX_USAGE: i32 = 64;
/// Exit code for static (lexical, syntax, resolution) errors.
const EX_DATAERR: i32 = 65;

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox language interpreter", long_about = None)]
pub struct Cli {
    /// Script to run; starts an interactive prompt when omitted
    scripts: Vec<PathBuf>,

    /// Enable logging to app.log
    #[arg(long)]
    log: bool,

    /// Print the token stream instead of running
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed syntax tree instead of running
    #[arg(long)]
    ast: bool,
}

/// What to do with each program handed to the front end.
#[derive(Clone, Copy, Debug)]
enum Mode {
    Run,
    Tokens,
    Ast,
}

/// Reads the contents of a script file as UTF‑8 text.
fn read_file(filename: &Path) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    String::from_utf8(buf).context(format!("File {:?} is not valid UTF-8", filename))
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    // `[module:line] - message`, written to the log file only.
    Builder::new()
        .format(|buf, record| {
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("loxwalk::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug) // Default to Debug, override with RUST_LOG
        .parse_default_env()
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn report(error: &RunError) {
    match error {
        RunError::Static(errors) => {
            for e in errors {
                eprintln!("{}", e);
            }
        }
        RunError::Runtime(e) => eprintln!("{}", e),
    }
}

/// Handles one program according to `mode`.  Returns `false` when it
/// produced static errors.
fn process(session: &mut Session, source: &str, mode: Mode) -> bool {
    match mode {
        Mode::Run => match session.run(source) {
            Ok(()) => true,
            Err(e) => {
                debug!("Run failed: {}", e);
                report(&e);
                !matches!(e, RunError::Static(_))
            }
        },

        Mode::Tokens => {
            let mut ok = true;
            for item in Scanner::new(source) {
                match item {
                    Ok(token) => println!("{}", token),
                    Err(e) => {
                        ok = false;
                        eprintln!("{}", e);
                    }
                }
            }
            ok
        }

        Mode::Ast => match session.parse(source) {
            Ok(statements) => {
                for stmt in &statements {
                    println!("{}", AstPrinter::print_stmt(stmt));
                }
                true
            }
            Err(errors) => {
                report(&RunError::Static(errors));
                false
            }
        },
    }
}

fn run_file(path: &Path, mode: Mode) -> Result<()> {
    let source = read_file(path)?;
    let mut session = Session::new();

    if !process(&mut session, &source, mode) {
        std::process::exit(EX_DATAERR);
    }

    let code = session.exit_code();
    if code != 0 {
        info!("Exiting with code {}", code);
        std::process::exit(code);
    }

    Ok(())
}

fn run_prompt(mode: Mode) -> Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;

        if read == 0 {
            break;
        }

        process(&mut session, &line, mode);
        session.reset_errors();
    }

    info!("Prompt closed");
    Ok(())
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    let mode = if args.tokens {
        Mode::Tokens
    } else if args.ast {
        Mode::Ast
    } else {
        Mode::Run
    };

    match args.scripts.as_slice() {
        [] => run_prompt(mode),
        [script] => run_file(script, mode),
        _ => {
            println!("Usage: lox [script]");
            std::process::exit(EX_USAGE);
        }
    }
}
