//! A long‑lived interpreter session.
//!
//! The session owns everything that must survive between programs run
//! against the same state (globals, the resolver's distance table, the
//! expression‑id watermark) together with the error flags the front end
//! uses to pick an exit code.  The REPL runs every line through one session
//! and clears only the flags between lines.

use std::io::Write;

use log::{debug, info};

use crate::ast::Stmt;
use crate::error::{LoxError, RunError};
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::scan_tokens;

pub struct Session {
    interpreter: Interpreter,
    next_id: usize,
    had_error: bool,
    had_runtime_error: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session printing to standard output.
    pub fn new() -> Self {
        Self::from_interpreter(Interpreter::new())
    }

    /// A session whose `print` output goes to `out`.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self::from_interpreter(Interpreter::with_output(out))
    }

    fn from_interpreter(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            next_id: 0,
            had_error: false,
            had_runtime_error: false,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both error flags; session state is kept.
    pub fn reset_errors(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    /// 65 after a static error, 70 after a runtime error, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.had_error {
            65
        } else if self.had_runtime_error {
            70
        } else {
            0
        }
    }

    /// Scans and parses `source` without running it.  Lexical and syntax
    /// errors are returned together, in source order of discovery.
    pub fn parse(&mut self, source: &str) -> Result<Vec<Stmt>, Vec<LoxError>> {
        let (tokens, mut errors) = scan_tokens(source);

        let mut parser = Parser::with_first_id(tokens, self.next_id);
        let parsed = parser.parse();
        self.next_id = parser.next_id();

        match parsed {
            Ok(statements) if errors.is_empty() => Ok(statements),
            Ok(_) => Err(errors),
            Err(parse_errors) => {
                errors.extend(parse_errors);
                Err(errors)
            }
        }
    }

    /// Runs one program: scan, parse, resolve, interpret.  Nothing executes
    /// if any static error was found.
    pub fn run(&mut self, source: &str) -> Result<(), RunError> {
        info!("Running {} bytes of source", source.len());

        let statements = match self.parse(source) {
            Ok(statements) => statements,
            Err(errors) => return Err(self.static_failure(errors)),
        };

        if let Err(errors) = Resolver::new(&mut self.interpreter).resolve(&statements) {
            return Err(self.static_failure(errors));
        }

        debug!("Executing {} statement(s)", statements.len());

        match self.interpreter.interpret(&statements) {
            Ok(()) => Ok(()),
            Err(e) => {
                info!("Runtime error: {}", e);
                self.had_runtime_error = true;
                Err(RunError::Runtime(e))
            }
        }
    }

    fn static_failure(&mut self, errors: Vec<LoxError>) -> RunError {
        info!("Static analysis reported {} error(s)", errors.len());

        self.had_error = true;
        RunError::Static(errors)
    }
}
