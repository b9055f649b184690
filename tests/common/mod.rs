#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use loxwalk::error::RunError;
use loxwalk::session::Session;

/// In‑memory writer whose contents stay readable after it is boxed.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A session with captured output.
pub fn session() -> (Session, SharedBuffer) {
    let buffer = SharedBuffer::default();
    (Session::with_output(Box::new(buffer.clone())), buffer)
}

/// Runs `source` in a fresh session, returning printed output and outcome.
pub fn run(source: &str) -> (String, Result<(), RunError>) {
    let (mut session, buffer) = session();
    let result = session.run(source);
    (buffer.contents(), result)
}

/// Runs `source`, expecting success, and returns the printed lines.
pub fn output_of(source: &str) -> Vec<String> {
    let (out, result) = run(source);
    if let Err(e) = &result {
        panic!("program failed: {:?}", e);
    }
    out.lines().map(str::to_string).collect()
}

/// Runs `source`, expecting a runtime error, and returns its rendering.
pub fn runtime_error_of(source: &str) -> String {
    match run(source).1 {
        Err(RunError::Runtime(e)) => e.to_string(),
        other => panic!("expected runtime error, got {:?}", other),
    }
}

/// Runs `source`, expecting static errors, and returns their renderings.
pub fn static_errors_of(source: &str) -> Vec<String> {
    match run(source).1 {
        Err(RunError::Static(errors)) => errors.iter().map(|e| e.to_string()).collect(),
        other => panic!("expected static errors, got {:?}", other),
    }
}
