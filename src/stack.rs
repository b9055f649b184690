//! Stack growth for the recursive evaluator.
//!
//! Every Lox call nests several evaluator frames, so deep but finite
//! recursion would exhaust the native stack long before the interpreter's
//! own call-depth limit is reached.  Recursion points run through
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated segment
//! when the current one runs low.

/// Space that must remain on the current stack before `f` runs (128 KiB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2 MiB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Runs `f`, first switching to a new stack segment if the current one is
/// nearly full.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
