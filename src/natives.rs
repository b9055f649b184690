//! Host functions installed into the global environment.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use log::debug;

use crate::function::NativeFunction;
use crate::value::Value;

/// Every native, in definition order.
pub fn all() -> Vec<NativeFunction> {
    vec![
        NativeFunction {
            name: "clock",
            arity: 0,
            func: clock,
        },
        NativeFunction {
            name: "sleep",
            arity: 1,
            func: sleep,
        },
        NativeFunction {
            name: "sqrt",
            arity: 1,
            func: |args| number_arg(args).map(|n| Value::Number(n.sqrt())),
        },
        NativeFunction {
            name: "sin",
            arity: 1,
            func: |args| number_arg(args).map(|n| Value::Number(n.sin())),
        },
        NativeFunction {
            name: "cos",
            arity: 1,
            func: |args| number_arg(args).map(|n| Value::Number(n.cos())),
        },
    ]
}

fn number_arg(args: &[Value]) -> Result<f64, String> {
    match args.first() {
        Some(Value::Number(n)) => Ok(*n),
        _ => Err("Argument must be a number.".to_string()),
    }
}

/// Seconds since the Unix epoch, with millisecond resolution.
fn clock(_args: &[Value]) -> Result<Value, String> {
    let seconds = Utc::now().timestamp_millis() as f64 / 1000.0;

    debug!("clock() -> {}", seconds);

    Ok(Value::Number(seconds))
}

/// Blocks the interpreter thread for the given number of milliseconds.
fn sleep(args: &[Value]) -> Result<Value, String> {
    let millis = number_arg(args)?;

    debug!("sleep({})", millis);

    if millis > 0.0 {
        thread::sleep(Duration::from_millis(millis as u64));
    }

    Ok(Value::Nil)
}
