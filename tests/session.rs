mod common;

use loxwalk::error::RunError;

use common::{session, static_errors_of};

#[test]
fn state_persists_between_runs() {
    let (mut session, buffer) = session();

    session.run("var count = 1;").unwrap();
    session.run("fun bump() { count = count + 1; return count; }").unwrap();
    session.run("print bump();").unwrap();
    session.run("{ var local = bump(); print local; }").unwrap();

    assert_eq!(buffer.contents(), "2\n3\n");
}

#[test]
fn closures_from_earlier_runs_keep_working() {
    let (mut session, buffer) = session();

    session
        .run("fun make() { var n = 0; fun inc() { n = n + 1; return n; } return inc; }")
        .unwrap();
    session.run("var c = make();").unwrap();
    session.run("c(); print c();").unwrap();

    assert_eq!(buffer.contents(), "2\n");
}

#[test]
fn static_error_sets_exit_code_65() {
    let (mut session, buffer) = session();

    let err = session.run("print \"unreached\";\nvar = 1;").unwrap_err();

    assert!(matches!(err, RunError::Static(_)));
    assert_eq!(err.exit_code(), 65);
    assert!(session.had_error());
    assert!(!session.had_runtime_error());
    assert_eq!(session.exit_code(), 65);
    assert_eq!(buffer.contents(), "");
}

#[test]
fn runtime_error_sets_exit_code_70() {
    let (mut session, _buffer) = session();

    let err = session.run("print nil + 1;").unwrap_err();

    assert_eq!(err.exit_code(), 70);
    assert!(session.had_runtime_error());
    assert_eq!(session.exit_code(), 70);
}

#[test]
fn reset_errors_keeps_state() {
    let (mut session, buffer) = session();

    session.run("var kept = \"still here\";").unwrap();
    assert!(session.run("oops;").is_err());
    assert_eq!(session.exit_code(), 70);

    session.reset_errors();
    assert_eq!(session.exit_code(), 0);

    session.run("print kept;").unwrap();
    assert_eq!(buffer.contents(), "still here\n");
}

#[test]
fn failed_line_does_not_poison_later_lines() {
    let (mut session, buffer) = session();

    assert!(session.run("var a = ;").is_err());
    session.reset_errors();

    session.run("var a = \"ok\"; print a;").unwrap();
    assert_eq!(buffer.contents(), "ok\n");
}

#[test]
fn lexical_and_syntax_errors_are_reported_together() {
    assert_eq!(
        static_errors_of("var a = @;\nprint ;"),
        vec![
            "[line 1] Error: Unexpected character.",
            "[line 1] Error at ';': Expect expression.",
            "[line 2] Error at ';': Expect expression.",
        ]
    );
}

#[test]
fn lexical_error_alone_blocks_execution() {
    let (mut session, buffer) = session();

    let err = session.run("print 1; #").unwrap_err();

    match err {
        RunError::Static(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].is_static());
        }
        other => panic!("expected static errors, got {:?}", other),
    }
    assert_eq!(buffer.contents(), "");
}

#[test]
fn expression_ids_stay_unique_across_runs() {
    let (mut session, buffer) = session();

    // A local resolved in the first run must not be confused with a global
    // reference parsed in a later run.
    session
        .run("fun outer() { var x = \"local\"; fun get() { return x; } return get; }")
        .unwrap();
    session.run("var x = \"global\"; var g = outer();").unwrap();
    session.run("print x; print g();").unwrap();

    assert_eq!(buffer.contents(), "global\nlocal\n");
}

#[test]
fn natives_are_installed_as_globals() {
    use loxwalk::token::{Token, TokenType};

    let (session, _buffer) = session();
    let globals = session.interpreter().globals().borrow();

    for name in ["clock", "sleep", "sqrt", "sin", "cos"] {
        let value = globals
            .get(&Token::new(TokenType::IDENTIFIER, name, 1))
            .unwrap_or_else(|e| panic!("{} missing: {}", name, e));

        assert_eq!(value.to_string(), "<native fn>");
    }
}
