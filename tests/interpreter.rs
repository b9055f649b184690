mod common;

use common::{output_of, run, runtime_error_of, session};

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(
        output_of("print 1 + 2 * 3; print (1 + 2) * 3; print 10 / 4; print -3 - -5;"),
        vec!["7", "9", "2.5", "2"]
    );
}

#[test]
fn number_formatting() {
    assert_eq!(
        output_of("print 3.0; print 0.1 + 0.2 > 0.3; print 1 / 0; print -1 / 0; print 100;"),
        vec!["3", "true", "Infinity", "-Infinity", "100"]
    );
}

#[test]
fn string_concatenation() {
    assert_eq!(
        output_of(r#"print "foo" + "bar"; print "n" + 1; print 2 + "x"; print "v" + nil;"#),
        vec!["foobar", "n1", "2x", "vnil"]
    );
}

#[test]
fn equality_and_comparison() {
    assert_eq!(
        output_of(
            r#"
            print 1 == 1;
            print "a" == "a";
            print nil == nil;
            print nil == false;
            print 1 == "1";
            print 2 >= 2;
            print 1 != 2;
            "#
        ),
        vec!["true", "true", "true", "false", "false", "true", "true"]
    );
}

#[test]
fn truthiness() {
    assert_eq!(
        output_of("print !nil; print !false; print !0; print !\"\";"),
        vec!["true", "true", "false", "false"]
    );
}

#[test]
fn logical_operators_return_operands() {
    assert_eq!(
        output_of(r#"print nil or "yes"; print "first" or "second"; print nil and 1; print 1 and 2;"#),
        vec!["yes", "first", "nil", "2"]
    );
}

#[test]
fn logical_operators_short_circuit() {
    let out = output_of(
        r#"
        fun boom() { print "evaluated"; return true; }
        print true or boom();
        print false and boom();
        "#,
    );

    assert_eq!(out, vec!["true", "false"]);
}

#[test]
fn block_shadowing_restores_outer_binding() {
    assert_eq!(
        output_of("var a = 1; { var a = 2; print a; } print a;"),
        vec!["2", "1"]
    );
}

#[test]
fn uninitialized_variable_is_nil() {
    assert_eq!(output_of("var a; print a;"), vec!["nil"]);
}

#[test]
fn control_flow() {
    let out = output_of(
        r#"
        var i = 0;
        while (i < 3) { print i; i = i + 1; }
        for (var j = 0; j < 2; j = j + 1) print "j" + j;
        if (i == 3) print "three"; else print "other";
        if (nil) print "never";
        "#,
    );

    assert_eq!(out, vec!["0", "1", "2", "j0", "j1", "three"]);
}

#[test]
fn recursion() {
    let out = output_of(
        r#"
        fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }
        print fib(15);
        "#,
    );

    assert_eq!(out, vec!["610"]);
}

#[test]
fn return_unwinds_loops() {
    let out = output_of(
        r#"
        fun first_over(limit) {
            for (var i = 0; ; i = i + 1) {
                var spins = 0;
                while (spins < 2) {
                    if (i > limit) return i;
                    spins = spins + 1;
                }
            }
        }
        print first_over(5);
        "#,
    );

    assert_eq!(out, vec!["6"]);
}

#[test]
fn closures_keep_independent_state() {
    let out = output_of(
        r#"
        fun makeCounter() {
            var i = 0;
            fun count() { i = i + 1; return i; }
            return count;
        }
        var a = makeCounter();
        var b = makeCounter();
        print a();
        print a();
        print b();
        "#,
    );

    assert_eq!(out, vec!["1", "2", "1"]);
}

#[test]
fn closures_bind_lexically() {
    let out = output_of(
        r#"
        var a = "global";
        {
            fun show() { print a; }
            show();
            var a = "block";
            show();
        }
        "#,
    );

    assert_eq!(out, vec!["global", "global"]);
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(output_of("fun f() {} print f();"), vec!["nil"]);
}

#[test]
fn callables_print_their_names() {
    assert_eq!(
        output_of("fun f() {} class C {} print f; print C; print C(); print clock;"),
        vec!["<fn f>", "C", "C instance", "<native fn>"]
    );
}

#[test]
fn fields_and_methods() {
    let out = output_of(
        r#"
        class Point {
            init(x, y) { this.x = x; this.y = y; }
            sum() { return this.x + this.y; }
        }
        var p = Point(1, 2);
        print p.sum();
        p.x = 10;
        print p.sum();
        var m = p.sum;
        print m();
        "#,
    );

    assert_eq!(out, vec!["3", "12", "12"]);
}

#[test]
fn fields_shadow_methods() {
    let out = output_of(
        r#"
        class A { m() { return "method"; } }
        var a = A();
        a.m = "field";
        print a.m;
        "#,
    );

    assert_eq!(out, vec!["field"]);
}

#[test]
fn initializer_returns_the_instance() {
    let out = output_of(
        r#"
        class Foo { init() { this.v = 1; return; } }
        var foo = Foo();
        print foo.init() == foo;
        print foo.v;
        "#,
    );

    assert_eq!(out, vec!["true", "1"]);
}

#[test]
fn super_calls_reach_the_superclass_method() {
    let out = output_of(
        r#"
        class A { greet() { return "A"; } }
        class B < A { greet() { return super.greet() + "B"; } }
        print B().greet();
        "#,
    );

    assert_eq!(out, vec!["AB"]);
}

#[test]
fn inherited_methods_and_initializers() {
    let out = output_of(
        r#"
        class Base { init(n) { this.n = n; } describe() { return "n=" + this.n; } }
        class Derived < Base {}
        print Derived(7).describe();
        "#,
    );

    assert_eq!(out, vec!["n=7"]);
}

#[test]
fn super_resolves_statically_through_the_hierarchy() {
    let out = output_of(
        r#"
        class A { method() { print "A method"; } }
        class B < A { method() { print "B method"; } test() { super.method(); } }
        class C < B {}
        C().test();
        "#,
    );

    assert_eq!(out, vec!["A method"]);
}

#[test]
fn bound_methods_are_fresh_but_this_is_shared() {
    let out = output_of(
        r#"
        class A { me() { return this; } }
        var a = A();
        print a.me == a.me;
        print a.me() == a.me();
        print a == A();
        "#,
    );

    assert_eq!(out, vec!["false", "true", "false"]);
}

#[test]
fn functions_compare_by_identity() {
    assert_eq!(
        output_of("fun f() {} var g = f; print f == g; print clock == clock;"),
        vec!["true", "true"]
    );
}

#[test]
fn natives() {
    assert_eq!(
        output_of("print sqrt(16); print sin(0); print cos(0); print sleep(0); print clock() > 0;"),
        vec!["4", "0", "1", "nil", "true"]
    );
}

#[test]
fn native_argument_must_be_a_number() {
    assert_eq!(
        runtime_error_of("sqrt(\"four\");"),
        "Argument must be a number.\n[line 1]"
    );
}

#[test]
fn arity_mismatch_is_a_runtime_error() {
    assert_eq!(
        runtime_error_of("fun f(a) {}\nf(1, 2);"),
        "Expected 1 arguments but got 2.\n[line 2]"
    );
    assert_eq!(
        runtime_error_of("class P { init(x) {} }\nP();"),
        "Expected 1 arguments but got 0.\n[line 2]"
    );
}

#[test]
fn type_errors() {
    assert_eq!(runtime_error_of("-\"a\";"), "Operand must be a number.\n[line 1]");
    assert_eq!(runtime_error_of("1 < \"a\";"), "Operands must be numbers.\n[line 1]");
    assert_eq!(
        runtime_error_of("true + nil;"),
        "Operands must be two numbers or two strings.\n[line 1]"
    );
    assert_eq!(
        runtime_error_of("\"not callable\"();"),
        "Can only call functions and classes.\n[line 1]"
    );
}

#[test]
fn property_errors() {
    assert_eq!(
        runtime_error_of("var x = 1; print x.y;"),
        "Only instances have properties.\n[line 1]"
    );
    assert_eq!(
        runtime_error_of("var x = 1; x.y = 2;"),
        "Only instances have fields.\n[line 1]"
    );
    assert_eq!(
        runtime_error_of("class A {}\nprint A().missing;"),
        "Undefined property 'missing'.\n[line 2]"
    );
}

#[test]
fn undefined_variables() {
    assert_eq!(runtime_error_of("print nope;"), "Undefined variable 'nope'.\n[line 1]");
    assert_eq!(runtime_error_of("\n\nnope = 1;"), "Undefined variable 'nope'.\n[line 3]");
}

#[test]
fn superclass_must_be_a_class() {
    assert_eq!(
        runtime_error_of("var NotAClass = \"nope\";\nclass A < NotAClass {}"),
        "Superclass must be a class.\n[line 2]"
    );
}

#[test]
fn runtime_error_stops_execution() {
    let (out, result) = run("print 1;\nprint -nil;\nprint 2;");

    assert_eq!(out, "1\n");
    assert_eq!(result.map_err(|e| e.exit_code()), Err(70));
}

#[test]
fn runtime_error_inside_call_restores_globals() {
    let (mut session, buffer) = session();

    let result = session.run("fun bad() { var local = 1; return -\"x\"; }\nbad();");
    assert!(result.is_err());

    session.reset_errors();
    session.run("var after = 3; print after;").expect("session still usable");

    assert_eq!(buffer.contents(), "3\n");
}

#[test]
fn deep_recursion_completes() {
    let out = output_of(
        r#"
        fun sum(n) { if (n == 0) return 0; return n + sum(n - 1); }
        print sum(4000);
        "#,
    );

    assert_eq!(out, vec!["8002000"]);
}

#[test]
fn recursion_past_the_depth_limit_is_a_runtime_error() {
    assert_eq!(
        runtime_error_of("fun f(n) { if (n > 0) return f(n - 1); return 0; }\nprint f(20000);"),
        "Stack overflow.\n[line 1]"
    );
    assert_eq!(
        runtime_error_of("fun forever() { forever(); }\nforever();"),
        "Stack overflow.\n[line 1]"
    );
}

#[test]
fn session_survives_stack_overflow() {
    let (mut session, buffer) = session();

    let result = session.run("fun down(n) { return down(n + 1); }\ndown(0);");
    assert_eq!(result.map_err(|e| e.exit_code()), Err(70));

    session.reset_errors();
    session
        .run("fun up(n) { if (n == 0) return \"done\"; return up(n - 1); } print up(500);")
        .expect("depth counter resets after an overflow");

    assert_eq!(buffer.contents(), "done\n");
}

#[test]
fn nan_equals_itself_and_signed_zeros_differ() {
    assert_eq!(
        output_of("var n = 0 / 0; print n == n; print n != n; print 0 == -0; print 0 < -0;"),
        vec!["true", "false", "false", "false"]
    );
}

#[test]
fn extreme_magnitudes_use_scientific_notation() {
    assert_eq!(
        output_of(
            r#"
            print 100000000000000000000000;
            print 0.0000001;
            print 12345678;
            print -15000000.5;
            print 9999999;
            print 0.001;
            print -0;
            "#
        ),
        vec!["1.0E23", "1.0E-7", "1.2345678E7", "-1.50000005E7", "9999999", "0.001", "-0"]
    );
}
