//! Tests for evaluating demo source

use tryit::{evaluate, evaluate_expression, reports, Report, FALLBACK_MESSAGE};

#[test]
fn empty_source() {
    assert_eq!(evaluate(""), FALLBACK_MESSAGE);
}

#[test]
fn blank_and_comment_lines() {
    assert_eq!(evaluate("\n\n   \n"), FALLBACK_MESSAGE);
    assert_eq!(evaluate("-- just a comment"), FALLBACK_MESSAGE);
    assert_eq!(
        evaluate("   -- indented comment\n\n\t--\n-- #eval fibonacci 10"),
        FALLBACK_MESSAGE,
        "commented out directives are skipped"
    );
}

#[test]
fn unrecognized_statements() {
    let prog = r#"
        inductive Tree (β : Type v) where
          | leaf
          | node (left : Tree β) (key : Nat) (value : β) (right : Tree β)
    "#;
    assert_eq!(evaluate(prog), FALLBACK_MESSAGE);
}

#[test]
fn eval_hello_world() {
    assert_eq!(
        evaluate("#eval \"Hello, World!\""),
        "#eval \"Hello, World!\" → \"Hello, World!\""
    );
}

#[test]
fn eval_numeric() {
    assert_eq!(evaluate("#eval fibonacci 10"), "#eval fibonacci 10 → 55");
    assert_eq!(evaluate("#eval factorial 5"), "#eval factorial 5 → 120");
    assert_eq!(evaluate("#eval   factorial 0  "), "#eval factorial 0 → 1");
}

#[test]
fn eval_unrecognized() {
    assert_eq!(evaluate("#eval 1 + 1"), "#eval 1 + 1 → undefined");
    assert_eq!(evaluate("#eval"), "#eval  → undefined");
}

#[test]
fn def_reports_function_only() {
    assert_eq!(
        evaluate("def greet (name : String) : String := \"Hello, \" ++ name"),
        "✓ Function 'greet' defined successfully"
    );
}

#[test]
fn def_without_name() {
    assert_eq!(evaluate("def (x : Nat) := x"), FALLBACK_MESSAGE);
}

#[test]
fn theorem() {
    assert_eq!(
        evaluate("theorem add_comm (a b : Nat) : a + b = b + a"),
        "✓ Theorem 'add_comm' defined successfully"
    );
}

#[test]
fn order_is_preserved() {
    let prog = r#"
        -- Define a function
        def fibonacci : Nat → Nat
          | 0 => 0
          | 1 => 1
          | n + 2 => fibonacci n + fibonacci (n + 1)

        theorem fib_pos (n : Nat) : fibonacci (n + 1) > 0 := by
          induction n <;> simp [fibonacci]

        #eval fibonacci 10
        #eval factorial 5
        #eval greet "World"
    "#;
    assert_eq!(
        evaluate(prog),
        [
            "✓ Function 'fibonacci' defined successfully",
            "✓ Theorem 'fib_pos' defined successfully",
            "#eval fibonacci 10 → 55",
            "#eval factorial 5 → 120",
            "#eval greet \"World\" → \"Hello, World!\"",
        ]
        .join("\n")
    );
}

#[test]
fn crlf_source() {
    assert_eq!(
        evaluate("#eval fibonacci 5\r\n#eval factorial 2\r\n"),
        "#eval fibonacci 5 → 5\n#eval factorial 2 → 2"
    );
}

#[test]
fn byte_order_mark_source() {
    assert_eq!(
        evaluate("\u{FEFF}#eval factorial 5"),
        "#eval factorial 5 → 120"
    );
}

#[test]
fn evaluate_is_idempotent() {
    let prog = "#eval fibonacci 20\ndef x := 1";
    assert_eq!(evaluate(prog), evaluate(prog));
}

#[test]
fn reports_match_evaluate() {
    let prog = "#eval factorial 10\ntheorem t : True := trivial\n#eval xyz";
    let joined = reports(prog)
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(joined, evaluate(prog));
    assert_eq!(reports(prog).len(), 3);
}

#[test]
fn reports_serialize() {
    let r = Report::Eval {
        expr: "factorial 5".to_string(),
        result: "120".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&r).unwrap(),
        r#"{"type":"eval","expr":"factorial 5","result":"120"}"#
    );
    assert_eq!(
        serde_json::to_string(&Report::Fallback).unwrap(),
        r#"{"type":"fallback"}"#
    );
}

#[test]
fn expression_greeting() {
    assert_eq!(evaluate_expression("\"Hello\""), "\"Hello, World!\"");
    assert_eq!(evaluate_expression("greet \"Bob\""), "\"Hello, World!\"");
}

#[test]
fn expression_numeric() {
    assert_eq!(evaluate_expression("fibonacci 10"), "55");
    assert_eq!(evaluate_expression("factorial 5"), "120");
    assert_eq!(evaluate_expression("factorial 20"), "2432902008176640000");
}

#[test]
fn expression_missing_argument() {
    assert_eq!(evaluate_expression("fibonacci"), "undefined");
    assert_eq!(evaluate_expression("factorial"), "undefined");
    assert_eq!(evaluate_expression("fibonacci -1"), "undefined");
}

#[test]
fn expression_unrecognized() {
    assert_eq!(evaluate_expression("xyz"), "undefined");
    assert_eq!(evaluate_expression(""), "undefined");
}

#[test]
fn expression_containment_is_unanchored() {
    assert_eq!(
        evaluate_expression("List.range 3 |>.map (fun _ => fibonacci 7)"),
        "13"
    );
    assert_eq!(evaluate_expression("fibonacci x + factorial 3"), "6");
}

#[test]
fn expression_large_results() {
    assert_eq!(
        evaluate_expression("factorial 35"),
        "10333147966386144929666651337523200000000"
    );
    assert_eq!(
        evaluate_expression("fibonacci 200"),
        "280571172992510140037611932413038677189525"
    );
    assert_eq!(
        evaluate("#eval factorial 35"),
        "#eval factorial 35 → 10333147966386144929666651337523200000000"
    );
}

#[test]
#[tracing_test::traced_test]
fn expression_above_limit_is_undefined() {
    assert_eq!(evaluate_expression("fibonacci 10001"), "undefined");
    assert!(logs_contain("Invalid argument"));
}
