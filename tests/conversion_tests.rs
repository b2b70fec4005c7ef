//! End-to-end conversion: source line to program.

mod common;

use common::{c, read, read_clean, tree, v};
use proptest::prelude::*;
use rstest::rstest;
use varlang::ast::{build_program, TreeToExpConverter};
use varlang::syntax::{ParseTree, RuleKind};
use varlang::{ConversionDiagnostic, DiagnosticBuffer, Exp, SourceContext};

#[rstest]
#[case("3+4", Exp::Add(vec![c(3), c(4)]))]
#[case("1+2+3", Exp::Add(vec![c(1), c(2), c(3)]))]
#[case("(1+2)*3", Exp::Mult(vec![Exp::Add(vec![c(1), c(2)]), c(3)]))]
#[case("x", v("x"))]
#[case("42", c(42))]
#[case("-7", c(-7))]
#[case("10 - 4 - 3", Exp::Sub(vec![c(10), c(4), c(3)]))]
#[case("a / b / 2", Exp::Div(vec![v("a"), v("b"), c(2)]))]
#[case("2 * x * y_1", Exp::Mult(vec![c(2), v("x"), v("y_1")]))]
#[case("((5))", c(5))]
#[case("1 + 2 * 3", Exp::Add(vec![c(1), Exp::Mult(vec![c(2), c(3)])]))]
#[case("(8 / 2) - (x + 1)", Exp::Sub(vec![Exp::Div(vec![c(8), c(2)]), Exp::Add(vec![v("x"), c(1)])]))]
fn converts(#[case] line: &str, #[case] expected: Exp) {
    assert_eq!(read_clean(line), expected);
}

#[test]
fn flattened_chain_is_one_node() {
    let exp = read_clean("1+2+3");
    assert_eq!(exp.operands().len(), 3);
    assert!(exp.operands().iter().all(|o| matches!(o, Exp::Const(_))));
}

#[test]
fn parentheses_leave_no_trace() {
    assert_eq!(read_clean("(x)"), read_clean("x"));
    assert_eq!(read_clean("(1+2)"), read_clean("1+2"));
}

#[test]
fn top_level_let_is_no_program() {
    let reading = read("(let ((x 1)) x)");
    assert!(reading.result.unwrap_err().is_no_program());
    assert!(matches!(
        &reading.diagnostics[..],
        [ConversionDiagnostic::UnhandledRule { rule: RuleKind::LetExp, .. }]
    ));
}

#[test]
fn let_operand_is_dropped_from_its_list() {
    let reading = read("(let ((x 1)) x) + 2");
    assert_eq!(reading.result.unwrap(), Exp::Add(vec![c(2)]));
    assert_eq!(reading.diagnostics.len(), 1);
}

#[test]
fn malformed_terminal_does_not_disturb_siblings() {
    let reading = read("1 + 99999999999999999999 + x");
    assert_eq!(
        reading.result.unwrap(),
        Exp::Add(vec![c(1), Exp::Error, v("x")])
    );
    assert!(matches!(
        &reading.diagnostics[..],
        [ConversionDiagnostic::IllegalTerminal { text, .. }] if text == "99999999999999999999"
    ));
}

#[rstest]
#[case("1 + 3.5", "3.5")]
#[case("1 + 3abc", "3abc")]
#[case("1 + x.y", "x.y")]
#[case("1 + 3$", "3$")]
#[case("1 + $", "$")]
fn malformed_token_is_embedded_as_error(#[case] line: &str, #[case] token: &str) {
    let reading = read(line);
    assert_eq!(reading.result.unwrap(), Exp::Add(vec![c(1), Exp::Error]));
    assert!(matches!(
        &reading.diagnostics[..],
        [ConversionDiagnostic::ParserErrorNode { text, .. }] if text == token
    ));
}

#[test]
fn lone_malformed_token_still_yields_program() {
    assert_eq!(read("3.5").result.unwrap(), Exp::Error);
}

#[test]
fn parser_error_node_is_embedded() {
    let reading = read("(4 * #) / 2");
    let exp = reading.result.unwrap();
    assert_eq!(exp, Exp::Div(vec![Exp::Mult(vec![c(4), Exp::Error]), c(2)]));
    assert!(exp.contains_error());
    assert!(matches!(
        &reading.diagnostics[..],
        [ConversionDiagnostic::ParserErrorNode { text, .. }] if text == "#"
    ));
}

#[test]
fn lone_malformed_terminal_still_yields_program() {
    let reading = read("99999999999999999999");
    assert_eq!(reading.result.unwrap(), Exp::Error);
}

#[test]
fn rejected_lines_are_syntax_errors() {
    for line in ["", "1 +", "(1 + 2", "1+2-3", "3 4"] {
        let reading = read(line);
        assert!(reading.result.unwrap_err().is_syntax(), "{line:?}");
        assert!(reading.diagnostics.is_empty());
    }
}

#[test]
fn converting_twice_gives_equal_trees() {
    let parsed = tree("(1 + x) * (y - 2) * 3");
    let source = SourceContext::new("test", "(1 + x) * (y - 2) * 3");

    let mut first_sink = DiagnosticBuffer::new();
    let first = build_program(&parsed, &source, &mut first_sink).unwrap();
    let mut second_sink = DiagnosticBuffer::new();
    let second = build_program(&parsed, &source, &mut second_sink).unwrap();

    assert_eq!(first, second);
    assert!(first_sink.is_empty() && second_sink.is_empty());
}

#[test]
fn hand_built_tree_converts_like_a_parsed_one() {
    let built = ParseTree::rule(
        RuleKind::Exp,
        vec![ParseTree::rule(
            RuleKind::AddExp,
            vec![
                ParseTree::rule(RuleKind::NumExp, vec![ParseTree::terminal("3")]),
                ParseTree::terminal("+"),
                ParseTree::rule(RuleKind::NumExp, vec![ParseTree::terminal("4")]),
            ],
        )],
    );
    let mut sink = DiagnosticBuffer::new();
    let exp = TreeToExpConverter::new(&mut sink).convert(&built);
    assert_eq!(exp, Some(read_clean("3+4")));
}

proptest! {
    #[test]
    fn every_integer_literal_is_const(n in any::<i64>()) {
        prop_assert_eq!(read_clean(&n.to_string()), Exp::Const(n));
    }

    #[test]
    fn every_integer_terminal_is_const(n in any::<i64>()) {
        let mut sink = DiagnosticBuffer::new();
        let exp = TreeToExpConverter::new(&mut sink).convert(&ParseTree::terminal(n.to_string()));
        prop_assert_eq!(exp, Some(Exp::Const(n)));
        prop_assert!(sink.is_empty());
    }

    #[test]
    fn chains_flatten_to_one_operand_per_literal(values in prop::collection::vec(0i64..1000, 2..8)) {
        let line = values.iter().map(i64::to_string).collect::<Vec<_>>().join(" * ");
        let expected = Exp::Mult(values.iter().copied().map(Exp::Const).collect());
        prop_assert_eq!(read_clean(&line), expected);
    }
}
