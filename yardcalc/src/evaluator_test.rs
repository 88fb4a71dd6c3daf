use crate::config::EvalConfig;
use crate::error::{EvalError, StackKind};
use crate::evaluator::{evaluate, evaluate_infix, evaluate_rpn, Evaluator, Notation};
use crate::parser::ShuntingParser;

#[test]
fn test_eval1() {
    assert_eq!(evaluate_infix("3 + 4 * 2"), Ok(11));
    assert_eq!(evaluate_infix("(3 + 4) * 2"), Ok(14));
    assert_eq!(evaluate_infix("2 ^ 3 ^ 2"), Ok(512));
    assert_eq!(evaluate_infix("-5 + 3"), Ok(-2));
}

#[test]
fn test_eval2() {
    assert_eq!(evaluate_infix("3+4*2/-(1-5)^2^3"), Ok(3));
    assert_eq!(evaluate_infix("1 + 2 * 3 - 4 / 2 % 3"), Ok(5));
    assert_eq!(evaluate_infix("10 - 4 - 3"), Ok(3));
    assert_eq!(evaluate_infix("100 / 10 / 5"), Ok(2));
    assert_eq!(evaluate_infix("2 ^ 2 ^ 3"), Ok(256));
    assert_eq!(evaluate_infix("(2 ^ 2) ^ 3"), Ok(64));
    assert_eq!(evaluate_infix("7 % 3"), Ok(1));
    assert_eq!(evaluate_infix(" \t42\t"), Ok(42));
}

#[test]
fn test_unary_minus() {
    // negation binds tighter than ^
    assert_eq!(evaluate_infix("-2 ^ 2"), Ok(4));
    assert_eq!(evaluate_infix("2 ^ -1"), Ok(0));
    assert_eq!(evaluate_infix("2 * -3"), Ok(-6));
    assert_eq!(evaluate_infix("3 - -2"), Ok(5));
    assert_eq!(evaluate_infix("- - 5"), Ok(5));
    assert_eq!(evaluate_infix("( - 5 )"), Ok(-5));
    assert_eq!(evaluate_infix("-(2 + 3) * 2"), Ok(-10));
    assert_eq!(evaluate_infix("-7 / 2"), Ok(-3));
    assert_eq!(evaluate_infix("(1)-2"), Ok(-1));
}

#[test]
fn test_integer_semantics() {
    assert_eq!(evaluate_infix("9223372036854775807 + 1"), Ok(i64::MIN));
    assert_eq!(evaluate_infix("2 ^ 63"), Ok(i64::MIN));
    assert_eq!(evaluate_infix("0 ^ 0"), Ok(1));
    assert_eq!(
        evaluate_infix("9223372036854775808"),
        Err(EvalError::NumberOutOfRange(format!("9223372036854775808")))
    );
}

#[test]
fn test_errors() {
    assert_eq!(evaluate_infix("10 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate_infix("10 % (5 - 5)"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate_infix("(1 + 2"), Err(EvalError::MismatchedParentheses));
    assert_eq!(evaluate_infix("1 + 2)"), Err(EvalError::MismatchedParentheses));
    assert_eq!(evaluate_infix("12 34"), Err(EvalError::InvalidExpression(2)));
    assert_eq!(evaluate_infix(""), Err(EvalError::InvalidExpression(0)));
    assert_eq!(evaluate_infix("1 -"), Err(EvalError::StackUnderflow(StackKind::Operand)));
}

// what may follow an operator or an open paren: operands, '(' and '-'
#[test]
fn test_operator_placement() {
    assert_eq!(evaluate_infix("3 + * 2"), Err(EvalError::UnexpectedOperator { op: '*', pos: 4 }));
    assert_eq!(evaluate_infix("* 2"), Err(EvalError::UnexpectedOperator { op: '*', pos: 0 }));
    assert_eq!(evaluate_infix("(+1)"), Err(EvalError::UnexpectedOperator { op: '+', pos: 1 }));
    assert_eq!(evaluate_infix("(* 2)"), Err(EvalError::UnexpectedOperator { op: '*', pos: 1 }));
    assert_eq!(evaluate_infix("()"), Err(EvalError::UnexpectedOperator { op: ')', pos: 1 }));
    assert_eq!(evaluate_infix("2 ^ ^ 2"), Err(EvalError::UnexpectedOperator { op: '^', pos: 4 }));
    assert_eq!(evaluate_infix("1 + (2)"), Ok(3));
    assert_eq!(evaluate_infix("1 + -(2)"), Ok(-1));
    assert_eq!(evaluate_infix("((2))"), Ok(2));
}

#[test]
fn test_invalid_characters() {
    for c in ['x', '.', '_', '=', '!', ',', '$', 'é', '\n', '\r', '\x0b', '\x0c'] {
        let infix = format!("1 {} 2", c);
        assert_eq!(evaluate_infix(&infix), Err(EvalError::InvalidCharacter { ch: c, pos: 2 }));
        let rpn = format!("1 2 {}", c);
        assert_eq!(evaluate_rpn(&rpn), Err(EvalError::InvalidCharacter { ch: c, pos: 4 }));
    }
    // only space and tab separate tokens
    assert_eq!(evaluate_infix("1 +\n2"), Err(EvalError::InvalidCharacter { ch: '\n', pos: 3 }));
    assert_eq!(evaluate_rpn("1\n2 +"), Err(EvalError::InvalidCharacter { ch: '\n', pos: 1 }));
}

#[test]
fn test_reuse() {
    let mut ev = Evaluator::new();
    assert_eq!(ev.eval_infix("(1 + 2"), Err(EvalError::MismatchedParentheses));
    assert_eq!(ev.eval_infix("1 2"), Err(EvalError::InvalidExpression(2)));
    assert_eq!(ev.eval_infix("3 + 4 * 2"), Ok(11));
    assert_eq!(ev.eval_infix("2 ^ 10"), Ok(1024));
    assert_eq!(ev.eval_rpn("1 2 3"), Err(EvalError::InvalidExpression(3)));
    assert_eq!(ev.eval_rpn("3 4 2 * +"), Ok(11));
    assert_eq!(ev.eval_infix("5 / 0"), Err(EvalError::DivisionByZero));
    assert_eq!(ev.eval_infix("-5 + 3"), Ok(-2));
}

#[test]
fn test_capacity() {
    let deep = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    assert_eq!(evaluate_infix(&deep), Ok(1));
    let deeper = format!("{}1{}", "(".repeat(65), ")".repeat(65));
    assert_eq!(evaluate_infix(&deeper), Err(EvalError::StackOverflow(StackKind::Operator)));

    let mut ev = Evaluator::with_config(EvalConfig::default().with_capacity(2));
    assert_eq!(ev.config().capacity, 2);
    assert_eq!(ev.eval_infix("1 + 2 * 3"), Err(EvalError::StackOverflow(StackKind::Operand)));
    assert_eq!(ev.eval_infix("1 * 2 + 3"), Ok(5));
    assert_eq!(ev.eval_infix("(((1)))"), Err(EvalError::StackOverflow(StackKind::Operator)));
}

#[test]
fn test_infix_rpn_agree() {
    let pairs = vec![
        ("3 + 4 * 2", "3 4 2 * +"),
        ("(3 + 4) * 2", "3 4 + 2 *"),
        ("2 ^ 3 ^ 2", "2 3 2 ^ ^"),
        ("(5 - 1) % 3 * 7", "5 1 - 3 % 7 *"),
        ("0 - 5 + 3", "0 5 - 3 +"),
    ];
    for (infix, rpn) in pairs {
        assert_eq!(evaluate_infix(infix), evaluate_rpn(rpn), "{} vs {}", infix, rpn);
    }
}

#[test]
fn test_round_trip() {
    let tests = vec![
        "3 + 4 * 2",
        "3+4*2/-(1-5)^2^3",
        "-5 + 3",
        "- - 5",
        "-2 ^ 2",
        "2 ^ -1",
        "(7 - 10) * -(3 % 2) / 1",
        "-(2 ^ -3) * -4",
        "100 / 10 / 5 - 2 ^ 2 ^ 2",
        "9223372036854775807 + 1",
        "-(((1)))",
    ];
    for infix in tests {
        let rpn = ShuntingParser::parse_str(infix).unwrap();
        let direct = evaluate_infix(infix);
        assert_eq!(evaluate_rpn(&rpn.to_string()), direct, "{} -> {}", infix, rpn);
        assert_eq!(Evaluator::new().eval_rpn_expr(&rpn), direct, "{}", infix);
    }
}

#[test]
fn test_notation() {
    assert_eq!("rpn".parse::<Notation>(), Ok(Notation::Rpn));
    assert_eq!("Infix".parse::<Notation>(), Ok(Notation::Infix));
    assert!("postfix".parse::<Notation>().is_err());
    assert_eq!(Notation::Rpn.to_string(), "rpn");
    assert_eq!(evaluate("3 4 +", Notation::Rpn), Ok(7));
    assert_eq!(evaluate("3 + 4", Notation::Infix), Ok(7));
}
