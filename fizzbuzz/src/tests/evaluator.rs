use crate::evaluator::{first_match, NUMBER};
use crate::{Evaluator, LuckRule, PredicateRule, Rule, Token};
use std::sync::Arc;

fn overrides(rules: Vec<Arc<dyn Rule>>) -> Evaluator {
    Evaluator::new(rules)
}

#[test]
fn test_core_rules_only() {
    let evaluator = Evaluator::default();
    assert_eq!(evaluator.evaluate(1), Token::Number(1));
    assert_eq!(evaluator.evaluate(3), Token::Label("fizz"));
    assert_eq!(evaluator.evaluate(5), Token::Label("buzz"));
    assert_eq!(evaluator.evaluate(15), Token::Label("fizzbuzz"));
    assert!(!evaluator.has_override_rules());
}

#[test]
fn test_override_beats_core() {
    let evaluator = overrides(vec![Arc::new(LuckRule)]);
    // 30 is a multiple of 15 but contains a 3
    assert_eq!(evaluator.evaluate(30), Token::Label("luck"));
    assert_eq!(evaluator.evaluate(15), Token::Label("fizzbuzz"));
    assert_eq!(evaluator.evaluate(13), Token::Label("luck"));
    assert_eq!(evaluator.evaluate(14), Token::Number(14));
}

#[test]
fn test_first_override_wins() {
    let evaluator = overrides(vec![
        Arc::new(PredicateRule::new("seven", |v| v % 7 == 0)),
        Arc::new(LuckRule),
    ]);
    assert_eq!(evaluator.evaluate(35), Token::Label("seven"));
    assert_eq!(evaluator.evaluate(13), Token::Label("luck"));

    let evaluator = overrides(vec![
        Arc::new(LuckRule),
        Arc::new(PredicateRule::new("seven", |v| v % 7 == 0)),
    ]);
    assert_eq!(evaluator.evaluate(35), Token::Label("luck"));
}

#[test]
fn test_first_match_none() {
    let rules: Vec<Arc<dyn Rule>> = vec![Arc::new(LuckRule)];
    assert_eq!(first_match(4, &rules), None);
    assert_eq!(first_match(3, &rules), Some("luck"));
    assert_eq!(first_match(3, &[]), None);
}

#[test]
fn test_token_display_and_category() {
    assert_eq!(Token::Number(42).to_string(), "42");
    assert_eq!(Token::Label("fizz").to_string(), "fizz");
    assert_eq!(Token::Number(42).category(), NUMBER);
    assert_eq!(Token::Label("fizz").category(), "fizz");
    assert!(Token::Number(1).is_number());
    assert!(!Token::Label("buzz").is_number());
}

#[test]
fn test_numeric_label_counts_as_number() {
    let evaluator = overrides(vec![Arc::new(PredicateRule::new("42", |v| v == 7))]);
    let token = evaluator.evaluate(7);
    assert_eq!(token, Token::Label("42"));
    assert_eq!(token.to_string(), "42");
    assert_eq!(token.category(), NUMBER);
    assert_eq!(Token::Label("-5").category(), NUMBER);
    assert_eq!(Token::Label("4x").category(), "4x");
}
