
// Rule tests
mod evaluator;
