//! Grammar parsing and expansion against a foundation grammar excerpt.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use sqlkw::grammar::{Expansion, ExpansionPolicy, Grammar, Outcome, TerminalTrim};
use sqlkw::{DiagnosticCode, Error, RuleName};

use crate::helpers::grammar_fixtures::FOUNDATION_EXCERPT;

fn foundation() -> Grammar {
    Grammar::parse(FOUNDATION_EXCERPT)
}

fn statements() -> Expansion {
    foundation()
        .expand_rule("SQL executable statement", &ExpansionPolicy::statements())
        .unwrap()
}

#[test]
fn test_only_definition_blocks_become_rules() {
    let grammar = foundation();

    assert_eq!(grammar.len(), 22);
    assert!(!grammar.contains("token"));
    assert!(grammar.diagnostics().is_empty());
}

#[rstest]
#[case("reserved word")]
#[case("non-reserved word")]
#[case("SQL executable statement")]
#[case("SQL  executable\tstatement")]
#[case("rollback statement")]
fn test_rule_lookup(#[case] name: &str) {
    assert!(foundation().contains(name), "missing rule <{name}>");
}

#[test]
fn test_indented_continuation_after_blank_lines_stays_in_block() {
    let grammar = foundation();
    let body = grammar.get("non-reserved word").unwrap();
    assert!(body.contains("BREADTH"));
}

#[test]
fn test_statement_names() {
    assert_eq!(
        statements().literals(),
        vec![
            "CREATE SCHEMA <schema name clause> [ <schema character set or path> ] [ <schema element>... ]",
            "CREATE [ <table scope> ] TABLE <table name> <table contents source>",
            "DROP SCHEMA <schema name> <drop behavior>",
            "DROP TABLE <table name> <drop behavior>",
            "OPEN <cursor name>",
            "CLOSE <cursor name>",
            "START TRANSACTION [ <transaction characteristics> ]",
            "COMMIT [ WORK ] [ AND [ NO ] CHAIN ]",
            "ROLLBACK [ WORK ] [ AND [ NO ] CHAIN ] [ <savepoint clause> ]",
            "SET SESSION CHARACTERISTICS AS <session characteristic list>",
            "GET DIAGNOSTICS <SQL diagnostics information>",
        ]
    );
}

#[test]
fn test_statement_diagnostics() {
    let expansion = statements();

    let outcomes: Vec<_> = expansion
        .outcomes()
        .iter()
        .filter(|outcome| outcome.as_literal().is_none())
        .cloned()
        .collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::UndefinedReference(RuleName::new("set session collation statement")),
            Outcome::CycleDetected(RuleName::new("SQL dynamic statement")),
            Outcome::Suppressed(RuleName::new("implementation-defined statement")),
        ]
    );

    let codes: Vec<_> = expansion.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![DiagnosticCode::G0201, DiagnosticCode::G0203]);
}

#[test]
fn test_reserved_and_non_reserved_words() {
    let expansion = foundation()
        .expand_selectors(&["reserved word", "non-reserved word"], &ExpansionPolicy::words())
        .unwrap();

    let literals = expansion.literals();
    assert_eq!(&literals[..3], &["ABS", "ALL", "ALLOCATE"]);
    assert_eq!(literals.len(), 12 + 12);
    assert_eq!(literals.last(), Some(&"BREADTH"));
    assert!(expansion.diagnostics().is_empty());
}

#[test]
fn test_word_policy_on_statement_rule_is_unsupported() {
    let expansion = foundation()
        .expand_rule("SQL transaction statement", &ExpansionPolicy::words())
        .unwrap();

    assert!(expansion.literals().is_empty());
    assert_eq!(expansion.diagnostics().len(), 3);
    assert!(expansion.diagnostics().iter().all(|d| d.code == DiagnosticCode::G0202));
}

#[test]
fn test_collapse_mode_matches_fidelity_mode_on_single_line_alternatives() {
    let fidelity = statements();
    let strict = foundation()
        .expand_rule(
            "SQL executable statement",
            &ExpansionPolicy::statements().with_terminal_trim(TerminalTrim::Collapse),
        )
        .unwrap();
    assert_eq!(fidelity, strict);
}

#[test]
fn test_unknown_selector() {
    let err = foundation()
        .expand_rule("SQL procedure statement", &ExpansionPolicy::statements())
        .unwrap_err();
    assert!(matches!(err, Error::UnknownSelector(_)));
    assert!(err.to_string().contains("<SQL procedure statement>"));
}
