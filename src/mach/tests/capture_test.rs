use super::*;
use crate::mach::Val;

#[test]
fn test_open_brace_pushes_empty_quotation() {
    let mut m = Machine::default();
    m.process_token("{").unwrap();
    assert!(m.is_capturing());
    assert_eq!(stack(&m), vec!["{ }"]);
    m.process_token("}").unwrap();
    assert!(!m.is_capturing());
    assert_eq!(stack(&m), vec!["{ }"]);
}

#[test]
fn test_tokens_are_captured_raw() {
    let mut m = Machine::default();
    m.enter("{ 1 'a_b nosuchword + }").unwrap();
    match m.stack().iter().last() {
        Some(Val::Quotation(q)) => {
            let tokens: Vec<&str> = q.tokens().iter().map(|t| &**t).collect();
            assert_eq!(tokens, vec!["1", "'a_b", "nosuchword", "+"]);
        }
        other => panic!("expected quotation, got {:?}", other),
    }
}

#[test]
fn test_nested_braces_are_children() {
    let mut m = Machine::default();
    m.enter("{ a { b { c } } d }").unwrap();
    assert_eq!(stack(&m), vec!["{ a { b { c } } d }"]);
}

#[test]
fn test_capture_spans_lines() {
    let mut m = Machine::default();
    m.enter("{ 1").unwrap();
    assert!(m.is_capturing());
    m.enter("{ 2 }").unwrap();
    assert!(m.is_capturing());
    m.enter("3 } do").unwrap();
    assert!(!m.is_capturing());
    assert_eq!(stack(&m), vec!["1", "{ 2 }", "3"]);
}

#[test]
fn test_unmatched_close() {
    let mut m = Machine::default();
    assert_eq!(run(&mut m, "1 }"), "UNMATCHED BRACE\n");
    assert_eq!(stack(&m), vec!["1"]);
}
