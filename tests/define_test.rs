mod common;
use brace::lang::ErrorCode;
use brace::mach::Machine;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_define_quotation() {
    assert_eq!(eval("{ dup * } 'square' define 5 square"), vec!["25"]);
}

#[test]
fn test_define_value() {
    assert_eq!(eval("42 'answer define answer answer +"), vec!["84"]);
}

#[test]
fn test_define_requires_string_name() {
    let mut m = Machine::default();
    let error = m.enter("{ } 5 define").unwrap_err();
    assert_eq!(error.code(), ErrorCode::TypeError);
    assert_eq!(
        error.to_string(),
        "TYPE ERROR; define EXPECTS STRING NAME, GOT INTEGER"
    );
}

#[test]
fn test_definition_does_not_leak() {
    let mut m = Machine::default();
    assert_eq!(exec(&mut m, "{ 1 'x' define } do"), "");
    assert_eq!(exec(&mut m, "x"), "UNKNOWN TOKEN; x\n");
}

#[test]
fn test_definition_visible_later_in_same_quotation() {
    assert_eq!(eval("{ 3 'x' define x x * } do"), vec!["9"]);
}

#[test]
fn test_outer_definitions_visible_inside() {
    assert_eq!(eval("10 'ten' define { ten 1 + } do"), vec!["11"]);
}

#[test]
fn test_redefinition_inside_is_local() {
    let mut m = Machine::default();
    m.enter("1 'x' define { 2 'x' define x } do x").unwrap();
    assert_eq!(stack(&m), vec!["2", "1"]);
}

#[test]
fn test_late_binding() {
    let mut m = Machine::default();
    m.enter("{ helper 2 * } 'twice' define").unwrap();
    assert_eq!(exec(&mut m, "twice"), "UNKNOWN TOKEN; helper\n");
    m.enter("5 'helper' define twice").unwrap();
    assert_eq!(stack(&m), vec!["10"]);
    m.enter("7 'helper' define twice").unwrap();
    assert_eq!(stack(&m), vec!["10", "14"]);
}

#[test]
fn test_nested_definition() {
    assert_eq!(
        eval("{ { 1 + } 'inc' define inc inc } 'add2' define 3 add2"),
        vec!["5"]
    );
}

#[test]
fn test_recursion() {
    let mut m = Machine::default();
    m.enter("{ dup 1 > { drop dup 1 - fact * } { drop } ifelse } 'fact' define").unwrap();
    m.enter("5 fact").unwrap();
    assert_eq!(stack(&m), vec!["120"]);
}

#[test]
fn test_builtins_cannot_be_shadowed() {
    assert_eq!(eval("{ drop 0 } 'dup' define 3 dup"), vec!["3", "3"]);
}

#[test]
fn test_defs() {
    let mut m = Machine::default();
    assert_eq!(exec(&mut m, "defs"), "");
    m.enter("{ dup * } 'square' define 'hi_there 'greeting define").unwrap();
    assert_eq!(
        exec(&mut m, "defs"),
        "greeting: 'hi_there\nsquare: { dup * }\n"
    );
    assert_eq!(
        exec(&mut m, "{ 1 'local' define defs } do"),
        "greeting: 'hi_there\nlocal: 1\nsquare: { dup * }\n"
    );
}
