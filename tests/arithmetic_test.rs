mod common;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_binary_operators() {
    assert_eq!(eval("2 3 +"), vec!["5"]);
    assert_eq!(eval("2 3 -"), vec!["-1"]);
    assert_eq!(eval("6 7 *"), vec!["42"]);
    assert_eq!(eval("2 10 **"), vec!["1024"]);
    assert_eq!(eval("12 10 &"), vec!["8"]);
    assert_eq!(eval("12 10 |"), vec!["14"]);
    assert_eq!(eval("12 10 ^"), vec!["6"]);
    assert_eq!(eval("1 4 <<"), vec!["16"]);
    assert_eq!(eval("-16 2 >>"), vec!["-4"]);
}

#[test]
fn test_division_is_float() {
    assert_eq!(eval("10 2 /"), vec!["5.0"]);
    assert_eq!(eval("1 4 /"), vec!["0.25"]);
}

#[test]
fn test_floor_division() {
    assert_eq!(eval("10 3 //"), vec!["3"]);
    assert_eq!(eval("-10 3 //"), vec!["-4"]);
    assert_eq!(eval("10 3 %"), vec!["1"]);
    assert_eq!(eval("-10 3 %"), vec!["2"]);
    assert_eq!(eval("7.0 0.1 //"), vec!["69.0"]);
    assert_eq!(eval("-7.5 2 //"), vec!["-4.0"]);
}

#[test]
fn test_mixed_promotes_to_float() {
    assert_eq!(eval("1 0.5 +"), vec!["1.5"]);
    assert_eq!(eval("2.5 2 *"), vec!["5.0"]);
}

#[test]
fn test_string_concatenation() {
    assert_eq!(eval("'foo 'bar +"), vec!["'foobar"]);
}

#[test]
fn test_arithmetic_errors() {
    assert_eq!(fail("1 0 /"), "ARITHMETIC ERROR; DIVISION BY ZERO");
    assert_eq!(fail("1 0 //"), "ARITHMETIC ERROR; DIVISION BY ZERO");
    assert_eq!(fail("1 0 %"), "ARITHMETIC ERROR; DIVISION BY ZERO");
    assert_eq!(fail("9223372036854775807 1 +"), "ARITHMETIC ERROR; OVERFLOW");
    assert_eq!(fail("'x int"), "ARITHMETIC ERROR; INVALID INTEGER 'x");
}

#[test]
fn test_type_errors() {
    assert_eq!(fail("1.5 1 &"), "TYPE ERROR; FLOAT INTEGER &");
    assert_eq!(fail("'a 1 -"), "TYPE ERROR; STRING INTEGER -");
    assert_eq!(fail("{ } 1 +"), "TYPE ERROR; QUOTATION INTEGER +");
}

#[test]
fn test_comparisons() {
    assert_eq!(eval("1 2 <"), vec!["true"]);
    assert_eq!(eval("2 2 <="), vec!["true"]);
    assert_eq!(eval("1 2 >"), vec!["false"]);
    assert_eq!(eval("2 2.0 ="), vec!["true"]);
    assert_eq!(eval("'a 'b <"), vec!["true"]);
    assert_eq!(eval("1 '1 ="), vec!["false"]);
    assert_eq!(eval("1 '1 !="), vec!["true"]);
}

#[test]
fn test_logic() {
    assert_eq!(eval("1 0 and"), vec!["false"]);
    assert_eq!(eval("1 0 or"), vec!["true"]);
    assert_eq!(eval("0 not"), vec!["true"]);
    assert_eq!(eval("5 ~"), vec!["-6"]);
}

#[test]
fn test_conversions() {
    assert_eq!(eval("3.9 int"), vec!["3"]);
    assert_eq!(eval("'17 int"), vec!["17"]);
    assert_eq!(eval("3 float"), vec!["3.0"]);
    assert_eq!(eval("'2.5 float"), vec!["2.5"]);
    assert_eq!(eval("42 str"), vec!["'42"]);
    assert_eq!(eval("'0 bool"), vec!["true"]);
    assert_eq!(eval("0 bool"), vec!["false"]);
}
