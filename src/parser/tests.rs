#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;
#[cfg(test)]
use crate::lexer::Tokenizer;

#[cfg(test)]
fn parse_str(input: &str) -> Result<SymbolTable, BrikError> {
    let tokens = Tokenizer::new(input).tokenize();
    Parser::new(tokens).parse()
}

#[test]
fn test_scalar_assignments() {
    let symbols = parse_str(
        r#"
x = 5
y = 3.14
z = "hi"
"#,
    )
    .expect("Failed to parse scalars");

    assert_eq!(symbols["x"], Value::Int(5));
    assert_eq!(symbols["y"], Value::Float(3.14));
    assert_eq!(symbols["z"], Value::Str("hi".into()));
}

#[test]
fn test_nested_block_preserves_key_order() {
    let symbols = parse_str("cfg = { width = 10, height = 20 }").expect("Failed to parse block");

    let block = symbols["cfg"].as_block().expect("Expected 'cfg' to be a block");
    let keys: Vec<&str> = block.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["width", "height"]);
    assert_eq!(block["width"], Value::Int(10));
    assert_eq!(block["height"], Value::Int(20));
}

#[test]
fn test_list_with_literal_and_reference_elements() {
    let symbols = parse_str(
        r#"
a = 1
b = [a, 2, a]
"#,
    )
    .expect("Failed to parse list");

    assert_eq!(
        symbols["b"],
        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(1)])
    );
}

#[test]
fn test_forward_reference_fails() {
    let err = parse_str("b = [a]").expect_err("Expected undefined name error");
    match err {
        BrikError::UndefinedName { ref name, .. } => assert_eq!(name, "a"),
        other => panic!("Expected UndefinedName, got {:?}", other),
    }
    assert!(err.to_string().contains('a'));
}

#[test]
fn test_missing_equals_is_a_syntax_error() {
    let err = parse_str("x 5").expect_err("Expected syntax error");
    match err {
        BrikError::SyntaxError { ref message, .. } => assert!(message.contains('5')),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_trailing_incomplete_statement_fails() {
    let err = parse_str("x =").expect_err("Expected syntax error");
    match err {
        BrikError::SyntaxError { ref message, .. } => {
            assert!(message.contains("end of input"));
        }
        other => panic!("Expected SyntaxError, got {:?}", other),
    }

    assert!(matches!(
        parse_str("x").expect_err("bare identifier"),
        BrikError::SyntaxError { .. }
    ));
}

#[test]
fn test_reassignment_overwrites() {
    let symbols = parse_str(
        r#"
x = 1
x = 2
"#,
    )
    .expect("Failed to parse");

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols["x"], Value::Int(2));
}

#[test]
fn test_list_references_are_eager_copies() {
    // Reassigning 'a' after the list captured it must not change the list.
    let symbols = parse_str(
        r#"
a = 1
b = [a]
a = 2
"#,
    )
    .expect("Failed to parse");

    assert_eq!(symbols["b"], Value::List(vec![Value::Int(1)]));
    assert_eq!(symbols["a"], Value::Int(2));
}

#[test]
fn test_block_duplicate_keys_overwrite() {
    let symbols = parse_str("cfg = { a = 1 a = 2 }").expect("Failed to parse");
    let block = symbols["cfg"].as_block().expect("Expected block");
    assert_eq!(block.len(), 1);
    assert_eq!(block["a"], Value::Int(2));
}

#[test]
fn test_unterminated_block_and_list_are_tolerated() {
    let symbols = parse_str("cfg = { a = 1").expect("Unterminated block should parse");
    assert_eq!(symbols["cfg"].as_block().expect("block")["a"], Value::Int(1));

    let symbols = parse_str("xs = [1, 2").expect("Unterminated list should parse");
    assert_eq!(symbols["xs"], Value::List(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn test_trailing_and_doubled_commas() {
    let symbols = parse_str("xs = [1, 2,]\nys = [1,, 2]").expect("Failed to parse");
    assert_eq!(symbols["xs"], Value::List(vec![Value::Int(1), Value::Int(2)]));
    assert_eq!(symbols["ys"], Value::List(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn test_nested_structures() {
    let symbols = parse_str(
        r#"
block_size = 32
piece = { shape = [1, 1.0, "J"], colors = { fill = "cyan" } }
pieces = [piece]
"#,
    )
    .expect("Failed to parse nested document");

    let piece = symbols["piece"].as_block().expect("Expected 'piece' block");
    let shape = piece["shape"].as_list().expect("Expected 'shape' list");
    assert_eq!(shape.len(), 3);
    assert_eq!(shape[1], Value::Float(1.0));

    let colors = piece["colors"].as_block().expect("Expected 'colors' block");
    assert_eq!(colors["fill"], Value::Str("cyan".into()));

    // A block reference in a list copies the whole tree.
    let pieces = symbols["pieces"].as_list().expect("Expected 'pieces' list");
    assert_eq!(pieces[0], symbols["piece"]);
}

#[test]
fn test_value_position_rejects_stray_operator() {
    let err = parse_str("x = }").expect_err("Expected syntax error");
    match err {
        BrikError::SyntaxError { ref message, .. } => assert!(message.contains('}')),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_empty_block_and_list() {
    let symbols = parse_str("a = {}\nb = []").expect("Failed to parse");
    assert!(symbols["a"].as_block().expect("block").is_empty());
    assert!(symbols["b"].as_list().expect("list").is_empty());
}
