use pretty_assertions::assert_eq;

use lode_ir::{Document, DocumentId, SyntaxKind, SyntaxNode};

use super::*;
use crate::fixtures::{self, identifier, span_of};

fn node_at<'a>(document: &'a Document, needle: &str, kind: SyntaxKind) -> SyntaxNode<'a> {
    let covering = document.tree().covering_node(span_of(document, needle));
    match covering.ancestors_and_self().find(|node| node.kind() == kind) {
        Some(node) => node,
        None => panic!("no {kind} around {needle:?}"),
    }
}

#[test]
fn identity_returns_input() {
    let document = fixtures::method();
    let root = document.tree().root();
    assert_eq!(identity(root), root);
}

#[test]
fn sole_declarator_becomes_statement() {
    let document = fixtures::method();
    let declarator = node_at(&document, "x = 1", SyntaxKind::VariableDeclarator);
    let extracted = extract_node_from_declaration_and_assignment(declarator);

    assert_eq!(extracted.kind(), SyntaxKind::LocalDeclarationStatement);
    assert_eq!(document.text_of(extracted.span()), Some("var x = 1;"));
}

#[test]
fn one_of_several_declarators_is_unchanged() {
    let document = fixtures::method();
    for needle in ["a = 1", "b = 2"] {
        let declarator = node_at(&document, needle, SyntaxKind::VariableDeclarator);
        assert_eq!(
            extract_node_from_declaration_and_assignment(declarator),
            declarator,
            "{needle}"
        );
    }
}

#[test]
fn statement_assignment_becomes_statement() {
    let document = fixtures::method();
    let assignment = node_at(&document, "x = y", SyntaxKind::AssignmentExpression);
    let extracted = extract_node_from_declaration_and_assignment(assignment);

    assert_eq!(extracted.kind(), SyntaxKind::ExpressionStatement);
    assert_eq!(document.text_of(extracted.span()), Some("x = y;"));
}

#[test]
fn nested_assignment_is_unchanged() {
    // (x = y);
    let built = Document::build(DocumentId::new(2), |b| {
        b.start_node(SyntaxKind::ExpressionStatement);
        b.start_node(SyntaxKind::ParenthesizedExpression);
        b.token(SyntaxKind::LParen, "(");
        b.start_node(SyntaxKind::AssignmentExpression);
        identifier(b, "x");
        b.trivia(" ").token(SyntaxKind::Eq, "=").trivia(" ");
        identifier(b, "y");
        b.finish_node();
        b.token(SyntaxKind::RParen, ")");
        b.finish_node();
        b.token(SyntaxKind::Semicolon, ";");
        b.finish_node();
    });
    let Ok(document) = built else {
        panic!("well formed");
    };
    let assignment = node_at(&document, "x = y", SyntaxKind::AssignmentExpression);
    assert_eq!(
        extract_node_from_declaration_and_assignment(assignment),
        assignment
    );
}

#[test]
fn detached_declarator_is_unchanged() {
    // A declarator whose parent is not a declaration, as an error-recovering
    // parser may produce.
    let built = Document::build(DocumentId::new(3), |b| {
        b.start_node(SyntaxKind::Error);
        b.start_node(SyntaxKind::VariableDeclarator);
        b.token(SyntaxKind::Ident, "z");
        b.finish_node();
        b.finish_node();
    });
    let Ok(document) = built else {
        panic!("well formed");
    };
    let declarator = node_at(&document, "z", SyntaxKind::VariableDeclarator);
    assert_eq!(
        extract_node_from_declaration_and_assignment(declarator),
        declarator
    );
}

#[test]
fn other_kinds_are_unchanged() {
    let document = fixtures::method();
    for (needle, kind) in [
        ("foo(a)", SyntaxKind::InvocationExpression),
        ("var a = 1, b = 2", SyntaxKind::VariableDeclaration),
        ("var x = 1;", SyntaxKind::LocalDeclarationStatement),
    ] {
        let node = node_at(&document, needle, kind);
        assert_eq!(extract_node_from_declaration_and_assignment(node), node);
    }
}
