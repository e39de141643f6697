use pretty_assertions::assert_eq;

use super::*;

/// `x = 1;` as an expression statement inside a source file.
fn assignment_statement() -> TreeBuilder {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .start_node(SyntaxKind::ExpressionStatement)
        .start_node(SyntaxKind::AssignmentExpression)
        .start_node(SyntaxKind::IdentifierName)
        .token(SyntaxKind::Ident, "x")
        .finish_node()
        .trivia(" ")
        .token(SyntaxKind::Eq, "=")
        .trivia(" ")
        .start_node(SyntaxKind::LiteralExpression)
        .token(SyntaxKind::IntLiteral, "1")
        .finish_node()
        .finish_node()
        .token(SyntaxKind::Semicolon, ";")
        .finish_node()
        .finish_node();
    b
}

#[test]
fn builds_text_and_spans() {
    let Ok((text, tree)) = assignment_statement().finish() else {
        panic!("balanced events should build");
    };
    assert_eq!(text, "x = 1;");
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.token_count(), 4);

    let root = tree.root();
    assert_eq!(root.kind(), SyntaxKind::SourceFile);
    assert_eq!(root.span(), Span::new(0, 6));

    let kinds_and_spans: Vec<_> = tree
        .tokens()
        .map(|t| (t.kind(), t.span()))
        .collect();
    assert_eq!(
        kinds_and_spans,
        vec![
            (SyntaxKind::Ident, Span::new(0, 1)),
            (SyntaxKind::Eq, Span::new(2, 3)),
            (SyntaxKind::IntLiteral, Span::new(4, 5)),
            (SyntaxKind::Semicolon, Span::new(5, 6)),
        ]
    );
}

#[test]
fn node_span_excludes_leading_and_trailing_trivia() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .trivia("  ")
        .start_node(SyntaxKind::IdentifierName)
        .token(SyntaxKind::Ident, "abc")
        .finish_node()
        .trivia("\n")
        .finish_node();
    let Ok((text, tree)) = b.finish() else {
        panic!("balanced events should build");
    };
    assert_eq!(text, "  abc\n");
    assert_eq!(tree.root().span(), Span::new(2, 5));
}

#[test]
fn empty_node_gets_point_span() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .token(SyntaxKind::Ident, "f")
        .start_node(SyntaxKind::ParameterList)
        .finish_node()
        .finish_node();
    let Ok((_, tree)) = b.finish() else {
        panic!("balanced events should build");
    };
    let Some(list) = tree.root().child_of_kind(SyntaxKind::ParameterList) else {
        panic!("parameter list should be a child of the root");
    };
    assert_eq!(list.span(), Span::point(1));
}

#[test]
fn parent_links_are_set() {
    let Ok((_, tree)) = assignment_statement().finish() else {
        panic!("balanced events should build");
    };
    for token in tree.tokens() {
        let parent = token.parent();
        assert!(
            parent.children().any(|c| c.into_token() == Some(token)),
            "{token:?} not among children of {parent:?}"
        );
    }
    assert!(tree.root().is_root());
    assert_eq!(tree.root().parent(), None);
}

#[test]
fn unbalanced_finish_is_reported() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .finish_node()
        .finish_node();
    assert_eq!(b.finish(), Err(BuildError::UnbalancedFinish));
}

#[test]
fn unclosed_nodes_are_reported() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .start_node(SyntaxKind::Block);
    assert_eq!(b.finish(), Err(BuildError::UnclosedNodes(2)));
}

#[test]
fn empty_builder_has_no_root() {
    assert_eq!(TreeBuilder::new().finish(), Err(BuildError::NoRoot));
}

#[test]
fn second_root_is_rejected() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .finish_node()
        .start_node(SyntaxKind::SourceFile);
    assert_eq!(b.finish(), Err(BuildError::MultipleRoots));
}

#[test]
fn token_outside_node_is_rejected() {
    let mut b = TreeBuilder::new();
    b.token(SyntaxKind::Ident, "x");
    assert_eq!(b.finish(), Err(BuildError::ElementOutsideNode));
}

#[test]
fn kind_mismatches_are_rejected() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::Ident);
    assert_eq!(
        b.finish(),
        Err(BuildError::NotANodeKind(SyntaxKind::Ident))
    );

    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .token(SyntaxKind::Block, "{");
    assert_eq!(
        b.finish(),
        Err(BuildError::NotATokenKind(SyntaxKind::Block))
    );
}

#[test]
fn first_error_wins() {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::SourceFile)
        .token(SyntaxKind::Semicolon, "")
        .finish_node()
        .finish_node();
    assert_eq!(
        b.finish(),
        Err(BuildError::EmptyToken(SyntaxKind::Semicolon))
    );
}

#[test]
fn error_messages_name_the_kind() {
    let msg = BuildError::NotATokenKind(SyntaxKind::Block).to_string();
    assert_eq!(msg, "`block` is a node kind, not a token kind");
}
