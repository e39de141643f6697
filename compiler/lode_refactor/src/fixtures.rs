//! Documents shared by the unit tests.

use lode_ir::{Document, DocumentId, Span, SyntaxKind, TreeBuilder};

/// ```text
/// void M() {
///     var x = 1;
///     var a = 1, b = 2;
///     x = y;
///     foo(a);
/// }
/// ```
pub(crate) fn method() -> Document {
    let built = Document::build(DocumentId::new(1), |b| {
        b.start_node(SyntaxKind::SourceFile);
        b.start_node(SyntaxKind::MethodDeclaration);
        b.start_node(SyntaxKind::PredefinedType)
            .token(SyntaxKind::VoidKw, "void")
            .finish_node();
        b.trivia(" ").token(SyntaxKind::Ident, "M");
        b.start_node(SyntaxKind::ParameterList)
            .token(SyntaxKind::LParen, "(")
            .token(SyntaxKind::RParen, ")")
            .finish_node();
        b.trivia(" ");
        b.start_node(SyntaxKind::Block).token(SyntaxKind::LBrace, "{");
        b.trivia("\n    ");
        local_declaration(b, &[("x", "1")]);
        b.trivia("\n    ");
        local_declaration(b, &[("a", "1"), ("b", "2")]);
        b.trivia("\n    ");
        assignment_statement(b, "x", "y");
        b.trivia("\n    ");
        invocation_statement(b, "foo", "a");
        b.trivia("\n").token(SyntaxKind::RBrace, "}");
        b.finish_node(); // Block
        b.finish_node(); // MethodDeclaration
        b.finish_node(); // SourceFile
    });
    match built {
        Ok(document) => document,
        Err(e) => panic!("fixture is well formed: {e}"),
    }
}

/// `var n = v, ...;`
pub(crate) fn local_declaration(b: &mut TreeBuilder, declarators: &[(&str, &str)]) {
    b.start_node(SyntaxKind::LocalDeclarationStatement);
    b.start_node(SyntaxKind::VariableDeclaration);
    b.token(SyntaxKind::VarKw, "var").trivia(" ");
    for (i, (name, value)) in declarators.iter().enumerate() {
        if i > 0 {
            b.token(SyntaxKind::Comma, ",").trivia(" ");
        }
        b.start_node(SyntaxKind::VariableDeclarator);
        b.token(SyntaxKind::Ident, name).trivia(" ");
        b.start_node(SyntaxKind::EqualsValueClause);
        b.token(SyntaxKind::Eq, "=").trivia(" ");
        literal(b, value);
        b.finish_node(); // EqualsValueClause
        b.finish_node(); // VariableDeclarator
    }
    b.finish_node(); // VariableDeclaration
    b.token(SyntaxKind::Semicolon, ";");
    b.finish_node();
}

/// `target = value;`
pub(crate) fn assignment_statement(b: &mut TreeBuilder, target: &str, value: &str) {
    b.start_node(SyntaxKind::ExpressionStatement);
    b.start_node(SyntaxKind::AssignmentExpression);
    identifier(b, target);
    b.trivia(" ").token(SyntaxKind::Eq, "=").trivia(" ");
    identifier(b, value);
    b.finish_node();
    b.token(SyntaxKind::Semicolon, ";");
    b.finish_node();
}

/// `callee(argument);`
pub(crate) fn invocation_statement(b: &mut TreeBuilder, callee: &str, argument: &str) {
    b.start_node(SyntaxKind::ExpressionStatement);
    b.start_node(SyntaxKind::InvocationExpression);
    identifier(b, callee);
    b.start_node(SyntaxKind::ArgumentList);
    b.token(SyntaxKind::LParen, "(");
    b.start_node(SyntaxKind::Argument);
    identifier(b, argument);
    b.finish_node();
    b.token(SyntaxKind::RParen, ")");
    b.finish_node(); // ArgumentList
    b.finish_node(); // InvocationExpression
    b.token(SyntaxKind::Semicolon, ";");
    b.finish_node();
}

pub(crate) fn identifier(b: &mut TreeBuilder, name: &str) {
    b.start_node(SyntaxKind::IdentifierName)
        .token(SyntaxKind::Ident, name)
        .finish_node();
}

fn literal(b: &mut TreeBuilder, value: &str) {
    b.start_node(SyntaxKind::LiteralExpression)
        .token(SyntaxKind::IntLiteral, value)
        .finish_node();
}

/// Offset of the first occurrence of `needle` in the document text.
pub(crate) fn offset(document: &Document, needle: &str) -> u32 {
    match document.text().find(needle) {
        Some(at) => at as u32,
        None => panic!("{needle:?} not in fixture text"),
    }
}

/// Span of the first occurrence of `needle` in the document text.
pub(crate) fn span_of(document: &Document, needle: &str) -> Span {
    Span::with_len(offset(document, needle), needle.len() as u32)
}
