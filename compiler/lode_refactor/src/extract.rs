//! Extraction rules.
//!
//! An extraction rule maps each node inspected during resolution to the
//! node the caller should see in its place. Rules are plain functions of a
//! node so they can be tested apart from resolution.

use lode_ir::{SyntaxKind, SyntaxNode};

/// Leave the node as it is.
#[inline]
pub fn identity(node: SyntaxNode<'_>) -> SyntaxNode<'_> {
    node
}

/// Redirect a declaration or an assignment to the statement holding it.
///
/// - a `VariableDeclarator` that is the only declarator of its declaration
///   becomes the enclosing `LocalDeclarationStatement`
/// - an `AssignmentExpression` that is the whole expression of an
///   `ExpressionStatement` becomes that statement
///
/// A declarator among several is left alone: there is no single statement
/// it stands for. Every other node is returned unchanged.
pub fn extract_node_from_declaration_and_assignment(node: SyntaxNode<'_>) -> SyntaxNode<'_> {
    let redirected = match node.kind() {
        SyntaxKind::VariableDeclarator => sole_declarator_statement(node),
        SyntaxKind::AssignmentExpression => assignment_statement(node),
        _ => None,
    };
    redirected.unwrap_or(node)
}

fn sole_declarator_statement(declarator: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    let declaration = declarator
        .parent()
        .filter(|parent| parent.kind() == SyntaxKind::VariableDeclaration)?;
    let declarators = declaration
        .child_nodes()
        .filter(|child| child.kind() == SyntaxKind::VariableDeclarator)
        .count();
    if declarators != 1 {
        return None;
    }
    declaration
        .parent()
        .filter(|parent| parent.kind() == SyntaxKind::LocalDeclarationStatement)
}

fn assignment_statement(assignment: SyntaxNode<'_>) -> Option<SyntaxNode<'_>> {
    assignment
        .parent()
        .filter(|parent| parent.kind() == SyntaxKind::ExpressionStatement)
}

#[cfg(test)]
mod tests;
