//! Syntax kinds.
//!
//! One closed enumeration tags every element of a [`SyntaxTree`](crate::SyntaxTree):
//! token kinds first, then node kinds. Kind filters and extraction rules
//! are plain matches over this tag.

use std::fmt;

/// Kind tag for tokens and nodes.
///
/// Token kinds are declared before `FIRST_NODE`; keep new token kinds in
/// that block so [`SyntaxKind::is_token`] stays a single comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    Ident,
    IntLiteral,
    StringLiteral,
    VarKw,
    IntKw,
    StringKw,
    NewKw,
    ReturnKw,
    VoidKw,
    Semicolon,
    Comma,
    Dot,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Nodes
    SourceFile,
    MethodDeclaration,
    ParameterList,
    Parameter,
    PredefinedType,
    Block,
    LocalDeclarationStatement,
    VariableDeclaration,
    VariableDeclarator,
    EqualsValueClause,
    ExpressionStatement,
    ReturnStatement,
    AssignmentExpression,
    BinaryExpression,
    InvocationExpression,
    ArgumentList,
    Argument,
    IdentifierName,
    LiteralExpression,
    ParenthesizedExpression,
    MemberAccessExpression,
    AnonymousObjectCreationExpression,
    AnonymousObjectMemberDeclarator,
    /// Node wrapping tokens an external parser could not place.
    Error,
}

impl SyntaxKind {
    const FIRST_NODE: SyntaxKind = SyntaxKind::SourceFile;

    /// Terminal kinds (tokens).
    #[inline]
    pub fn is_token(self) -> bool {
        self < Self::FIRST_NODE
    }

    /// Non-terminal kinds (nodes).
    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::VarKw
                | SyntaxKind::IntKw
                | SyntaxKind::StringKw
                | SyntaxKind::NewKw
                | SyntaxKind::ReturnKw
                | SyntaxKind::VoidKw
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::LocalDeclarationStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::ReturnStatement
        )
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::AssignmentExpression
                | SyntaxKind::BinaryExpression
                | SyntaxKind::InvocationExpression
                | SyntaxKind::IdentifierName
                | SyntaxKind::LiteralExpression
                | SyntaxKind::ParenthesizedExpression
                | SyntaxKind::MemberAccessExpression
                | SyntaxKind::AnonymousObjectCreationExpression
        )
    }

    /// Human-readable name, used in logs and test failure output.
    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::Ident => "identifier",
            SyntaxKind::IntLiteral => "integer literal",
            SyntaxKind::StringLiteral => "string literal",
            SyntaxKind::VarKw => "var",
            SyntaxKind::IntKw => "int",
            SyntaxKind::StringKw => "string",
            SyntaxKind::NewKw => "new",
            SyntaxKind::ReturnKw => "return",
            SyntaxKind::VoidKw => "void",
            SyntaxKind::Semicolon => ";",
            SyntaxKind::Comma => ",",
            SyntaxKind::Dot => ".",
            SyntaxKind::Eq => "=",
            SyntaxKind::Plus => "+",
            SyntaxKind::Minus => "-",
            SyntaxKind::Star => "*",
            SyntaxKind::Slash => "/",
            SyntaxKind::LParen => "(",
            SyntaxKind::RParen => ")",
            SyntaxKind::LBrace => "{",
            SyntaxKind::RBrace => "}",
            SyntaxKind::SourceFile => "source file",
            SyntaxKind::MethodDeclaration => "method declaration",
            SyntaxKind::ParameterList => "parameter list",
            SyntaxKind::Parameter => "parameter",
            SyntaxKind::PredefinedType => "predefined type",
            SyntaxKind::Block => "block",
            SyntaxKind::LocalDeclarationStatement => "local declaration statement",
            SyntaxKind::VariableDeclaration => "variable declaration",
            SyntaxKind::VariableDeclarator => "variable declarator",
            SyntaxKind::EqualsValueClause => "initializer",
            SyntaxKind::ExpressionStatement => "expression statement",
            SyntaxKind::ReturnStatement => "return statement",
            SyntaxKind::AssignmentExpression => "assignment",
            SyntaxKind::BinaryExpression => "binary expression",
            SyntaxKind::InvocationExpression => "invocation",
            SyntaxKind::ArgumentList => "argument list",
            SyntaxKind::Argument => "argument",
            SyntaxKind::IdentifierName => "identifier name",
            SyntaxKind::LiteralExpression => "literal",
            SyntaxKind::ParenthesizedExpression => "parenthesized expression",
            SyntaxKind::MemberAccessExpression => "member access",
            SyntaxKind::AnonymousObjectCreationExpression => "anonymous object creation",
            SyntaxKind::AnonymousObjectMemberDeclarator => "anonymous object member",
            SyntaxKind::Error => "error",
        }
    }
}

impl fmt::Debug for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
