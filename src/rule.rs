//! The vars-on-top rule.
//!
//! Every check looks at one node and the statement list directly nested in
//! it. Function declarations may declare variables only as a leading run of
//! their body; loops, branches, cases and exception handlers may not declare
//! any. Each offending node is reported once, on the node itself.

use oxc_ast::ast::{
    CatchClause, DoWhileStatement, ForInStatement, ForOfStatement, ForStatement,
    ForStatementInit, ForStatementLeft, Function, FunctionType, IfStatement, Statement,
    SwitchCase, TryStatement, WhileStatement,
};
use oxc_span::Span;
use serde::Serialize;

use crate::classify::{classify, declarations_on_top, has_declaration};
use crate::report::{Diagnostic, ReportSink, MESSAGE};

/// Node kinds this rule is dispatched on, named as in ESTree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    FunctionDeclaration,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    IfStatement,
    SwitchCase,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
}

impl NodeKind {
    pub const ALL: [NodeKind; 10] = [
        NodeKind::FunctionDeclaration,
        NodeKind::ForStatement,
        NodeKind::ForInStatement,
        NodeKind::ForOfStatement,
        NodeKind::IfStatement,
        NodeKind::SwitchCase,
        NodeKind::TryStatement,
        NodeKind::CatchClause,
        NodeKind::WhileStatement,
        NodeKind::DoWhileStatement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::ForInStatement => "ForInStatement",
            NodeKind::ForOfStatement => "ForOfStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::SwitchCase => "SwitchCase",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::CatchClause => "CatchClause",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::DoWhileStatement => "DoWhileStatement",
        }
    }

    pub fn from_name(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A borrowed AST node the rule knows how to check.
#[derive(Debug, Clone, Copy)]
pub enum Checkable<'r, 'a> {
    Function(&'r Function<'a>),
    For(&'r ForStatement<'a>),
    ForIn(&'r ForInStatement<'a>),
    ForOf(&'r ForOfStatement<'a>),
    If(&'r IfStatement<'a>),
    Case(&'r SwitchCase<'a>),
    Try(&'r TryStatement<'a>),
    Catch(&'r CatchClause<'a>),
    While(&'r WhileStatement<'a>),
    DoWhile(&'r DoWhileStatement<'a>),
}

impl<'r, 'a> Checkable<'r, 'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Checkable::Function(_) => NodeKind::FunctionDeclaration,
            Checkable::For(_) => NodeKind::ForStatement,
            Checkable::ForIn(_) => NodeKind::ForInStatement,
            Checkable::ForOf(_) => NodeKind::ForOfStatement,
            Checkable::If(_) => NodeKind::IfStatement,
            Checkable::Case(_) => NodeKind::SwitchCase,
            Checkable::Try(_) => NodeKind::TryStatement,
            Checkable::Catch(_) => NodeKind::CatchClause,
            Checkable::While(_) => NodeKind::WhileStatement,
            Checkable::DoWhile(_) => NodeKind::DoWhileStatement,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Checkable::Function(node) => node.span,
            Checkable::For(node) => node.span,
            Checkable::ForIn(node) => node.span,
            Checkable::ForOf(node) => node.span,
            Checkable::If(node) => node.span,
            Checkable::Case(node) => node.span,
            Checkable::Try(node) => node.span,
            Checkable::Catch(node) => node.span,
            Checkable::While(node) => node.span,
            Checkable::DoWhile(node) => node.span,
        }
    }

    /// Whether the node breaks the rule. Evaluation stops at the first
    /// failing condition.
    pub fn violates(&self) -> bool {
        match *self {
            Checkable::Function(func) => !function_vars_on_top(func),
            Checkable::For(node) => {
                matches!(node.init, Some(ForStatementInit::VariableDeclaration(_)))
                    || declares_in(&node.body)
            }
            Checkable::ForIn(node) => {
                matches!(node.left, ForStatementLeft::VariableDeclaration(_))
                    || declares_in(&node.body)
            }
            Checkable::ForOf(node) => {
                matches!(node.left, ForStatementLeft::VariableDeclaration(_))
                    || declares_in(&node.body)
            }
            Checkable::If(node) => declares_in(&node.consequent),
            Checkable::Case(node) => has_declaration(&classify(&node.consequent)),
            Checkable::Try(node) => has_declaration(&classify(&node.block.body)),
            Checkable::Catch(node) => has_declaration(&classify(&node.body.body)),
            Checkable::While(node) => declares_in(&node.body),
            Checkable::DoWhile(node) => declares_in(&node.body),
        }
    }
}

/// Runs the rule on one node, reporting at most one diagnostic.
pub fn check(node: &Checkable<'_, '_>, sink: &mut dyn ReportSink) {
    if node.violates() {
        sink.report(Diagnostic {
            kind: node.kind(),
            span: node.span(),
            message: MESSAGE,
        });
    }
}

// Only declarations are held to the prefix rule; expressions, overload
// signatures and `declare function` are left alone.
fn function_vars_on_top(func: &Function<'_>) -> bool {
    if func.r#type != FunctionType::FunctionDeclaration {
        return true;
    }
    match &func.body {
        Some(body) => declarations_on_top(&classify(&body.statements)),
        None => true,
    }
}

fn declares_in(body: &Statement<'_>) -> bool {
    has_declaration(&classify(statements_of(body)))
}

/// Statements directly nested in a loop or branch body. A bare statement
/// body counts as a list of one.
fn statements_of<'r, 'a>(body: &'r Statement<'a>) -> &'r [Statement<'a>] {
    match body {
        Statement::BlockStatement(block) => &block.body,
        other => std::slice::from_ref(other),
    }
}
