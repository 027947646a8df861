use log::debug;
use oxc_ast::ast::{
    CatchClause, DoWhileStatement, ForInStatement, ForOfStatement, ForStatement, Function,
    IfStatement, Program, SwitchCase, TryStatement, WhileStatement,
};
use oxc_ast_visit::{walk, Visit};
use oxc_syntax::scope::ScopeFlags;

use crate::report::{Diagnostic, ReportSink};
use crate::rule::{check, Checkable};

/// Depth-first walk that runs the rule on every checkable node, parents
/// before children.
pub struct VarsOnTop<'s> {
    sink: &'s mut dyn ReportSink,
}

impl<'s> VarsOnTop<'s> {
    pub fn new(sink: &'s mut dyn ReportSink) -> Self {
        VarsOnTop { sink }
    }

    fn run(&mut self, node: Checkable<'_, '_>) {
        let sink = &mut *self.sink;
        check(&node, &mut |diagnostic: Diagnostic| {
            debug!(
                "{} at {}..{}",
                diagnostic.kind.name(),
                diagnostic.span.start,
                diagnostic.span.end
            );
            sink.report(diagnostic);
        });
    }
}

impl<'a, 's> Visit<'a> for VarsOnTop<'s> {
    fn visit_function(&mut self, it: &Function<'a>, flags: ScopeFlags) {
        self.run(Checkable::Function(it));
        walk::walk_function(self, it, flags);
    }

    fn visit_for_statement(&mut self, it: &ForStatement<'a>) {
        self.run(Checkable::For(it));
        walk::walk_for_statement(self, it);
    }

    fn visit_for_in_statement(&mut self, it: &ForInStatement<'a>) {
        self.run(Checkable::ForIn(it));
        walk::walk_for_in_statement(self, it);
    }

    fn visit_for_of_statement(&mut self, it: &ForOfStatement<'a>) {
        self.run(Checkable::ForOf(it));
        walk::walk_for_of_statement(self, it);
    }

    fn visit_if_statement(&mut self, it: &IfStatement<'a>) {
        self.run(Checkable::If(it));
        walk::walk_if_statement(self, it);
    }

    fn visit_switch_case(&mut self, it: &SwitchCase<'a>) {
        self.run(Checkable::Case(it));
        walk::walk_switch_case(self, it);
    }

    fn visit_try_statement(&mut self, it: &TryStatement<'a>) {
        self.run(Checkable::Try(it));
        walk::walk_try_statement(self, it);
    }

    fn visit_catch_clause(&mut self, it: &CatchClause<'a>) {
        self.run(Checkable::Catch(it));
        walk::walk_catch_clause(self, it);
    }

    fn visit_while_statement(&mut self, it: &WhileStatement<'a>) {
        self.run(Checkable::While(it));
        walk::walk_while_statement(self, it);
    }

    fn visit_do_while_statement(&mut self, it: &DoWhileStatement<'a>) {
        self.run(Checkable::DoWhile(it));
        walk::walk_do_while_statement(self, it);
    }
}

pub fn check_program(program: &Program<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut collect = |diagnostic: Diagnostic| diagnostics.push(diagnostic);
    VarsOnTop::new(&mut collect).visit_program(program);
    diagnostics
}
