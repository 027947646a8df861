use oxc_span::Span;
use serde_json::{json, Value};

use crate::rule::NodeKind;

pub const MESSAGE: &str = "All \"var\" declarations must be at the top of the function scope.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: NodeKind,
    pub span: Span,
    pub message: &'static str,
}

/// Receiver for rule violations. Called zero or more times in traversal
/// order; nothing is ever read back.
pub trait ReportSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F: FnMut(Diagnostic)> ReportSink for F {
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// 1-based line and column of a byte offset. Columns count chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn of(source: &str, offset: u32) -> Self {
        let mut offset = (offset as usize).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Location {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl Diagnostic {
    pub fn location(&self, source: &str) -> Location {
        Location::of(source, self.span.start)
    }

    pub fn render(&self, path: &str, source: &str) -> String {
        let loc = self.location(source);
        format!(
            "{}:{}:{}: {} [{}]",
            path,
            loc.line,
            loc.column,
            self.message,
            self.kind.name()
        )
    }

    pub fn to_json(&self, path: &str, source: &str) -> Value {
        let loc = self.location(source);
        json!({
            "file": path,
            "line": loc.line,
            "column": loc.column,
            "start": self.span.start,
            "end": self.span.end,
            "node": self.kind,
            "message": self.message,
        })
    }
}
