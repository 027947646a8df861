//! Checks that variable declarations sit at the top of their function.
//!
//! ```
//! use oxc_span::SourceType;
//! use vars_on_top::{parse_and_check, NodeKind};
//!
//! let diags = parse_and_check("function f() { g(); var a; }", SourceType::mjs()).unwrap();
//! assert_eq!(diags[0].kind, NodeKind::FunctionDeclaration);
//! ```

pub mod classify;
pub mod logging;
pub mod parser;
pub mod report;
pub mod rule;
pub mod walker;

pub use classify::{classify, declarations_on_top, has_declaration, StatementTag};
pub use parser::{parse_and_check, source_type_for};
pub use report::{Diagnostic, Location, ReportSink, MESSAGE};
pub use rule::{check, Checkable, NodeKind};
pub use walker::{check_program, VarsOnTop};
