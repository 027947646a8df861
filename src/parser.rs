use std::path::Path;

use anyhow::Result;
use log::{info, warn};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::report::Diagnostic;
use crate::walker::check_program;

/// Source type for a file, from its extension. Anything unrecognised is
/// treated as a JavaScript module.
pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::mjs())
}

pub fn parse_and_check(code: &str, source_type: SourceType) -> Result<Vec<Diagnostic>> {
    let alloc = Allocator::default();
    let parser = Parser::new(&alloc, code, source_type);
    let ret = parser.parse();
    if ret.panicked || !ret.errors.is_empty() {
        warn!("{} parse error(s)", ret.errors.len());
        anyhow::bail!("Parse errors: {:?}", ret.errors);
    }
    let diagnostics = check_program(&ret.program);
    info!(
        "checked {} top-level statements, {} diagnostic(s)",
        ret.program.body.len(),
        diagnostics.len()
    );
    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_type_follows_extension() {
        assert!(source_type_for(Path::new("a.ts")).is_typescript());
        assert!(source_type_for(Path::new("a.js")).is_javascript());
        assert!(source_type_for(Path::new("README")).is_javascript());
    }

    #[test]
    fn parse_errors_are_returned() {
        let err = parse_and_check("function (", SourceType::mjs()).unwrap_err();
        assert!(err.to_string().starts_with("Parse errors"));
    }

    #[test]
    fn clean_source_has_no_diagnostics() {
        let diags = parse_and_check("function f() { var a; a = 1; }", SourceType::mjs()).unwrap();
        assert!(diags.is_empty());
    }
}
