use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde_json::Value;
use vars_on_top::{logging, parse_and_check, source_type_for, Diagnostic};

fn check_file(path: &str) -> Result<(String, Vec<Diagnostic>)> {
    let code = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let diagnostics = parse_and_check(&code, source_type_for(Path::new(path)))
        .with_context(|| format!("checking {}", path))?;
    Ok((code, diagnostics))
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("vars-on-top", String::as_str)
}

/// Splits arguments into the `--json` switch and the file list. Any other
/// `--` option is rejected.
fn parse_args(args: &[String]) -> Option<(bool, Vec<&str>)> {
    let mut json = false;
    let mut files = Vec::new();
    for arg in args.iter().skip(1) {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with("--") {
            return None;
        } else {
            files.push(arg.as_str());
        }
    }
    if files.is_empty() {
        return None;
    }
    Some((json, files))
}

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = std::env::args().collect();
    let Some((json, files)) = parse_args(&args) else {
        eprintln!("Usage: {} [--json] input.js...", program_name(&args));
        return ExitCode::from(2);
    };

    let mut failed = false;
    let mut reported = 0usize;
    let mut out: Vec<Value> = Vec::new();
    for path in files {
        match check_file(path) {
            Ok((code, diagnostics)) => {
                reported += diagnostics.len();
                for d in &diagnostics {
                    if json {
                        out.push(d.to_json(path, &code));
                    } else {
                        println!("{}", d.render(path, &code));
                    }
                }
            }
            Err(err) => {
                eprintln!("vars-on-top: {:#}", err);
                failed = true;
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&out) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("vars-on-top: {}", err);
                failed = true;
            }
        }
    }

    if failed || reported > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_argv_has_a_program_name() {
        assert_eq!(program_name(&[]), "vars-on-top");
        assert_eq!(program_name(&args(&["bin/vot"])), "bin/vot");
    }

    #[test]
    fn json_switch_and_files() {
        let argv = args(&["vot", "a.js", "--json", "b.ts"]);
        let (json, files) = parse_args(&argv).unwrap();
        assert!(json);
        assert_eq!(files, ["a.js", "b.ts"]);
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(parse_args(&args(&["vot", "--jsn", "a.js"])).is_none());
        assert!(parse_args(&args(&["vot", "--json"])).is_none());
        assert!(parse_args(&[]).is_none());
    }
}
