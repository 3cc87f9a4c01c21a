//! CLI integration tests
//!
//! Tests the `semant` binary end to end:
//! - Check command exit codes and diagnostic output
//! - JSON diagnostics
//! - Typecheck dump
//! - Explain command
//! - Configuration files and environment overrides

use assert_cmd::Command;
use insta::assert_snapshot;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn semant_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("semant");
    cmd.env("NO_COLOR", "1")
        .env_remove("SEMANT_LOG")
        .env_remove("SEMANT_DIAGNOSTICS")
        .env_remove("SEMANT_ENTRY_POINT")
        .env_remove("SEMANT_PRINT_INTRINSIC");
    cmd
}

fn expr(kind: Value, line: u32) -> Value {
    json!({ "kind": kind, "line": line })
}

fn ret_void(line: u32) -> Value {
    json!({ "Return": { "value": expr(json!("NoExpr"), line), "line": line } })
}

fn function(name: &str, stmts: Vec<Value>) -> Value {
    json!({ "Function": {
        "name": name,
        "return_type": "Void",
        "body": { "line": 1, "stmts": stmts },
        "line": 1
    }})
}

fn ast(decls: Vec<Value>) -> String {
    json!({ "ast_version": 1, "decls": decls }).to_string()
}

/// `void main() { return; }`
fn scenario_a() -> String {
    ast(vec![function("main", vec![ret_void(2)])])
}

/// `main` calling the undeclared `foo(1, 2)`
fn scenario_b() -> String {
    let call = expr(
        json!({ "Call": {
            "callee": "foo",
            "args": [expr(json!({ "Int": 1 }), 2), expr(json!({ "Int": 2 }), 2)]
        }}),
        2,
    );
    ast(vec![function("main", vec![json!({ "Expr": call }), ret_void(3)])])
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

// ══════════════════════════════════════════════════════════════════════════════
// CHECK
// ══════════════════════════════════════════════════════════════════════════════

mod check {
    use super::*;

    #[test]
    fn test_valid_program_passes() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &scenario_a());

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .success()
            .stdout(predicate::str::contains("No errors found"));
    }

    #[test]
    fn test_errors_halt_with_status_one() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &scenario_b());

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("error[S1010]"))
            .stderr(predicate::str::contains("Function 'foo' is not defined"))
            .stderr(predicate::str::contains(
                "Compilation halted due to static semantic errors.",
            ));
    }

    #[test]
    fn test_alias_c() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &scenario_a());

        semant_cmd()
            .current_dir(dir.path())
            .args(["c", &file])
            .assert()
            .success();
    }

    #[test]
    fn test_json_diagnostics_are_lines() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &scenario_b());

        let output = semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file, "--json"])
            .output()
            .unwrap();
        assert!(!output.status.success());

        let stderr = String::from_utf8(output.stderr).unwrap();
        let diag: Value = stderr
            .lines()
            .find(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .unwrap();
        assert_eq!(diag["code"], "S1010");
        assert_eq!(diag["kind"], "UndefinedFunction");
        assert_eq!(diag["line"], 2);
        assert_eq!(diag["level"], "error");
    }

    #[test]
    fn test_json_from_environment() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &scenario_b());

        semant_cmd()
            .current_dir(dir.path())
            .env("SEMANT_DIAGNOSTICS", "json")
            .args(["check", &file])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"code\":\"S1010\""));
    }

    #[test]
    fn test_long_expression_chain_loads() {
        let dir = TempDir::new().unwrap();
        let one = expr(json!({ "Int": 1 }), 2);
        let sum = (1..200).fold(one.clone(), |acc, _| {
            let add = json!({ "Binary": { "op": "Add", "lhs": acc, "rhs": one.clone() } });
            expr(add, 2)
        });
        let program = ast(vec![function("main", vec![json!({ "Expr": sum }), ret_void(3)])]);
        let file = write_file(&dir, "prog.json", &program);

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .success()
            .stdout(predicate::str::contains("No errors found"));
    }

    #[test]
    fn test_missing_file() {
        semant_cmd()
            .args(["check", "does-not-exist.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load AST"));
    }

    #[test]
    fn test_malformed_ast() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", "{\"ast_version\": 1, \"decls\": 5}");

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Malformed AST document"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ══════════════════════════════════════════════════════════════════════════════

mod configuration {
    use super::*;

    fn start_program() -> String {
        ast(vec![function("start", vec![ret_void(2)])])
    }

    #[test]
    fn test_project_config_found_in_working_directory() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "semant.toml", "[checker]\nentry_point = \"start\"\n");
        let file = write_file(&dir, "prog.json", &start_program());

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .success();
    }

    #[test]
    fn test_explicit_config_flag() {
        let dir = TempDir::new().unwrap();
        let config = write_file(&dir, "custom.toml", "[checker]\nentry_point = \"start\"\n");
        let file = write_file(&dir, "prog.json", &start_program());

        semant_cmd()
            .current_dir(dir.path())
            .args(["--config", &config, "check", &file])
            .assert()
            .success();
    }

    #[test]
    fn test_entry_point_from_environment() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &start_program());

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Entry function 'main' is not defined"));

        semant_cmd()
            .current_dir(dir.path())
            .env("SEMANT_ENTRY_POINT", "start")
            .args(["check", &file])
            .assert()
            .success();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "semant.toml", "[checker]\nentry = \"main\"\n");
        let file = write_file(&dir, "prog.json", &scenario_a());

        semant_cmd()
            .current_dir(dir.path())
            .args(["check", &file])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load semant.toml"));
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// TYPECHECK DUMP
// ══════════════════════════════════════════════════════════════════════════════

mod typecheck {
    use super::*;

    #[test]
    fn test_dump_of_valid_program() {
        let dir = TempDir::new().unwrap();
        let program = ast(vec![
            json!({ "Variable": { "name": "count", "type": "Int", "line": 1 } }),
            function("main", vec![ret_void(3)]),
        ]);
        let file = write_file(&dir, "prog.json", &program);

        let output = semant_cmd()
            .current_dir(dir.path())
            .args(["typecheck", &file])
            .output()
            .unwrap();
        assert!(output.status.success(), "Command failed: {:?}", output);

        assert_snapshot!(String::from_utf8(output.stdout).unwrap(), @r#"
        {
          "typecheck_version": 1,
          "functions": [
            {
              "name": "main",
              "params": [],
              "return_type": "Void",
              "line": 1
            }
          ],
          "globals": [
            {
              "name": "count",
              "type": "Int",
              "line": 1
            }
          ],
          "error_count": 0
        }
        "#);
    }

    #[test]
    fn test_dump_counts_errors_without_failing() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "prog.json", &scenario_b());

        let output = semant_cmd()
            .current_dir(dir.path())
            .args(["typecheck", &file])
            .output()
            .unwrap();
        assert!(output.status.success());

        let dump: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(dump["error_count"], 1);
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// EXPLAIN AND HELP
// ══════════════════════════════════════════════════════════════════════════════

mod explain {
    use super::*;

    #[test]
    fn test_explain_known_code() {
        semant_cmd()
            .args(["explain", "S3006"])
            .assert()
            .success()
            .stdout(predicate::str::contains("S3006"))
            .stdout(predicate::str::contains("help:"));
    }

    #[test]
    fn test_explain_unknown_code() {
        semant_cmd()
            .args(["explain", "Z0000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown diagnostic code: Z0000"));
    }

    #[test]
    fn test_help_lists_commands() {
        semant_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("typecheck"))
            .stdout(predicate::str::contains("explain"))
            .stdout(predicate::str::contains("EXAMPLES"));
    }
}
