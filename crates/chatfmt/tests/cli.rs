//! End-to-end tests for the chatfmt binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[allow(deprecated)]
fn chatfmt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chatfmt").unwrap();
    cmd.env_remove("CHATFMT_WIDTH")
        .env_remove("CHATFMT_GLYPHS")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic usage
// =============================================================================

mod basic_usage {
    use super::*;

    #[test]
    fn test_stdin_passthrough() {
        chatfmt_cmd()
            .write_stdin("§aHello\n")
            .assert()
            .success()
            .stdout("§aHello\n");
    }

    #[test]
    fn test_dash_reads_stdin() {
        chatfmt_cmd()
            .arg("-")
            .write_stdin("plain\n")
            .assert()
            .success()
            .stdout("plain\n");
    }

    #[test]
    fn test_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();

        chatfmt_cmd()
            .arg(file.path())
            .assert()
            .success()
            .stdout("first\nsecond\n");
    }

    #[test]
    fn test_long_line_wraps_with_reset() {
        let line = format!("§b{}", "word ".repeat(30));
        chatfmt_cmd()
            .write_stdin(line)
            .assert()
            .success()
            .stdout(predicate::str::contains("\n§r§b"));
    }

    #[test]
    fn test_center() {
        chatfmt_cmd()
            .args(["--align", "center"])
            .write_stdin("§laaa\n")
            .assert()
            .success()
            .stdout(format!("{}§laaa\n", " ".repeat(50)));
    }

    #[test]
    fn test_indent() {
        chatfmt_cmd()
            .args(["--indent", "2"])
            .write_stdin("hi\n")
            .assert()
            .success()
            .stdout("  hi\n");
    }
}

// =============================================================================
// Options
// =============================================================================

mod options {
    use super::*;

    #[test]
    fn test_measure() {
        chatfmt_cmd()
            .arg("--measure")
            .write_stdin("Hello\n")
            .assert()
            .success()
            .stdout("21\n");
    }

    #[test]
    fn test_alt_char_strip() {
        chatfmt_cmd()
            .args(["--alt-char", "&", "--strip"])
            .write_stdin("&6Gold &lbold\n")
            .assert()
            .success()
            .stdout("Gold bold\n");
    }

    #[test]
    fn test_json() {
        chatfmt_cmd()
            .arg("--json")
            .write_stdin("hi\n")
            .assert()
            .success()
            .stdout("{\"text\":\"hi\"}\n");
    }

    #[test]
    fn test_width_from_env() {
        chatfmt_cmd()
            .env("CHATFMT_WIDTH", "30")
            .write_stdin("aaaaaaaaaa\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("§r"));
    }

    #[test]
    fn test_glyph_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glyphs.toml");
        std::fs::write(&path, "[[glyph]]\nchar = \"★\"\nnormal = 9\nbold = 10\n").unwrap();

        chatfmt_cmd()
            .arg("--measure")
            .arg("--glyphs")
            .arg(&path)
            .write_stdin("★\n")
            .assert()
            .success()
            .stdout("9\n");
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_file() {
        chatfmt_cmd()
            .arg("/no/such/input.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to open"));
    }

    #[test]
    fn test_bad_alignment() {
        chatfmt_cmd()
            .args(["--align", "justify"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid alignment"));
    }

    #[test]
    fn test_bad_glyph_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("glyphs.toml");
        std::fs::write(&path, "[[glyph]]\nchar = \"a\"\nnormal = 9\nbold = 10\n").unwrap();

        chatfmt_cmd()
            .arg("--glyphs")
            .arg(&path)
            .write_stdin("x\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load glyph file"));
    }

    #[test]
    fn test_zero_width() {
        chatfmt_cmd()
            .args(["--width", "0"])
            .write_stdin("x\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("display width must be positive"));
    }
}
