#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

//! # chatfmt
//!
//! Library side of the `chatfmt` command: builds a [`Layout`] from the
//! command-line options and formats input line by line.

pub mod cli;

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use chat_layout::{
    Alignment, GlyphConfig, Layout, WidthTable, strip_codes, translate_alternate_codes,
};
use chat_text::TextComponent;
use tracing::{debug, info};

pub use cli::Cli;

/// Build the layout the options describe.
///
/// # Errors
/// Returns an error if the glyph file cannot be loaded or `--width` is zero.
pub fn build_layout(cli: &Cli) -> Result<Layout> {
    let layout = match &cli.glyphs {
        Some(path) => GlyphConfig::from_file(path)
            .and_then(|config| config.into_layout())
            .with_context(|| format!("failed to load glyph file {}", path.display()))?,
        None => Layout::new(Arc::new(WidthTable::new())),
    };

    let layout = match cli.width {
        Some(0) => anyhow::bail!("display width must be positive"),
        Some(width) => layout.with_display_width(width),
        None => layout,
    };

    info!(
        layout.display_width = layout.display_width(),
        layout.custom_glyphs = layout.table().custom_len(),
        "Layout ready"
    );
    Ok(layout)
}

/// Lay out one input line according to the options.
pub fn format_line(layout: &Layout, cli: &Cli, line: &str) -> Vec<String> {
    let line = match cli.alt_char {
        Some(alt) => translate_alternate_codes(alt, line),
        None => line.to_string(),
    };

    if cli.measure {
        return vec![layout.measure(&line).to_string()];
    }

    let lines = match (cli.indent, cli.align) {
        (Some(indent), _) => layout.wrap_indented(&line, indent),
        (None, Alignment::Left) => layout.wrap(&line),
        (None, alignment) => layout.align_lines(&line, alignment),
    };
    debug!(layout.lines = lines.len(), "Line formatted");

    if cli.strip {
        lines.iter().map(|l| strip_codes(l)).collect()
    } else {
        lines
    }
}

/// Format every line of `input` and write the result to `output`.
///
/// # Errors
/// Returns an error if reading, writing or JSON encoding fails.
pub fn run(cli: &Cli, layout: &Layout, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        for formatted in format_line(layout, cli, &line) {
            if cli.json && !cli.measure {
                let json = TextComponent::new(formatted).to_json()?;
                writeln!(output, "{json}")?;
            } else {
                writeln!(output, "{formatted}")?;
            }
        }
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["chatfmt"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid arguments")
    }

    fn run_to_string(cli: &Cli, input: &str) -> String {
        let layout = build_layout(cli).expect("layout");
        let mut out = Vec::new();
        run(cli, &layout, input.as_bytes(), &mut out).expect("run");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_short_line_passes_through() {
        assert_eq!(run_to_string(&cli(&[]), "§aHello\n"), "§aHello\n");
    }

    #[test]
    fn test_each_line_is_independent() {
        let out = run_to_string(&cli(&["--align", "center"]), "a\nbb\n");
        let layout = Layout::default();
        let expected = format!("{}\n{}\n", layout.align_center("a"), layout.align_center("bb"));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_alt_char_and_strip() {
        let out = run_to_string(&cli(&["--alt-char", "&", "--strip"]), "&cRed &lBold\n");
        assert_eq!(out, "Red Bold\n");
    }

    #[test]
    fn test_measure() {
        let out = run_to_string(&cli(&["--measure"]), "Hello\n\n§lab\n");
        assert_eq!(out, "21\n0\n13\n");
    }

    #[test]
    fn test_width_wraps() {
        let out = run_to_string(&cli(&["--width", "50"]), &"a".repeat(20));
        assert!(out.lines().count() > 1);
        assert!(out.lines().nth(1).is_some_and(|l| l.starts_with("§r")));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(build_layout(&cli(&["--width", "0"])).is_err());
    }

    #[test]
    fn test_json_output() {
        let out = run_to_string(&cli(&["--json"]), "§ahi\n");
        assert_eq!(out, "{\"text\":\"§ahi\"}\n");
    }
}
