//! Command-line interface for `chatfmt`.
//!
//! # Examples
//!
//! ```bash
//! # Wrap a file to the chat box
//! chatfmt motd.txt
//!
//! # Center text read from stdin, writing codes as &c
//! echo "&6&lWelcome" | chatfmt --align center --alt-char '&'
//!
//! # Report the pixel width of each line
//! chatfmt --measure motd.txt
//! ```

use std::path::PathBuf;

use chat_layout::Alignment;
use clap::Parser;

/// Lay out formatted chat text.
///
/// Every input line is measured with the chat font and wrapped, aligned or
/// indented to fit the chat box. Formatting codes are carried onto
/// continuation lines.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(name = "chatfmt", author, version, about)]
pub struct Cli {
    /// Input file; reads stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// Alignment: left, center or right
    #[arg(long, short = 'a', default_value = "left")]
    pub align: Alignment,

    /// Wrap with every line indented by this many spaces
    #[arg(long, short = 'i', conflicts_with = "align")]
    pub indent: Option<u32>,

    /// Display width in pixels (overrides the glyph file)
    #[arg(long, short = 'w', env = "CHATFMT_WIDTH")]
    pub width: Option<u32>,

    /// Glyph width file (.toml or .json)
    #[arg(long, short = 'g', env = "CHATFMT_GLYPHS")]
    pub glyphs: Option<PathBuf>,

    /// Treat this character as a formatting-code marker (for example `&`)
    #[arg(long)]
    pub alt_char: Option<char>,

    /// Remove formatting codes from the output
    #[arg(long, conflicts_with = "json")]
    pub strip: bool,

    /// Print the width of each line instead of laying it out
    #[arg(long, short = 'm')]
    pub measure: bool,

    /// Print each output line as a JSON text component
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// True when input should come from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }
}
