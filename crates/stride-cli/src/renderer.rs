//! Terminal rendering with termimad, with a plain text fallback.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so the structure stays visible
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[32m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Shows the live session status. Rich output redraws a single line;
    /// plain output prints one line per update so it can be piped.
    pub fn status(&self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            write!(stdout, "\r\x1b[2K\x1b[1m{line}\x1b[0m")?;
        } else {
            writeln!(stdout, "{line}")?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Moves past a redrawn status line.
    pub fn end_status(&self) -> Result<()> {
        if self.rich_enabled {
            println!();
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Title\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
