//! Crossterm terminal backend with raw-mode RAII guard.
//!
//! Draws the typewriter line and the slide panel on an alternate screen.
//! All drawing is absolute-positioned full redraws of the two regions; the
//! frames are tiny and the cadence is human-speed, so diffing would buy
//! nothing.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{Stdout, Write, stdout};

use super::RenderBackend;
use crate::rotation::Slide;
use crate::typing::TypeFrame;

/// Row layout of the banner screen
const TEXT_ROW: u16 = 1;
const SLIDE_ROW: u16 = 3;
const ATTRIBUTION_ROW: u16 = 4;
const DOTS_ROW: u16 = 5;
const HELP_ROW: u16 = 7;

/// RAII guard for terminal state.
///
/// Enters raw mode and the alternate screen on construction and restores
/// both on drop, so any error path unwinds to a usable terminal.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        execute!(stdout(), EnterAlternateScreen, Hide)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Terminal renderer for the two animation regions.
pub struct TerminalBackend {
    out: Stdout,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn color_for(name: &str) -> Color {
        // crossterm parses the usual color names and "0"-"255" ANSI values;
        // unknown names fall back to the default foreground
        Color::try_from(name).unwrap_or(Color::Reset)
    }
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for TerminalBackend {
    fn backend_name(&self) -> &'static str {
        "terminal"
    }

    fn apply_text(&mut self, frame: &TypeFrame) -> Result<()> {
        queue!(
            self.out,
            MoveTo(2, TEXT_ROW),
            Clear(ClearType::CurrentLine)
        )?;
        if let Some(name) = &frame.color {
            queue!(self.out, SetForegroundColor(Self::color_for(name)))?;
        }
        queue!(self.out, Print(&frame.text), ResetColor)?;
        if frame.show_cursor {
            // Keep the cell occupied while blinked off so the line width
            // does not jitter
            let glyph = if frame.cursor_visible {
                frame.cursor_character.as_str()
            } else {
                " "
            };
            queue!(self.out, Print(glyph))?;
        }
        queue!(
            self.out,
            MoveTo(2, HELP_ROW),
            Clear(ClearType::CurrentLine),
            Print("←/→ navigate · 1-9 jump · r reload · q quit")
        )?;
        self.out.flush().context("Failed to flush terminal output")
    }

    fn apply_slide(&mut self, active_index: usize, slides: &[Slide]) -> Result<()> {
        queue!(
            self.out,
            MoveTo(2, SLIDE_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(2, ATTRIBUTION_ROW),
            Clear(ClearType::CurrentLine),
            MoveTo(2, DOTS_ROW),
            Clear(ClearType::CurrentLine)
        )?;
        if let Some(slide) = slides.get(active_index) {
            queue!(
                self.out,
                MoveTo(2, SLIDE_ROW),
                Print(format!("[ {} ]", slide.alt))
            )?;
            if let Some(attribution) = &slide.attribution {
                queue!(
                    self.out,
                    MoveTo(2, ATTRIBUTION_ROW),
                    SetForegroundColor(Color::DarkGrey),
                    Print(attribution),
                    ResetColor
                )?;
            }
            let dots: String = (0..slides.len())
                .map(|i| if i == active_index { "● " } else { "○ " })
                .collect();
            queue!(self.out, MoveTo(2, DOTS_ROW), Print(dots.trim_end()))?;
        }
        self.out.flush().context("Failed to flush terminal output")
    }
}
