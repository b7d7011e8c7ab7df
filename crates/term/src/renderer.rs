//! TerminalRenderer: flushes composites to a real terminal.
//!
//! The composite is flattened into a [`FrameBuffer`] and diffed against the
//! previous frame, so steady scenes cost almost nothing to redraw.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::{Composite, RenderOptions};
use crate::fb::FrameBuffer;
use crate::sink::{Glyph, RenderSink, BLANK_OPTION};

/// Option key for the terminal column of the viewport's left edge.
pub const LEFT_OPTION: &str = "left";
/// Option key for the terminal row of the viewport's top edge.
pub const TOP_OPTION: &str = "top";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    next: FrameBuffer,
    offset: (u16, u16),
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            next: FrameBuffer::new(0, 0),
            offset: (0, 0),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let (left, top) = self.offset;
        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(0, 0));
        let needs_full = prev.width() != fb.width() || prev.height() != fb.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(fb, left, top, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, left, top, &mut self.buf)?;
        }
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<P: Glyph, W: Write> RenderSink<P> for TerminalRenderer<W> {
    fn render(&mut self, composite: &Composite<P>, options: &RenderOptions) -> Result<()> {
        let offset: (u16, u16) = (
            options.get_parsed(LEFT_OPTION).unwrap_or(0),
            options.get_parsed(TOP_OPTION).unwrap_or(0),
        );
        if offset != self.offset {
            debug!("terminal offset changed to {:?}", offset);
            self.offset = offset;
            self.invalidate();
        }

        let blank = options.get_char(BLANK_OPTION).unwrap_or(' ');
        let mut next = std::mem::replace(&mut self.next, FrameBuffer::new(0, 0));
        next.fill_from(composite, blank);
        let result = self.draw_swap(&mut next);
        self.next = next;
        result
    }
}

/// Encode a full-frame redraw into `out`, placing the frame at `(left, top)`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, left: u16, top: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(left, top.saturating_add(y)))?;
        out.queue(Print(fb.row_string(y)))?;
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    left: u16,
    top: u16,
    out: &mut Vec<u8>,
) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(left.saturating_add(x), top.saturating_add(y)))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
