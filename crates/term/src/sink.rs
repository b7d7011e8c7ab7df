//! Rendering sinks: the boundary between a composite and visible output.
//!
//! A sink only relies on the composite's shape and on stack order: the first
//! entry of a cell's stack is the one to draw.

use std::io::Write;

use anyhow::Result;

use crate::core::{Composite, RenderOptions};

/// Option key for the character drawn where no layer is opaque.
pub const BLANK_OPTION: &str = "blank";

/// Turns a payload into a single displayable character.
pub trait Glyph {
    fn glyph(&self) -> char;
}

impl Glyph for char {
    fn glyph(&self) -> char {
        *self
    }
}

impl Glyph for String {
    fn glyph(&self) -> char {
        self.chars().next().unwrap_or(' ')
    }
}

impl Glyph for &str {
    fn glyph(&self) -> char {
        self.chars().next().unwrap_or(' ')
    }
}

/// Consumes a composite once per frame.
pub trait RenderSink<P = char> {
    fn render(&mut self, composite: &Composite<P>, options: &RenderOptions) -> Result<()>;
}

impl<P, S: RenderSink<P> + ?Sized> RenderSink<P> for &mut S {
    fn render(&mut self, composite: &Composite<P>, options: &RenderOptions) -> Result<()> {
        (**self).render(composite, options)
    }
}

impl<P, S: RenderSink<P> + ?Sized> RenderSink<P> for Box<S> {
    fn render(&mut self, composite: &Composite<P>, options: &RenderOptions) -> Result<()> {
        (**self).render(composite, options)
    }
}

/// Render a composite as text: one `\n`-terminated line per viewport row.
///
/// # Examples
///
/// ```
/// use swears_term::core::{Grid, RenderOptions, Scene};
/// use swears_term::render_to_string;
///
/// let mut scene = Scene::new(3, 1).unwrap();
/// scene.add_layer(Grid::from_text("a", None));
/// let text = render_to_string(scene.compose(), &RenderOptions::new().with("blank", "."));
/// assert_eq!(text, "a..\n");
/// ```
pub fn render_to_string<P: Glyph>(composite: &Composite<P>, options: &RenderOptions) -> String {
    let blank = options.get_char(BLANK_OPTION).unwrap_or(' ');
    let mut out =
        String::with_capacity((usize::from(composite.width()) + 1) * usize::from(composite.height()));
    for y in 0..composite.height() {
        for x in 0..composite.width() {
            out.push(composite.top(x, y).map_or(blank, |c| c.payload.glyph()));
        }
        out.push('\n');
    }
    out
}

/// The plain text ("pre") sink.
///
/// Each frame is rendered to a string, kept as [`last_frame`](Self::last_frame)
/// and written to the target.
pub struct TextSink<W: Write> {
    target: W,
    last: String,
}

impl<W: Write> TextSink<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            last: String::new(),
        }
    }

    pub fn last_frame(&self) -> &str {
        &self.last
    }

    pub fn get_ref(&self) -> &W {
        &self.target
    }

    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<P: Glyph, W: Write> RenderSink<P> for TextSink<W> {
    fn render(&mut self, composite: &Composite<P>, options: &RenderOptions) -> Result<()> {
        self.last = render_to_string(composite, options);
        self.target.write_all(self.last.as_bytes())?;
        self.target.flush()?;
        Ok(())
    }
}
