//! Named sink registry.
//!
//! Sinks are looked up by name at render time. The registry is itself a sink:
//! it routes to the sink named by the `renderer` option, or to its default.

use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::{anyhow, Result};
use log::trace;

use crate::core::{Composite, RenderOptions};
use crate::sink::{Glyph, RenderSink, TextSink};

/// Option key selecting a sink by name.
pub const RENDERER_OPTION: &str = "renderer";

/// Name used when nothing else is configured.
pub const DEFAULT_SINK: &str = "pre";

pub struct SinkRegistry<P = char> {
    sinks: BTreeMap<String, Box<dyn RenderSink<P>>>,
    default: String,
}

impl<P: Glyph + 'static> Default for SinkRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Glyph + 'static> SinkRegistry<P> {
    /// Registry with the text sink writing to stdout under [`DEFAULT_SINK`].
    pub fn new() -> Self {
        Self::with_text_target(io::stdout())
    }

    /// Registry with a [`TextSink`] over `target` under [`DEFAULT_SINK`].
    pub fn with_text_target<W: Write + 'static>(target: W) -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_SINK, Box::new(TextSink::new(target)));
        registry
    }
}

impl<P> SinkRegistry<P> {
    /// Registry with no sinks; the default name is still [`DEFAULT_SINK`].
    pub fn empty() -> Self {
        Self {
            sinks: BTreeMap::new(),
            default: DEFAULT_SINK.to_string(),
        }
    }

    /// Register a sink, returning any sink previously registered under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        sink: Box<dyn RenderSink<P>>,
    ) -> Option<Box<dyn RenderSink<P>>> {
        self.sinks.insert(name.into(), sink)
    }

    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default = name.into();
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sinks.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sinks.contains_key(name)
    }

    /// Render through a named sink (or the default) with merged options.
    ///
    /// Call-level options override the scene defaults when non-empty.
    pub fn render_with(
        &mut self,
        name: Option<&str>,
        composite: &Composite<P>,
        scene_options: &RenderOptions,
        call_options: &RenderOptions,
    ) -> Result<()> {
        let options = RenderOptions::merged(scene_options, call_options);
        let name = name.unwrap_or(self.default.as_str()).to_string();
        self.dispatch(&name, composite, &options)
    }

    fn dispatch(&mut self, name: &str, composite: &Composite<P>, options: &RenderOptions) -> Result<()> {
        trace!("rendering through sink {:?}", name);
        let sink = self
            .sinks
            .get_mut(name)
            .ok_or_else(|| anyhow!("no render sink named {:?}", name))?;
        sink.render(composite, options)
    }
}

impl<P> RenderSink<P> for SinkRegistry<P> {
    fn render(&mut self, composite: &Composite<P>, options: &RenderOptions) -> Result<()> {
        let name = options
            .get(RENDERER_OPTION)
            .unwrap_or(self.default.as_str())
            .to_string();
        self.dispatch(&name, composite, options)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::{Grid, Scene};

    /// Records the options each frame was rendered with.
    struct Recorder(Rc<RefCell<Vec<RenderOptions>>>);

    impl RenderSink for Recorder {
        fn render(&mut self, _composite: &Composite, options: &RenderOptions) -> Result<()> {
            self.0.borrow_mut().push(options.clone());
            Ok(())
        }
    }

    fn registry() -> (SinkRegistry, Rc<RefCell<Vec<RenderOptions>>>, Rc<RefCell<Vec<RenderOptions>>>) {
        let pre = Rc::new(RefCell::new(Vec::new()));
        let alt = Rc::new(RefCell::new(Vec::new()));
        let mut reg = SinkRegistry::empty();
        reg.register("pre", Box::new(Recorder(pre.clone())));
        reg.register("alt", Box::new(Recorder(alt.clone())));
        (reg, pre, alt)
    }

    #[test]
    fn default_sink_is_pre() {
        let (mut reg, pre, alt) = registry();
        let mut scene = Scene::new(1, 1).unwrap();
        scene.add_layer(Grid::from_text("x", None));
        reg.render_with(None, scene.compose(), &RenderOptions::new(), &RenderOptions::new())
            .unwrap();
        assert_eq!(pre.borrow().len(), 1);
        assert!(alt.borrow().is_empty());
    }

    /// Writer whose bytes stay readable after it is boxed into the registry.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn fresh_registry_renders_text_by_default() {
        let out = SharedBuf::default();
        let mut reg: SinkRegistry = SinkRegistry::with_text_target(out.clone());
        assert!(reg.contains(DEFAULT_SINK));

        let mut scene = Scene::new(2, 1).unwrap();
        scene.add_layer(Grid::from_text("a", None));
        let opts = RenderOptions::new().with("blank", ".");
        reg.render_with(None, scene.compose(), &opts, &RenderOptions::new())
            .unwrap();
        assert_eq!(out.0.borrow().as_slice(), b"a.\n");
    }

    #[test]
    fn empty_registry_has_nothing_to_route_to() {
        let mut reg: SinkRegistry = SinkRegistry::empty();
        let composite = Composite::new(1, 1);
        assert!(reg.render(&composite, &RenderOptions::new()).is_err());
    }

    #[test]
    fn call_options_override_scene_defaults() {
        let (mut reg, _, alt) = registry();
        let scene_opts = RenderOptions::new().with("blank", ".").with("left", "1");
        let call_opts = RenderOptions::new().with("blank", "#").with("left", "");
        let composite = Composite::new(1, 1);
        reg.render_with(Some("alt"), &composite, &scene_opts, &call_opts)
            .unwrap();
        let seen = alt.borrow();
        assert_eq!(seen[0].get("blank"), Some("#"));
        assert_eq!(seen[0].get("left"), Some("1"));
    }

    #[test]
    fn renderer_option_routes_when_used_as_a_sink() {
        let (mut reg, pre, alt) = registry();
        let composite = Composite::new(1, 1);
        reg.render(&composite, &RenderOptions::new().with(RENDERER_OPTION, "alt"))
            .unwrap();
        assert_eq!(alt.borrow().len(), 1);
        assert!(pre.borrow().is_empty());
    }

    #[test]
    fn unknown_sink_is_an_error() {
        let (mut reg, _, _) = registry();
        let composite = Composite::new(1, 1);
        let err = reg
            .render_with(Some("pixels"), &composite, &RenderOptions::new(), &RenderOptions::new())
            .unwrap_err();
        assert!(err.to_string().contains("pixels"));
    }
}
