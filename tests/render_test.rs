//! Text and terminal sinks driven from real scenes.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use swears::core::{Composite, Grid, RenderOptions, Scene};
use swears::term::{
    render_to_string, RenderSink, SinkRegistry, TerminalRenderer, TextSink, RENDERER_OPTION,
};

fn scene() -> Scene {
    let mut scene = Scene::new(4, 2).unwrap();
    let id = scene.add_layer(Grid::from_text("ab\n c", Some(' ')));
    scene.layer_mut(id).unwrap().set_position(1, 0);
    scene
}

#[test]
fn text_sink_draws_fronts_and_blanks() {
    let mut scene = scene();
    let mut sink = TextSink::new(Vec::new());

    sink.render(scene.compose(), &RenderOptions::new().with("blank", "."))
        .unwrap();

    assert_eq!(sink.last_frame(), ".ab.\n..c.\n");
    assert_eq!(sink.get_ref().as_slice(), b".ab.\n..c.\n");
}

#[test]
fn default_blank_is_a_space() {
    let mut scene = scene();
    assert_eq!(
        render_to_string(scene.compose(), &RenderOptions::new()),
        " ab \n  c \n"
    );
}

#[test]
fn scene_defaults_merge_under_call_options() {
    let mut scene = scene().with_options(RenderOptions::new().with("blank", "~"));
    let composite = scene.compose().clone();

    let mut registry: SinkRegistry = SinkRegistry::empty();
    let out = Rc::new(RefCell::new(String::new()));
    registry.register("pre", Box::new(Shared(out.clone())));

    registry
        .render_with(None, &composite, scene.options(), &RenderOptions::new())
        .unwrap();
    assert_eq!(out.borrow().as_str(), "~ab~\n~~c~\n");

    registry
        .render_with(
            None,
            &composite,
            scene.options(),
            &RenderOptions::new().with("blank", "_"),
        )
        .unwrap();
    assert_eq!(out.borrow().as_str(), "_ab_\n__c_\n");

    // Empty call-level values keep the scene default.
    registry
        .render_with(
            None,
            &composite,
            scene.options(),
            &RenderOptions::new().with("blank", ""),
        )
        .unwrap();
    assert_eq!(out.borrow().as_str(), "~ab~\n~~c~\n");
}

#[test]
fn registry_routes_on_renderer_option() {
    let mut scene = scene();
    let pre = Rc::new(RefCell::new(String::new()));
    let alt = Rc::new(RefCell::new(String::new()));

    let mut registry: SinkRegistry = SinkRegistry::empty();
    registry.register("pre", Box::new(Shared(pre.clone())));
    registry.register("alt", Box::new(Shared(alt.clone())));

    let options = RenderOptions::new().with(RENDERER_OPTION, "alt").with("blank", "#");
    registry.render(scene.compose(), &options).unwrap();
    assert!(pre.borrow().is_empty());
    assert_eq!(alt.borrow().as_str(), "#ab#\n##c#\n");

    let missing = RenderOptions::new().with(RENDERER_OPTION, "nope");
    assert!(registry.render(scene.last_composite(), &missing).is_err());
}

#[test]
fn terminal_renderer_redraws_only_changes() {
    let mut scene = scene();
    let mut term = TerminalRenderer::with_writer(Vec::new());

    term.render(scene.compose(), &RenderOptions::new()).unwrap();
    let first = term.writer().len();
    assert!(first > 0);

    // Identical frame: nothing but a flush.
    term.render(scene.compose(), &RenderOptions::new()).unwrap();
    assert_eq!(term.writer().len(), first);

    let id = scene.layers()[0].id();
    scene.translate_layer(id, 1, 0).unwrap();
    term.render(scene.compose(), &RenderOptions::new()).unwrap();
    let written = &term.writer()[first..];
    assert!(!written.is_empty());
    assert!(written.len() < first);
}

/// Sink that keeps the last rendered text in shared storage.
struct Shared(Rc<RefCell<String>>);

impl RenderSink for Shared {
    fn render(&mut self, composite: &Composite, options: &RenderOptions) -> Result<()> {
        *self.0.borrow_mut() = render_to_string(composite, options);
        Ok(())
    }
}

#[test]
fn options_loaded_from_json_drive_the_sink() {
    let json = serde_json::json!({ "blank": "*", "left": 2, "unused": null }).to_string();
    let options = RenderOptions::from_json_str(&json).unwrap();
    assert_eq!(options.get_parsed::<u16>("left"), Some(2));
    assert_eq!(options.get("unused"), None);

    let mut scene = scene();
    assert_eq!(render_to_string(scene.compose(), &options), "*ab*\n**c*\n");
}
