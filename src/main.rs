//! Interactive compositor demo (default binary).
//!
//! A sprite walks over a patterned background and is blocked by a wall layer.
//! Arrow keys (or hjkl) move the sprite, wasd pans the viewport, `+`/`-`
//! change the sprite's z-order and `v` toggles the walls. `q` quits.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use swears::core::{Grid, Layer, LayerId, Scene, SceneError};
use swears::input::{handle_key_event, should_quit};
use swears::player::{Player, PlayerConfig};
use swears::term::TerminalRenderer;
use swears::types::SceneAction;

const BACKGROUND: &str = "\
. . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . .
 . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . . .";

const WALLS: &str = "\
##########################
#                        #
#        ####            #
#           #      ##    #
#           #            #
#                        #
##########################";

const SPRITE: &str = "\
/o\\
\\_/";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = PlayerConfig::from_env();
    info!(
        "viewport {}x{} at {} fps",
        config.width, config.height, config.fps
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct Demo {
    walls: LayerId,
    sprite: LayerId,
}

impl Demo {
    fn build(scene: &mut Scene) -> Self {
        let pattern: String = (0..12)
            .map(|row| BACKGROUND.lines().nth(row % 2).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n");
        // New layers go to the back: front first.
        let sprite = scene.add_layer(Grid::from_text(SPRITE, None));
        let walls = scene.add_layer(Grid::from_text(WALLS, Some(' ')));
        let background = scene.add_layer(Grid::from_text(&pattern, Some(' ')));

        if let Some(layer) = scene.layer_mut(walls) {
            layer.set_position(4, 2);
        }
        if let Some(layer) = scene.layer_mut(sprite) {
            layer.set_position(8, 4);
        }
        debug!("demo layers: background {} walls {} sprite {}", background, walls, sprite);

        Self { walls, sprite }
    }

    fn apply(&self, scene: &mut Scene, action: SceneAction) -> Result<()> {
        match action {
            SceneAction::PanLeft
            | SceneAction::PanRight
            | SceneAction::PanUp
            | SceneAction::PanDown => {
                if let Some((dx, dy)) = action.delta() {
                    scene.translate(dx, dy);
                }
            }
            SceneAction::MoveLeft
            | SceneAction::MoveRight
            | SceneAction::MoveUp
            | SceneAction::MoveDown => {
                if let Some((dx, dy)) = action.delta() {
                    let walls = self.walls;
                    let mut blocked_by_walls = |other: &Layer| other.id() != walls;
                    match scene.translate_layer_checked(self.sprite, dx, dy, &mut blocked_by_walls) {
                        Ok(()) | Err(SceneError::Collision { .. }) => {}
                        Err(e) => return Err(e.into()),
                    }
                }
            }
            SceneAction::Raise => match scene.move_up(self.sprite) {
                Ok(_) | Err(SceneError::AlreadyFrontmost(_)) => {}
                Err(e) => return Err(e.into()),
            },
            SceneAction::Lower => match scene.move_down(self.sprite) {
                Ok(_) | Err(SceneError::AlreadyBackmost(_)) => {}
                Err(e) => return Err(e.into()),
            },
            SceneAction::ToggleVisible => {
                if let Some(layer) = scene.layer_mut(self.walls) {
                    let visible = layer.is_visible();
                    layer.set_visible(!visible);
                }
            }
        }
        Ok(())
    }
}

fn run(term: &mut TerminalRenderer, config: &PlayerConfig) -> Result<()> {
    let mut scene = Scene::new(config.width, config.height)?.with_options(config.options.clone());
    let demo = Demo::build(&mut scene);
    let mut player = Player::new(i64::from(config.fps))?;
    let mut queued: Vec<SceneAction> = Vec::new();

    loop {
        let frame_start = Instant::now();
        let mut update = |s: &mut Scene| -> Result<()> {
            for action in queued.drain(..) {
                demo.apply(s, action)?;
            }
            Ok(())
        };
        player.step(&mut scene, &mut update, &mut *term)?;

        // Input until the next frame is due.
        let deadline = frame_start + player.pacer().interval();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    queued.push(action);
                }
            }
        }
    }
}
