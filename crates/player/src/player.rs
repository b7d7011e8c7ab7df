//! Frame loop: update hook, compositing, rendering, strictly in that order.
//!
//! A frame is atomic. Stopping only prevents further frames from being scheduled;
//! a frame in progress always completes. The scheduler state lives in the
//! [`Player`] and its [`StopHandle`]s, never in process-wide globals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::debug;

use crate::core::{RenderOptions, Scene};
use crate::error::PlayerError;
use crate::pacer::FramePacer;
use crate::term::RenderSink;

/// Cloneable handle that halts a running [`Player`].
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct Player {
    pacer: FramePacer,
    stop: StopHandle,
    options: RenderOptions,
    frames: u64,
}

impl Player {
    /// Player running at `fps` frames per second.
    pub fn new(fps: i64) -> Result<Self, PlayerError> {
        Ok(Self {
            pacer: FramePacer::new(fps)?,
            stop: StopHandle::default(),
            options: RenderOptions::default(),
            frames: 0,
        })
    }

    /// Call-level render options, merged over the scene's defaults every frame.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frames rendered over the player's lifetime.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: `update`, then compose, then render.
    pub fn step<P, U, S>(&mut self, scene: &mut Scene<P>, update: &mut U, sink: &mut S) -> Result<()>
    where
        P: Clone,
        U: FnMut(&mut Scene<P>) -> Result<()>,
        S: RenderSink<P> + ?Sized,
    {
        update(scene)?;
        let options = RenderOptions::merged(scene.options(), &self.options);
        let composite = scene.compose();
        sink.render(composite, &options)?;
        self.frames += 1;
        Ok(())
    }

    /// Run frames on the current thread until stopped. Returns frames rendered.
    ///
    /// An error from the update hook or the sink ends the loop and is returned.
    pub fn run<P, U, S>(&mut self, scene: &mut Scene<P>, mut update: U, sink: &mut S) -> Result<u64>
    where
        P: Clone,
        U: FnMut(&mut Scene<P>) -> Result<()>,
        S: RenderSink<P> + ?Sized,
    {
        debug!("player started at {}ms per frame", self.pacer.interval_ms());
        let start_frames = self.frames;
        while !self.stop.is_stopped() {
            let frame_start = Instant::now();
            self.step(scene, &mut update, sink)?;
            if self.stop.is_stopped() {
                break;
            }
            std::thread::sleep(self.pacer.next_delay(frame_start.elapsed()));
        }
        let rendered = self.frames - start_frames;
        debug!("player stopped after {} frames", rendered);
        Ok(rendered)
    }

    /// Async variant of [`run`](Self::run) driven by a tokio interval.
    pub async fn run_async<P, U, S>(
        &mut self,
        scene: &mut Scene<P>,
        mut update: U,
        sink: &mut S,
    ) -> Result<u64>
    where
        P: Clone,
        U: FnMut(&mut Scene<P>) -> Result<()>,
        S: RenderSink<P> + ?Sized,
    {
        let mut ticker = tokio::time::interval(self.pacer.interval());
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        debug!("player (async) started at {}ms per frame", self.pacer.interval_ms());
        let start_frames = self.frames;
        loop {
            ticker.tick().await;
            if self.stop.is_stopped() {
                break;
            }
            self.step(scene, &mut update, sink)?;
        }
        let rendered = self.frames - start_frames;
        debug!("player (async) stopped after {} frames", rendered);
        Ok(rendered)
    }
}
