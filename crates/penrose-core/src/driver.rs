//! Animation state machine and the self-rescheduling frame loop.
//!
//! ```text
//! Idle --start()--> Running --(every repaint)--> update, draw, advance
//! ```
//!
//! There is no way back to `Idle`: once started the loop runs until the
//! surface reports an error.

use crate::config::{Config, ConfigOptions};
use crate::error::ConfigError;
use crate::geometry::Geometry;
use crate::render::CubePainter;
use crate::surface::Surface;
use crate::update::displace_into;
use glam::DVec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Host capability that runs a callback on the next display refresh.
pub trait Scheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Scheduler whose refreshes are triggered by the host calling
/// [`ManualScheduler::run_pending`].
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the callbacks registered so far. Callbacks registered while these
    /// run wait for the next call. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let ran = batch.len();
        for callback in batch {
            callback();
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(callback);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
}

/// Owns the surface, the precomputed geometry and the frame counter.
pub struct Animation<S: Surface> {
    config: Config,
    geometry: Geometry,
    painter: CubePainter,
    displaced: Vec<DVec2>,
    frame: u32,
    state: AnimationState,
    surface: S,
}

impl<S: Surface> Animation<S> {
    pub fn new(surface: S, config: Config) -> Self {
        let geometry = Geometry::build(&config);
        let painter = CubePainter::new(&config);
        let displaced = geometry.anchors().to_vec();
        Self {
            config,
            geometry,
            painter,
            displaced,
            frame: 0,
            state: AnimationState::Idle,
            surface,
        }
    }

    pub fn with_options(surface: S, opts: ConfigOptions) -> Result<Self, ConfigError> {
        Ok(Self::new(surface, Config::from_options(opts)?))
    }

    /// Swap in a new configuration. Geometry is rebuilt and the frame
    /// counter is folded into the new loop length.
    pub fn reconfigure(&mut self, config: Config) {
        self.geometry = Geometry::build(&config);
        self.painter = CubePainter::new(&config);
        self.displaced.clear();
        self.displaced.extend_from_slice(self.geometry.anchors());
        self.frame %= config.loop_frames();
        self.config = config;
        log::info!(
            "[animation] reconfigured: cubes={} loop_frames={}",
            self.displaced.len(),
            self.config.loop_frames()
        );
    }

    /// One frame: displace anchors, redraw the chain, advance the counter.
    ///
    /// A surface error is returned as is and leaves the counter untouched.
    pub fn render(&mut self) -> Result<(), S::Error> {
        displace_into(&self.geometry, self.frame, &mut self.displaced);
        self.painter.draw_chain(&mut self.surface, &self.displaced)?;
        self.frame += 1;
        if self.frame == self.config.loop_frames() {
            self.frame = 0;
        }
        Ok(())
    }

    /// Idle -> Running. Returns `false` when already running.
    fn begin_running(&mut self) -> bool {
        match self.state {
            AnimationState::Idle => {
                self.state = AnimationState::Running;
                true
            }
            AnimationState::Running => false,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn painter(&self) -> &CubePainter {
        &self.painter
    }

    /// Anchors as drawn by the most recent [`Animation::render`].
    pub fn displaced(&self) -> &[DVec2] {
        &self.displaced
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Start the continuous loop: every scheduled refresh renders one frame and
/// registers the next. A second call on a running animation does nothing.
///
/// A surface error is passed to `on_error` and ends the loop.
pub fn start<S, Sch, F>(animation: Rc<RefCell<Animation<S>>>, scheduler: Rc<Sch>, on_error: F)
where
    S: Surface + 'static,
    S::Error: 'static,
    Sch: Scheduler + 'static,
    F: FnMut(S::Error) + 'static,
{
    if !animation.borrow_mut().begin_running() {
        log::warn!("[animation] start ignored: already running");
        return;
    }
    log::info!("[animation] running");
    schedule_tick(animation, scheduler, Rc::new(RefCell::new(on_error)));
}

fn schedule_tick<S, Sch, F>(
    animation: Rc<RefCell<Animation<S>>>,
    scheduler: Rc<Sch>,
    on_error: Rc<RefCell<F>>,
) where
    S: Surface + 'static,
    S::Error: 'static,
    Sch: Scheduler + 'static,
    F: FnMut(S::Error) + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || {
        let result = animation.borrow_mut().render();
        match result {
            Ok(()) => schedule_tick(animation, next, on_error),
            Err(e) => {
                log::error!("[animation] frame failed; loop stopped");
                let mut handler = on_error.borrow_mut();
                (*handler)(e);
            }
        }
    }));
}
