//! # Simulated Client
//!
//! A minimal stand-in for a game client's main loop. It owns a `SimWorld`, an observer and a
//! `RecordingSurface`, and on every `step` it fires the registered tick callbacks followed by
//! the render callbacks, the way a real client fires its end-of-tick and world-render events.

use cgmath::{Point3, Vector3};

use super::{
    cache::RefreshOutcome,
    host::{FrameContext, Observer, TickContext, WorldView},
    rendering::{draw_command::RenderState, recording_surface::RecordingSurface},
    voxels::{position::DimensionId, world::SimWorld},
    Highlighter, RenderHandler, TickHandler,
};

/// Height of the camera above the observer's feet.
pub const EYE_HEIGHT: f64 = 1.62;

/// What one client step produced.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSummary {
    /// The tick that was simulated.
    pub tick: u64,
    /// One outcome per registered tick handler.
    pub outcomes: Vec<RefreshOutcome>,
    /// Vertices submitted across all render handlers this frame.
    pub vertices: usize,
}

/// A single-threaded client loop over an in-memory world.
pub struct SimClient {
    world: SimWorld,
    observer: Observer,
    tick: u64,
    surface: RecordingSurface,
    tick_handlers: Vec<TickHandler<SimWorld>>,
    render_handlers: Vec<RenderHandler>,
}

impl SimClient {
    /// Creates a client with the observer standing at `position` in `world`.
    pub fn new(world: SimWorld, position: Point3<f64>) -> Self {
        let observer = Observer::new(position, world_dimension(&world));
        SimClient {
            world,
            observer,
            tick: 0,
            surface: RecordingSurface::new(RenderState::default()),
            tick_handlers: Vec::new(),
            render_handlers: Vec::new(),
        }
    }

    /// Registers a simulation-step callback.
    pub fn register_tick(&mut self, handler: TickHandler<SimWorld>) {
        self.tick_handlers.push(handler);
    }

    /// Registers a frame-render callback.
    pub fn register_render(&mut self, handler: RenderHandler) {
        self.render_handlers.push(handler);
    }

    /// Registers both of a highlighter's callbacks.
    pub fn register(&mut self, highlighter: Highlighter) {
        let (tick, render) = highlighter.into_handlers();
        self.register_tick(tick);
        self.register_render(render);
    }

    /// Mutable access to the current world.
    pub fn world_mut(&mut self) -> &mut SimWorld {
        &mut self.world
    }

    /// The observer.
    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// The surface frames are drawn onto.
    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    /// The tick the next `step` will simulate.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Jumps the world clock.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// Teleports the observer within the current world.
    pub fn move_observer_to(&mut self, position: Point3<f64>) {
        self.observer.position = position;
    }

    /// Moves the observer by `offset`.
    pub fn move_observer_by(&mut self, offset: Vector3<f64>) {
        self.observer.position += offset;
    }

    /// Sends the observer to another world, returning the previous one.
    pub fn change_world(&mut self, world: SimWorld, position: Point3<f64>) -> SimWorld {
        self.observer = Observer::new(position, world_dimension(&world));
        std::mem::replace(&mut self.world, world)
    }

    /// Simulates one tick and renders one frame.
    pub fn step(&mut self) -> StepSummary {
        let ctx = TickContext {
            tick: self.tick,
            observer: &self.observer,
            world: &self.world,
        };
        let outcomes = self
            .tick_handlers
            .iter_mut()
            .map(|handler| handler(&ctx))
            .collect();

        let frame = FrameContext {
            camera_position: self.observer.position + Vector3::new(0.0, EYE_HEIGHT, 0.0),
            observer_dimension: self.observer.dimension.clone(),
        };
        self.surface.clear();
        let mut vertices = 0;
        for handler in self.render_handlers.iter_mut() {
            vertices += handler(&frame, &mut self.surface);
        }

        let summary = StepSummary {
            tick: self.tick,
            outcomes,
            vertices,
        };
        self.tick += 1;
        summary
    }

    /// Runs `count` steps, returning their summaries.
    pub fn run(&mut self, count: usize) -> Vec<StepSummary> {
        (0..count).map(|_| self.step()).collect()
    }
}

fn world_dimension(world: &SimWorld) -> DimensionId {
    world.dimension().clone()
}
