//! Junction Wave entry point
//!
//! Drives the frame loop against the platform and renderer contracts. This
//! binary runs headless with a scripted input source and a counting renderer;
//! a windowing shell substitutes its own implementations of both.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use junction_wave::platform::{InputSource, ScriptedInput};
use junction_wave::renderer::{Frame, HeadlessRenderer, Renderer};
use junction_wave::settings::Settings;
use junction_wave::sim::{SimState, TickInput, WaveField, tick};
use junction_wave::view;

/// Frame loop controller owning the simulation and its collaborators
struct App<R: Renderer, I: InputSource> {
    state: SimState,
    frame: Frame,
    renderer: R,
    input: I,
}

impl<R: Renderer, I: InputSource> App<R, I> {
    fn new(state: SimState, renderer: R, input: I) -> Self {
        let capacity = state.field.cell_count();
        Self {
            state,
            frame: Frame::with_capacity(capacity),
            renderer,
            input,
        }
    }

    /// Run frames until the input source requests close
    fn run(&mut self) {
        loop {
            let sample = self.input.sample();
            if sample.close_requested {
                break;
            }

            let input = TickInput {
                cursor: sample.cursor,
                primary_held: sample.primary_held,
                voltage: sample.voltage,
            };
            tick(&mut self.state, &input);
            view::project_frame(&self.state.field, &self.state.view, &mut self.frame);

            if let Err(e) = self.renderer.present(&self.frame) {
                log::warn!("Present error: {e}");
            }

            if self.state.frame % 120 == 0 {
                log::info!(
                    "frame {} t={:.3e} energy={:.3e} rotation=({:.2}, {:.2})",
                    self.state.frame,
                    self.state.field.time,
                    self.state.field.energy(),
                    self.state.view.rotation.x,
                    self.state.view.rotation.y,
                );
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Junction Wave starting...");

    let settings = Settings::load(Path::new("settings.json"));
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let field = WaveField::from_cell_count(settings.cell_count);
    log::info!(
        "Simulating {}x{} cells with seed {seed}",
        field.dim,
        field.dim
    );

    let state = SimState::with_field(field, seed);
    let mut app = App::new(
        state,
        HeadlessRenderer::default(),
        ScriptedInput::new(settings.demo_frames),
    );
    app.run();

    log::info!(
        "Done: {} frames presented, clock {:.3e}s",
        app.renderer.frames_presented,
        app.state.field.time
    );
}
