use color_eyre::Result;
use log::info;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::config::{PLAYER_KEY_STEP, Settings};
use crate::effects::{Splat, create_splat};
use crate::events::GameEvent;
use crate::input::{InputAction, InputManager, InputMode};
use crate::renderer::{GameRenderer, RenderView, Viewport};
use crate::world::GameWorld;

const FRAME_SLEEP: Duration = Duration::from_millis(16);

/// The main application: owns the world and the presentation pieces around it.
pub struct App {
    running: bool,
    paused: bool,
    world: GameWorld,
    splats: Vec<Splat>,
    /// Last drawn play-field, used to turn mouse cells into world points
    viewport: Viewport,
    /// Without release events held keys must be forgotten every frame
    sticky_keys: bool,
    last_frame_time: Instant,
    fps: u32,
    rng: ThreadRng,
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    pub fn new(settings: &Settings, has_key_release: bool) -> Self {
        let audio_manager = AudioManager::new_or_silent(&settings.asset_dir, settings.muted);
        audio_manager.play_music();

        Self {
            running: true,
            paused: false,
            world: GameWorld::new(),
            splats: Vec::new(),
            viewport: Viewport::default(),
            sticky_keys: !has_key_release,
            last_frame_time: Instant::now(),
            fps: 0,
            rng: rand::rng(),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("burger invaders started");
        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            terminal.draw(|frame| {
                let area = frame.area();
                self.viewport = Viewport::for_terminal(area);
                let view = RenderView {
                    world: &self.world,
                    splats: &self.splats,
                    paused: self.paused,
                    area,
                    fps: self.fps,
                    sound: !self.audio_manager.is_silent(),
                };
                self.renderer.render(frame, &view);
            })?;

            let mode = self.input_mode();
            self.input_manager.poll_events(mode)?;
            let actions = self.input_manager.get_actions(mode);
            if self.sticky_keys {
                self.input_manager.release_all();
            }
            self.process_actions(&actions);

            if !self.paused {
                self.update();
            }

            std::thread::sleep(FRAME_SLEEP);
        }
        info!("burger invaders stopped with score {}", self.world.score);
        Ok(())
    }

    fn input_mode(&self) -> InputMode {
        if self.world.is_terminal() {
            InputMode::Ended
        } else if self.paused {
            InputMode::Paused
        } else {
            InputMode::Playing
        }
    }

    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => self.running = false,
                InputAction::Pause => self.paused = true,
                InputAction::Resume => self.paused = false,
                InputAction::Restart => {
                    info!("restarting");
                    self.world = GameWorld::new();
                    self.splats.clear();
                    self.paused = false;
                }
                InputAction::PointerMoved { column, row } => {
                    let (x, y) = self.viewport.to_world(*column, *row);
                    self.world.pointer_moved(x, y);
                }
                InputAction::MoveLeft => self.world.nudge_player(-PLAYER_KEY_STEP, 0.0),
                InputAction::MoveRight => self.world.nudge_player(PLAYER_KEY_STEP, 0.0),
                InputAction::MoveUp => self.world.nudge_player(0.0, PLAYER_KEY_STEP),
                InputAction::MoveDown => self.world.nudge_player(0.0, -PLAYER_KEY_STEP),
                InputAction::Fire => {
                    self.world.pointer_pressed(&mut self.rng);
                }
            }
        }
        // Fire input produces events before the tick does
        self.handle_events();
    }

    fn update(&mut self) {
        if !self.world.is_terminal() {
            for splat in &mut self.splats {
                splat.update();
            }
            self.splats.retain(|s| !s.is_dead());
        }

        self.world.tick(&mut self.rng);
        self.handle_events();
    }

    /// Side effects of the simulation: sound and splats
    fn handle_events(&mut self) {
        for event in self.world.drain_events() {
            match event {
                GameEvent::PlayerFired { sound, .. } => self.audio_manager.play_effect(sound),
                GameEvent::EnemyDestroyed { x, y, sound } => {
                    self.audio_manager.play_effect(sound);
                    self.splats.extend(create_splat(x, y));
                }
                GameEvent::GameOver
                | GameEvent::Won
                | GameEvent::EnemyFired { .. }
                | GameEvent::ShieldHit { .. }
                | GameEvent::FormationTurned
                | GameEvent::WaveSpawned { .. } => {}
            }
        }
    }
}
