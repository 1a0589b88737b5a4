//! Wall Cat entry point
//!
//! Runs a headless session with a scripted player so the simulation can be
//! watched through the log.
//! Usage: `wall-cat [config.json] [seed] [seconds] [scores.json]`.

use anyhow::Context;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use wall_cat::consts::*;
use wall_cat::sim::{Aabb, Direction, Hazard, InputSignal, Obstacle, Session, WorldBounds};
use wall_cat::{Config, HighScores};

/// Visible world below the best height reached
const VIEW_HEIGHT: f32 = 900.0;
/// Vertical spacing between hazard rows
const HAZARD_SPACING: f32 = 450.0;
const HAZARD_ROWS: usize = 200;
/// Meters between power charges
const POWER_EVERY_METERS: u32 = 25;
/// Cooldown before super-lucky can be used again (seconds)
const SUPER_LUCKY_COOLDOWN: f32 = 5.0;
/// Leaderboard file used when none is given
const DEFAULT_SCORES_PATH: &str = "wall-cat-scores.json";

/// Demo host holding everything the session borrows per frame
struct Game {
    session: Session,
    input: InputSignal,
    obstacles: Vec<Box<dyn Obstacle>>,
    scores: HighScores,
    rng: Pcg32,
    accumulator: f32,
    now_ms: f64,
    last_charge: u32,
}

impl Game {
    fn new(config: Config, seed: u64, scores: HighScores) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = generate_hazards(&config, &mut rng);
        Self {
            session: Session::new(config),
            input: InputSignal::new(),
            obstacles,
            scores,
            rng,
            accumulator: 0.0,
            now_ms: 0.0,
            last_charge: 0,
        }
    }

    /// Advance by a frame's worth of real time in fixed substeps
    fn update(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.now_ms += SIM_DT as f64 * 1000.0;
            self.autopilot();

            let bounds = WorldBounds::new(self.session.player.min_y + VIEW_HEIGHT);
            self.session.frame(
                SIM_DT,
                &mut self.input,
                &self.obstacles,
                bounds,
                self.now_ms,
                &mut self.scores,
            );

            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Tap at walls, charge power while climbing, restart from the menu
    fn autopilot(&mut self) {
        if self.session.in_menu {
            self.session.restart();
            self.last_charge = 0;
            self.input.release();
            return;
        }

        let config = &self.session.config;
        let player = &mut self.session.player;

        if self.input.held() {
            self.input.release();
        } else if player.on_wall(config) && self.rng.random_bool(0.3) {
            self.input.press();
        } else if player.direction == Direction::Idle {
            self.input.press();
        }

        let charge = player.distance(config) / POWER_EVERY_METERS;
        if charge > self.last_charge {
            self.last_charge = charge;
            player.add_power(1.0);
            if player.time_since_super_lucky > SUPER_LUCKY_COOLDOWN && player.activate_super_lucky() {
                log::info!("Super lucky at {}m", player.distance(config));
            }
        }
    }
}

/// Rows of spikes alternating between the walls
fn generate_hazards(config: &Config, rng: &mut Pcg32) -> Vec<Box<dyn Obstacle>> {
    (1..=HAZARD_ROWS)
        .map(|row| {
            let y = -(row as f32) * HAZARD_SPACING + rng.random_range(-100.0..100.0);
            let x = if rng.random_bool(0.5) {
                config.left_wall() + config.hitbox_radius
            } else {
                config.right_wall() - config.hitbox_radius
            };
            let spike = Aabb::new(Vec2::new(x - 15.0, y - 15.0), Vec2::new(x + 15.0, y + 15.0));
            Box::new(Hazard::new(spike)) as Box<dyn Obstacle>
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Wall Cat (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load_or_default(&path),
        None => Config::default(),
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
        None => 12345,
    };
    let seconds: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid duration {s:?}"))?,
        None => 60.0,
    };
    let scores_path = args.next().unwrap_or_else(|| DEFAULT_SCORES_PATH.to_string());
    let scores = HighScores::load(&scores_path)?;

    let mut game = Game::new(config, seed, scores);
    let frame_dt = 1.0 / 60.0;
    let frames = (seconds / frame_dt) as u32;
    for _ in 0..frames {
        game.update(frame_dt);
    }

    let pose = game.session.player.snapshot(game.now_ms, &game.session.config);
    log::info!(
        "Finished after {} deaths, current run {}m",
        game.session.deaths.len(),
        pose.distance
    );
    game.scores.save(&scores_path)?;
    println!("{}", serde_json::to_string_pretty(&game.scores)?);
    Ok(())
}
