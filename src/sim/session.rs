//! One play session: the player plus the host-side effects of its frames
//!
//! Routes the events a frame emits (death history, score persistence, camera
//! shake, the delayed menu) and fires scheduled host events.

use super::collision::Obstacle;
use super::events::{DeathRecord, GameEvent};
use super::input::InputSignal;
use super::player::{FrameContext, PlayerState, WorldBounds};
use super::schedule::{HostEvent, Scheduler};
use crate::config::Config;

/// Receives the final distance of each run
pub trait ScoreSink {
    fn report_score(&mut self, distance: u32, now_ms: f64);
}

#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    /// Bumped on every restart; tags scheduled events
    pub id: u32,
    pub player: PlayerState,
    /// Every death since the game started, across restarts
    pub deaths: Vec<DeathRecord>,
    /// Wall-clock end of the current camera shake (ms)
    pub camera_shake_end_ms: f64,
    pub in_menu: bool,
    scheduler: Scheduler,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let player = PlayerState::new(&config);
        Self {
            config,
            id: 1,
            player,
            deaths: Vec::new(),
            camera_shake_end_ms: 0.0,
            in_menu: false,
            scheduler: Scheduler::new(),
            events: Vec::new(),
        }
    }

    /// Start a new run. Pending menu transitions of the old run are dropped.
    pub fn restart(&mut self) {
        let dropped = self.scheduler.cancel_session(self.id);
        if dropped > 0 {
            log::debug!("Cancelled {} pending host event(s) of session {}", dropped, self.id);
        }
        self.id += 1;
        self.player.reset(&self.config);
        self.in_menu = false;
        log::info!("Session {} started", self.id);
    }

    /// Run one frame
    pub fn frame(
        &mut self,
        dt: f32,
        input: &mut InputSignal,
        obstacles: &[Box<dyn Obstacle>],
        bounds: WorldBounds,
        now_ms: f64,
        scores: &mut impl ScoreSink,
    ) {
        for scheduled in self.scheduler.drain_due(now_ms) {
            match scheduled.event {
                HostEvent::ShowMenu => {
                    self.in_menu = true;
                    log::info!("Session {} over, showing menu", scheduled.session);
                }
            }
        }

        let mut ctx = FrameContext {
            config: &self.config,
            input,
            obstacles,
            bounds,
            in_menu: self.in_menu,
            now_ms,
            events: &mut self.events,
        };
        self.player.update(dt, &mut ctx);

        for event in self.events.drain(..) {
            match event {
                GameEvent::CameraShake { until_ms } => {
                    self.camera_shake_end_ms = self.camera_shake_end_ms.max(until_ms);
                }
                GameEvent::Died(record) => self.deaths.push(record),
                GameEvent::MenuTransition { delay_ms } => {
                    self.scheduler
                        .schedule(now_ms, delay_ms, self.id, HostEvent::ShowMenu);
                }
                GameEvent::Score { distance } => scores.report_score(distance, now_ms),
            }
        }
    }

    #[inline]
    pub fn shake_active(&self, now_ms: f64) -> bool {
        now_ms < self.camera_shake_end_ms
    }

    /// Host events still waiting to fire
    pub fn pending_host_events(&self) -> usize {
        self.scheduler.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MENU_TRANSITION_DELAY_MS;
    use crate::sim::collision::Aabb;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<u32>);

    impl ScoreSink for Recorder {
        fn report_score(&mut self, distance: u32, _now_ms: f64) {
            self.0.push(distance);
        }
    }

    const FAR: f32 = 1.0e9;

    fn deadly_box_at_start(config: &Config) -> Vec<Box<dyn Obstacle>> {
        let obstacle: Box<dyn Obstacle> =
            Box::new(Aabb::from_center(Vec2::new(config.width / 2.0, 0.0), 5.0));
        vec![obstacle]
    }

    #[test]
    fn test_death_routes_effects() {
        let mut session = Session::new(Config::default());
        let mut input = InputSignal::new();
        let mut scores = Recorder::default();
        let obstacles = deadly_box_at_start(&session.config);

        session.frame(0.016, &mut input, &obstacles, WorldBounds::new(FAR), 1000.0, &mut scores);
        assert!(session.player.dead);
        assert_eq!(session.deaths.len(), 1);
        assert_eq!(scores.0, vec![0]);
        assert!(session.shake_active(1050.0));
        assert!(!session.shake_active(2000.0));
        assert_eq!(session.pending_host_events(), 1);

        // Menu appears once the delay has passed
        session.frame(0.016, &mut input, &obstacles, WorldBounds::new(FAR), 1500.0, &mut scores);
        assert!(!session.in_menu);
        session.frame(
            0.016,
            &mut input,
            &obstacles,
            WorldBounds::new(FAR),
            1000.0 + MENU_TRANSITION_DELAY_MS,
            &mut scores,
        );
        assert!(session.in_menu);
        assert_eq!(session.deaths.len(), 1);
        assert_eq!(scores.0.len(), 1);
    }

    #[test]
    fn test_restart_cancels_stale_menu_transition() {
        let mut session = Session::new(Config::default());
        let mut input = InputSignal::new();
        let mut scores = Recorder::default();
        let obstacles = deadly_box_at_start(&session.config);

        session.frame(0.016, &mut input, &obstacles, WorldBounds::new(FAR), 0.0, &mut scores);
        assert!(session.player.dead);

        session.restart();
        assert_eq!(session.id, 2);
        assert!(!session.player.dead);
        assert_eq!(session.pending_host_events(), 0);

        let empty: Vec<Box<dyn Obstacle>> = Vec::new();
        session.frame(0.016, &mut input, &empty, WorldBounds::new(FAR), 5000.0, &mut scores);
        assert!(!session.in_menu);
        // History survives restarts
        assert_eq!(session.deaths.len(), 1);
    }

    #[test]
    fn test_menu_blocks_jumps_until_restart() {
        let mut session = Session::new(Config::default());
        session.in_menu = true;
        let mut input = InputSignal::new();
        let mut scores = Recorder::default();
        let empty: Vec<Box<dyn Obstacle>> = Vec::new();

        input.press();
        session.frame(0.016, &mut input, &empty, WorldBounds::new(FAR), 0.0, &mut scores);
        assert!(input.is_fresh());

        session.restart();
        session.frame(0.016, &mut input, &empty, WorldBounds::new(FAR), 16.0, &mut scores);
        assert!(!input.is_fresh());
        assert_eq!(session.player.vy, -session.config.jump_impulse);
    }
}
