//! Host-owned timer queue
//!
//! Delayed effects are queued here and fired by the game loop when their due
//! time passes, so they run in a known order and can be cancelled when the
//! session that requested them is replaced.

use serde::{Deserialize, Serialize};

/// Deferred top-level state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Show the menu/restart screen
    ShowMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Wall-clock time (ms) at which the event fires
    pub due_ms: f64,
    /// Session that requested it
    pub session: u32,
    pub event: HostEvent,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, session: u32, event: HostEvent) {
        let due_ms = now_ms + delay_ms.max(0.0);
        // Insert after every entry due at or before this one (FIFO for ties)
        let pos = self.queue.partition_point(|e| e.due_ms <= due_ms);
        self.queue.insert(
            pos,
            ScheduledEvent {
                due_ms,
                session,
                event,
            },
        );
    }

    /// Remove and return every event due at `now_ms`, earliest first
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<ScheduledEvent> {
        let split = self.queue.partition_point(|e| e.due_ms <= now_ms);
        self.queue.drain(..split).collect()
    }

    /// Drop all events of a session; returns how many were dropped
    pub fn cancel_session(&mut self, session: u32) -> usize {
        let before = self.queue.len();
        self.queue.retain(|e| e.session != session);
        before - self.queue.len()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_only_due_events() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 1000.0, 1, HostEvent::ShowMenu);
        scheduler.schedule(500.0, 1000.0, 2, HostEvent::ShowMenu);

        assert!(scheduler.drain_due(999.0).is_empty());

        let fired = scheduler.drain_due(1000.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].session, 1);
        assert_eq!(scheduler.pending(), 1);

        let fired = scheduler.drain_due(5000.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].session, 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 100.0, 7, HostEvent::ShowMenu);
        scheduler.schedule(50.0, 50.0, 8, HostEvent::ShowMenu);

        let sessions: Vec<u32> = scheduler.drain_due(100.0).iter().map(|e| e.session).collect();
        assert_eq!(sessions, vec![7, 8]);
    }

    #[test]
    fn test_cancel_session() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 1000.0, 1, HostEvent::ShowMenu);
        scheduler.schedule(0.0, 2000.0, 2, HostEvent::ShowMenu);

        assert_eq!(scheduler.cancel_session(1), 1);
        assert_eq!(scheduler.cancel_session(1), 0);

        let fired = scheduler.drain_due(10_000.0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].session, 2);
    }
}
