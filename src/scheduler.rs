// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Deferred task scheduling
//!
//! Deferred work is queued as data and handed back once due; the owner
//! decides how to run it. `ManualScheduler` moves on a virtual clock so
//! delays are deterministic, `WallClockScheduler` follows real time.

use std::time::{Duration, Instant};

use crate::config::Settings;

/// Work deferred by the settings controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Hide the status message
    DismissStatus,
    /// Simulated tenant acknowledgment for the settings just saved
    Acknowledge(Settings),
}

/// Fire-and-forget task queue
pub trait Scheduler {
    /// Queue `task` to become due after `delay`.
    fn schedule(&mut self, delay: Duration, task: ScheduledTask);

    /// Remove and return every due task, earliest first.
    fn take_due(&mut self) -> Vec<ScheduledTask>;

    /// Number of tasks not yet handed out.
    fn pending(&self) -> usize;
}

#[derive(Debug, Default)]
struct TaskQueue {
    entries: Vec<(Duration, u64, ScheduledTask)>,
    next_seq: u64,
}

impl TaskQueue {
    fn push(&mut self, due: Duration, task: ScheduledTask) {
        self.entries.push((due, self.next_seq, task));
        self.next_seq += 1;
    }

    fn pop_due(&mut self, now: Duration) -> Vec<ScheduledTask> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|(at, _, _)| *at <= now);
        self.entries = rest;
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, task)| task).collect()
    }

    fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|(at, _, _)| *at).min()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Scheduler driven by an explicit virtual clock
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: TaskQueue,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Jump the clock to the next queued task. Returns false when idle.
    pub fn skip_to_next(&mut self) -> bool {
        match self.queue.next_due() {
            Some(at) => {
                self.now = self.now.max(at);
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        self.queue.push(self.now + delay, task);
    }

    fn take_due(&mut self) -> Vec<ScheduledTask> {
        self.queue.pop_due(self.now)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Scheduler following the monotonic clock
#[derive(Debug)]
pub struct WallClockScheduler {
    start: Instant,
    queue: TaskQueue,
}

impl WallClockScheduler {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            queue: TaskQueue::default(),
        }
    }
}

impl Default for WallClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for WallClockScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        self.queue.push(self.start.elapsed() + delay, task);
    }

    fn take_due(&mut self) -> Vec<ScheduledTask> {
        self.queue.pop_due(self.start.elapsed())
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_nothing_due_before_delay() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(500), ScheduledTask::DismissStatus);

        scheduler.advance(Duration::from_millis(499));
        assert!(scheduler.take_due().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(scheduler.take_due(), vec![ScheduledTask::DismissStatus]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_manual_scheduler_orders_by_due_time_then_insertion() {
        let mut scheduler = ManualScheduler::new();
        let ack = ScheduledTask::Acknowledge(Settings::default());
        scheduler.schedule(Duration::from_secs(3), ScheduledTask::DismissStatus);
        scheduler.schedule(Duration::from_millis(500), ack.clone());
        scheduler.schedule(Duration::from_secs(3), ack.clone());

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(
            scheduler.take_due(),
            vec![ack.clone(), ScheduledTask::DismissStatus, ack]
        );
    }

    #[test]
    fn test_manual_scheduler_delay_is_relative_to_now() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_secs(2));
        scheduler.schedule(Duration::from_secs(3), ScheduledTask::DismissStatus);

        scheduler.advance(Duration::from_secs(2));
        assert!(scheduler.take_due().is_empty());
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(scheduler.take_due().len(), 1);
    }

    #[test]
    fn test_manual_scheduler_skip_to_next() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.skip_to_next());

        scheduler.schedule(Duration::from_millis(500), ScheduledTask::DismissStatus);
        scheduler.schedule(Duration::from_secs(3), ScheduledTask::DismissStatus);

        assert!(scheduler.skip_to_next());
        assert_eq!(scheduler.now(), Duration::from_millis(500));
        assert_eq!(scheduler.take_due().len(), 1);

        assert!(scheduler.skip_to_next());
        assert_eq!(scheduler.now(), Duration::from_secs(3));
        assert_eq!(scheduler.take_due().len(), 1);
        assert!(!scheduler.skip_to_next());
    }

    #[test]
    fn test_wall_clock_zero_delay_is_due_immediately() {
        let mut scheduler = WallClockScheduler::new();
        scheduler.schedule(Duration::ZERO, ScheduledTask::DismissStatus);
        scheduler.schedule(Duration::from_secs(3600), ScheduledTask::DismissStatus);

        assert_eq!(scheduler.take_due(), vec![ScheduledTask::DismissStatus]);
        assert_eq!(scheduler.pending(), 1);
    }
}
