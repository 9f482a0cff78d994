//! Deadline-ordered queue for delayed messages

use std::time::{Duration, Instant};

use crate::messages::Msg;

#[derive(Debug)]
struct Timer {
    deadline: Instant,
    seq: u64,
    msg: Msg,
}

/// Messages waiting for their deadline
///
/// Timers with equal deadlines fire in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `msg` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, msg: Msg) {
        let timer = Timer {
            deadline: now + delay,
            seq: self.next_seq,
            msg,
        };
        self.next_seq += 1;
        self.timers.push(timer);
    }

    /// Remove and return every message due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<Msg> {
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|t| t.deadline <= now);
        self.timers = pending;
        due.sort_by_key(|t| (t.deadline, t.seq));
        due.into_iter().map(|t| t.msg).collect()
    }

    /// Deadline of the next timer to fire
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
