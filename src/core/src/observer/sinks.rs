use crate::observer::events::DecisionEvent;
use log::debug;

/// Receives every decision the engine makes, in order.
pub trait DecisionObserver {
    fn observe(&mut self, event: DecisionEvent);
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl DecisionObserver for NullObserver {
    fn observe(&mut self, _event: DecisionEvent) {}
}

/// Keeps events in memory for later inspection.
#[derive(Debug, Default, Clone)]
pub struct DecisionTrace {
    pub events: Vec<DecisionEvent>,
}

impl DecisionTrace {
    pub fn new() -> Self {
        DecisionTrace { events: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl DecisionObserver for DecisionTrace {
    fn observe(&mut self, event: DecisionEvent) {
        self.events.push(event);
    }
}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    pub team_id: u32,
}

impl LogObserver {
    pub fn new(team_id: u32) -> Self {
        LogObserver { team_id }
    }
}

impl DecisionObserver for LogObserver {
    fn observe(&mut self, event: DecisionEvent) {
        debug!("team {}: {:?}", self.team_id, event);
    }
}
