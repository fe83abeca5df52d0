use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// Diagnostic record for one chunk summarize call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkEvent {
    /// Chunking pass, starting at 1
    pub pass: usize,
    pub chunk_index: usize,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Receives per-chunk events; never affects the reduction itself
pub trait EventSink: Send + Sync {
    fn record(&self, event: &ChunkEvent);
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<ChunkEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ChunkEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn failures(&self) -> Vec<ChunkEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.outcome == Outcome::Failure)
            .collect()
    }
}

impl EventSink for CollectingSink {
    fn record(&self, event: &ChunkEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
