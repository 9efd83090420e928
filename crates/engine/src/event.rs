//! Engine lifecycle state and the notifications it emits.

/// Two-state lifecycle. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    #[default]
    Running,
    GameOver,
}

/// Notifications queued for collaborators, drained with
/// [`Engine::drain_events`](crate::Engine::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Rows were cleared; carries the new cumulative score.
    ScoreChanged(u32),
    /// A spawned piece did not fit. Emitted once.
    GameOver,
}
