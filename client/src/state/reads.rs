//! Explicit three-state chain reads with refetch cancellation.
//!
//! DESIGN
//! ======
//! Every asynchronous read is one `ReadState` value — never a bundle of
//! boolean flags — and forced refetches go through a `ReadSlot`, whose
//! generation counter guarantees a submission acts on the most recent read:
//! starting a new read invalidates any previous in-flight completion.

#[cfg(test)]
#[path = "reads_test.rs"]
mod reads_test;

/// Status of one asynchronous read operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReadState<T> {
    /// Never started.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Completed successfully.
    Ready(T),
    /// Completed with a transport or execution error.
    Failed(String),
}

impl<T> ReadState<T> {
    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, when failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The value, when ready.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A read slot whose newest request wins.
#[derive(Clone, Debug, Default)]
pub struct ReadSlot<T> {
    generation: u64,
    state: ReadState<T>,
}

impl<T> ReadSlot<T> {
    /// Begin a (re)fetch, cancelling any previous in-flight one.
    ///
    /// Returns the generation token the completion must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ReadState::Loading;
        self.generation
    }

    /// Complete the fetch for `generation`.
    ///
    /// Returns false (and changes nothing) when a newer fetch has started
    /// since — the completion lost the race and must be dropped.
    pub fn complete(&mut self, generation: u64, outcome: Result<T, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match outcome {
            Ok(value) => ReadState::Ready(value),
            Err(error) => ReadState::Failed(error),
        };
        true
    }

    /// Current read state.
    #[must_use]
    pub fn state(&self) -> &ReadState<T> {
        &self.state
    }
}
