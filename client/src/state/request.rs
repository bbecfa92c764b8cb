#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Loading/error flags for one user action's outstanding request.
///
/// Each action owns one of these; at most one request is in flight per
/// action, and a new attempt clears the previous error. Lookups whose input
/// can change mid-flight use [`RequestState::restart`] instead of `begin`, so
/// only the latest request settles the state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped by `restart`; identifies the latest request.
    pub generation: u64,
}

impl RequestState {
    /// Mark a request as started. Returns `false` if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Start a request that supersedes any in flight. Returns its generation.
    pub fn restart(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Settle `generation` as succeeded. Returns `false` if it was superseded.
    pub fn succeed_current(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.succeed();
        true
    }

    /// Settle `generation` as failed. Returns `false` if it was superseded.
    pub fn fail_current(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.fail(message);
        true
    }
}
