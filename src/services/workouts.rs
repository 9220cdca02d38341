//! Workout loading service
//!
//! One fetch per mount of the Workouts page, run on a tokio task so the UI
//! loop never waits on the network. The result comes back over a channel and
//! is drained by the App each frame.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{fallback_workouts, Exercise, WorkoutClient};

/// What a finished load produced
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutOutcome {
    /// The API answered; the list may be empty
    Live(Vec<Exercise>),
    /// The API could not be used; carries the fixed fallback list
    Fallback {
        reason: String,
        workouts: Vec<Exercise>,
    },
}

impl WorkoutOutcome {
    pub fn workouts(&self) -> &[Exercise] {
        match self {
            WorkoutOutcome::Live(workouts) => workouts,
            WorkoutOutcome::Fallback { workouts, .. } => workouts,
        }
    }

    fn fallback(reason: String) -> Self {
        WorkoutOutcome::Fallback {
            reason,
            workouts: fallback_workouts(),
        }
    }
}

#[derive(Debug)]
pub struct WorkoutResponse {
    /// Mount this response belongs to
    pub generation: u64,
    pub outcome: WorkoutOutcome,
}

/// Fetch once, substituting the fallback list on any failure
///
/// No retry and no backoff: a timeout, transport error, non-2xx status or
/// undecodable body all end the same way.
pub async fn load_workouts(client: &WorkoutClient, timeout: Duration) -> WorkoutOutcome {
    match client.fetch_with_timeout(timeout).await {
        Ok(workouts) => {
            tracing::info!(count = workouts.len(), url = client.base_url(), "fetched workouts");
            WorkoutOutcome::Live(workouts)
        }
        Err(e) => {
            tracing::warn!(error = %e, url = client.base_url(), "error fetching workout data, using fallback");
            WorkoutOutcome::fallback(e.to_string())
        }
    }
}

/// Owns the in-flight fetch for the Workouts page
pub struct WorkoutLoader {
    client: WorkoutClient,
    timeout: Duration,
    offline: bool,
    generation: u64,
    task: Option<JoinHandle<()>>,
    answered: bool,
    response_tx: mpsc::UnboundedSender<WorkoutResponse>,
}

impl WorkoutLoader {
    pub fn new(
        client: WorkoutClient,
        timeout: Duration,
        offline: bool,
    ) -> (Self, mpsc::UnboundedReceiver<WorkoutResponse>) {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let loader = Self {
            client,
            timeout,
            offline,
            generation: 0,
            task: None,
            answered: false,
            response_tx,
        };
        (loader, response_rx)
    }

    /// Start a fresh load, cancelling any load still running
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) -> u64 {
        self.unmount();

        let generation = self.generation;
        let response_tx = self.response_tx.clone();
        self.answered = false;

        if self.offline {
            tracing::debug!(generation, "offline mode, using fallback workouts");
            let _ = response_tx.send(WorkoutResponse {
                generation,
                outcome: WorkoutOutcome::fallback("offline mode".to_string()),
            });
            return generation;
        }

        let client = self.client.clone();
        let timeout = self.timeout;
        tracing::debug!(generation, ?timeout, "mounting workouts, starting fetch");

        self.task = Some(tokio::spawn(async move {
            let outcome = load_workouts(&client, timeout).await;
            let _ = response_tx.send(WorkoutResponse {
                generation,
                outcome,
            });
        }));

        generation
    }

    /// Cancel the in-flight load; its result, if any, will be ignored
    pub fn unmount(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!(generation = self.generation, "unmounting workouts, aborting fetch");
            }
            task.abort();
        }
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a response belongs to the current mount; marks it answered
    pub fn accept(&mut self, response: &WorkoutResponse) -> bool {
        if response.generation != self.generation {
            tracing::debug!(
                stale = response.generation,
                current = self.generation,
                "discarding workout response from an earlier mount"
            );
            return false;
        }
        self.answered = true;
        true
    }

    /// The fetch task ended without ever sending a response
    ///
    /// Only a panic inside the task gets here. Call after draining the
    /// response channel, since the task sends before it finishes.
    pub fn died_silently(&self) -> bool {
        !self.answered
            && self
                .task
                .as_ref()
                .is_some_and(|task| task.is_finished())
    }
}
