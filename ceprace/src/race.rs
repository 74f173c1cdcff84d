//! Race-with-deadline coordination across postal-code providers.
//!
//! One race launches every configured provider concurrently against the
//! same code and the same cancellation token, then waits for whichever
//! comes first: a delivered record or the deadline. The first delivery is
//! authoritative regardless of which provider produced it; everything
//! still in flight is cancelled and its eventual result discarded.
//!
//! # Lifecycle
//!
//! 1. **Launch**: every provider is spawned with a clone of the shared token
//! 2. **Wait**: the coordinator blocks on first delivery vs. deadline
//! 3. **Resolve**: exactly one terminal [`Outcome`] per race

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cep::Cep;
use crate::provider::{CepProvider, CepRecord};

/// Default overall budget for one lookup race.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration for a lookup race.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    timeout: Duration,
}

impl RaceConfig {
    /// Creates a configuration with the default one second deadline.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Creates a configuration with a custom deadline.
    ///
    /// The deadline is a single global budget shared by all providers,
    /// not a per-provider allowance.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the overall deadline for one race.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal decision of one race.
///
/// Constructed exactly once per race; `NotFound` and `Timeout` both mean
/// the race concluded without a usable answer and differ only in the
/// diagnostic they deserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A provider delivered a populated record before the deadline.
    Success(CepRecord),
    /// The first delivered record carried no code: the service answered
    /// and does not know the code.
    NotFound,
    /// No delivery arrived before the deadline.
    Timeout,
}

/// Coordinator that races every configured provider against a shared
/// deadline.
///
/// Providers run as independent tasks and never observe each other; the
/// coordinator's delivery channel is the only synchronization point. A
/// provider that fails is logged and simply never delivers, so the race
/// succeeds as long as at least one provider answers in time.
pub struct CepRace {
    providers: Vec<Arc<dyn CepProvider>>,
    config: RaceConfig,
}

impl CepRace {
    /// Creates a new race over the given providers.
    pub fn new(providers: Vec<Arc<dyn CepProvider>>, config: RaceConfig) -> Self {
        Self { providers, config }
    }

    /// Runs one race to completion.
    ///
    /// The token and delivery channel are created fresh per call and
    /// dropped with it, so concurrent races never interfere. Resolution
    /// cancels the token without waiting for losing providers to
    /// acknowledge; a late delivery finds the receiver gone and is
    /// dropped.
    pub async fn run(&self, cep: &Cep) -> Outcome {
        let cancel = CancellationToken::new();
        // One slot per provider so a send always completes even after the
        // race has resolved.
        let (tx, mut rx) = mpsc::channel::<CepRecord>(self.providers.len().max(1));

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let cancel = cancel.clone();
            let cep = cep.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                match provider.lookup(&cep, &cancel).await {
                    Ok(record) => {
                        debug!(provider = provider.id(), "lookup delivered");
                        let _ = tx.send(record).await;
                    }
                    Err(err) if cancel.is_cancelled() => {
                        debug!(provider = provider.id(), error = %err, "lookup cancelled");
                    }
                    Err(err) => {
                        warn!(provider = provider.id(), error = %err, "lookup failed");
                    }
                }
            });
        }

        // Only provider tasks hold senders now. If every one of them fails,
        // the recv arm below disables itself and the deadline resolves the
        // race.
        drop(tx);

        let outcome = tokio::select! {
            Some(record) = rx.recv() => {
                cancel.cancel();
                if record.cep.is_empty() {
                    Outcome::NotFound
                } else {
                    Outcome::Success(record)
                }
            }

            _ = tokio::time::sleep(self.config.timeout()) => {
                cancel.cancel();
                Outcome::Timeout
            }
        };

        debug!(outcome = ?outcome, "race resolved");
        outcome
    }
}
