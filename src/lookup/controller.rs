//! # Lookup Controller
//!
//! Owns the two display surfaces and runs lookup cycles against them.
//!
//! ```text
//! trigger ──▶ RequestBuilder ──▶ tokio::spawn(HttpTransport::fetch)
//!                                         │
//!                                         ▼ mpsc
//! settle_next ◀──────────────── CycleOutcome { cycle, result }
//!      │
//!      ▼
//! ResponseRenderer ──▶ DisplayArea + StatusBanner
//! ```
//!
//! Cycles are independent. Nothing de-duplicates or cancels them, and
//! outcomes are applied in arrival order, so the last one to land wins.

use std::future::Future;

use tokio::sync::mpsc;

use super::banner::StatusBanner;
use super::display::DisplayArea;
use super::error::LookupError;
use super::renderer::ResponseRenderer;
use super::request::{LookupRequest, RequestBuilder, RequestDescriptor};
use super::result::LookupResult;
use super::transport::HttpTransport;

/// Failure reported for a cycle whose task died before producing a result
pub const TASK_ABORTED_MESSAGE: &str = "Lookup task ended without a result";

/// Result of one finished cycle, sent back from its task
#[derive(Debug)]
pub struct CycleOutcome {
    pub cycle: u64,
    pub result: LookupResult,
}

/// Sends a cycle's outcome exactly once
///
/// Dropping it unreported (the task panicked or was aborted) sends a failure
/// instead, so the controller never waits on a cycle that cannot finish.
struct OutcomeReporter {
    cycle: u64,
    sender: Option<mpsc::UnboundedSender<CycleOutcome>>,
}

impl OutcomeReporter {
    fn report(mut self, result: LookupResult) {
        if let Some(sender) = self.sender.take() {
            // Receiver lives as long as the controller; a send error means it is gone
            let _ = sender.send(CycleOutcome {
                cycle: self.cycle,
                result,
            });
        }
    }
}

impl Drop for OutcomeReporter {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            tracing::error!(cycle = self.cycle, "{TASK_ABORTED_MESSAGE}");
            let _ = sender.send(CycleOutcome {
                cycle: self.cycle,
                result: LookupError::Transport(TASK_ABORTED_MESSAGE.to_string()).into(),
            });
        }
    }
}

/// What happened when a trigger fired
#[derive(Debug)]
pub enum TriggerOutcome {
    /// Request is in flight; its outcome arrives through `settle_next`
    Dispatched {
        cycle: u64,
        descriptor: RequestDescriptor,
    },
    /// Input was rejected; no request was made
    Rejected(LookupError),
}

pub struct LookupController {
    builder: RequestBuilder,
    transport: HttpTransport,
    renderer: ResponseRenderer,
    display: DisplayArea,
    banner: StatusBanner,
    next_cycle: u64,
    in_flight: usize,
    outcome_sender: mpsc::UnboundedSender<CycleOutcome>,
    outcome_receiver: mpsc::UnboundedReceiver<CycleOutcome>,
}

impl LookupController {
    pub fn new(builder: RequestBuilder, transport: HttpTransport, renderer: ResponseRenderer) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::unbounded_channel();
        Self {
            builder,
            transport,
            renderer,
            display: DisplayArea::new(),
            banner: StatusBanner::new(),
            next_cycle: 1,
            in_flight: 0,
            outcome_sender,
            outcome_receiver,
        }
    }

    /// Start one cycle
    ///
    /// Must be called from within a tokio runtime: the request runs on a
    /// spawned task.
    pub fn trigger(&mut self, identifier: &str, credential: Option<&str>) -> TriggerOutcome {
        let cycle = self.next_cycle;
        self.next_cycle += 1;

        self.renderer.begin(&mut self.display, &mut self.banner);

        let request = LookupRequest::new(identifier, credential);
        let descriptor = match self.builder.build(&request) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                self.renderer.reject(&err, &mut self.display, &mut self.banner);
                return TriggerOutcome::Rejected(err);
            }
        };

        tracing::info!(cycle, url = %descriptor.url(), "Dispatching lookup");

        let transport = self.transport.clone();
        let task_descriptor = descriptor.clone();
        self.spawn_cycle(cycle, async move { transport.fetch(&task_descriptor).await });

        TriggerOutcome::Dispatched { cycle, descriptor }
    }

    fn spawn_cycle<F>(&mut self, cycle: u64, lookup: F)
    where
        F: Future<Output = LookupResult> + Send + 'static,
    {
        let reporter = OutcomeReporter {
            cycle,
            sender: Some(self.outcome_sender.clone()),
        };
        tokio::spawn(async move {
            let result = lookup.await;
            reporter.report(result);
        });
        self.in_flight += 1;
    }

    /// Wait for the next in-flight cycle to finish and render it
    ///
    /// Returns `None` immediately when nothing is in flight. Cancel safe.
    pub async fn settle_next(&mut self) -> Option<u64> {
        if self.in_flight == 0 {
            return None;
        }
        let outcome = self.outcome_receiver.recv().await?;
        Some(self.apply(outcome))
    }

    /// Wait for every in-flight cycle
    pub async fn settle_all(&mut self) {
        while self.settle_next().await.is_some() {}
    }

    fn apply(&mut self, outcome: CycleOutcome) -> u64 {
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::debug!(
            cycle = outcome.cycle,
            success = outcome.result.is_success(),
            "Cycle resolved"
        );
        self.renderer
            .render(&outcome.result, &mut self.display, &mut self.banner);
        outcome.cycle
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn display(&self) -> &DisplayArea {
        &self.display
    }

    pub fn banner(&self) -> &StatusBanner {
        &self.banner
    }
}
