//! # Application Loop
//!
//! Turns CLI identifiers or stdin lines into lookup triggers and redraws the
//! surfaces after every change. Each line read is one "button press".

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::lookup::{LookupController, SurfaceView, TriggerOutcome};

pub struct App<W: Write> {
    controller: LookupController,
    view: SurfaceView<W>,
    credential: Option<String>,
    verbose: bool,
}

impl<W: Write> App<W> {
    pub fn new(
        controller: LookupController,
        view: SurfaceView<W>,
        credential: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            controller,
            view,
            credential,
            verbose,
        }
    }

    /// Fire one trigger per identifier back to back, then wait for all of them
    pub async fn run_batch(&mut self, identifiers: &[String]) -> Result<()> {
        for identifier in identifiers {
            self.fire(identifier)?;
        }
        while self.controller.settle_next().await.is_some() {
            self.redraw()?;
        }
        Ok(())
    }

    /// Fire one trigger per input line until EOF, rendering outcomes as they land
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and still fire. A read
    /// error stops input, but every cycle already in flight is settled and drawn
    /// before the error is returned.
    pub async fn run_interactive<R>(&mut self, mut input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        // Partial reads stay in `line` across select! cancellation
        let mut line = Vec::new();
        let mut input_open = true;
        let mut read_error = None;

        while input_open || self.controller.in_flight() > 0 {
            tokio::select! {
                read = input.read_until(b'\n', &mut line), if input_open => {
                    match read {
                        Ok(0) => {
                            tracing::debug!("Input closed, {} lookup(s) in flight", self.controller.in_flight());
                            input_open = false;
                        }
                        Ok(_) => {
                            let identifier = decode_line(&line);
                            line.clear();
                            self.fire(&identifier)?;
                        }
                        Err(err) => {
                            tracing::error!("Failed to read input: {err}");
                            input_open = false;
                            read_error = Some(err);
                        }
                    }
                }
                Some(_) = self.controller.settle_next(), if self.controller.in_flight() > 0 => {
                    self.redraw()?;
                }
            }
        }

        match read_error {
            Some(err) => Err(err).context("Failed to read input"),
            None => Ok(()),
        }
    }

    fn fire(&mut self, identifier: &str) -> Result<()> {
        let outcome = self
            .controller
            .trigger(identifier, self.credential.as_deref());
        if let TriggerOutcome::Dispatched { descriptor, .. } = &outcome {
            if self.verbose {
                eprint!("{descriptor}");
            }
        }
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        self.view
            .draw(self.controller.banner(), self.controller.display())
            .context("Failed to draw output")
    }

    pub fn controller(&self) -> &LookupController {
        &self.controller
    }

    pub fn into_view(self) -> SurfaceView<W> {
        self.view
    }
}

/// One input line without its terminator, invalid UTF-8 replaced
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let std::borrow::Cow::Owned(_) = line {
        tracing::warn!("Input line is not valid UTF-8, invalid bytes replaced");
    }
    line.into_owned()
}
