//! # Surface View
//!
//! Draws the banner and display area onto any writer, either as plain
//! (optionally coloured) text or as one JSON object per redraw.

use std::io::Write;

use anyhow::Result;
use crossterm::style::Stylize;
use serde::Serialize;

use super::banner::{BannerState, Severity, StatusBanner};
use super::display::DisplayArea;
use crate::cmd_args::OutputFormat;

#[derive(Serialize)]
struct Snapshot<'a> {
    banner: &'a BannerState,
    display: &'a str,
}

pub struct SurfaceView<W: Write> {
    out: W,
    format: OutputFormat,
    color: bool,
}

impl<W: Write> SurfaceView<W> {
    pub fn new(out: W, format: OutputFormat, color: bool) -> Self {
        Self { out, format, color }
    }

    pub fn draw(&mut self, banner: &StatusBanner, display: &DisplayArea) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.draw_text(banner, display)?,
            OutputFormat::Json => self.draw_json(banner, display)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn draw_text(&mut self, banner: &StatusBanner, display: &DisplayArea) -> Result<()> {
        if banner.is_visible() {
            let severity = banner.severity().unwrap_or(Severity::Info);
            let line = format!("[{}] {}", severity.label(), banner.message());
            if self.color {
                let styled = match severity {
                    Severity::Info => line.as_str().blue(),
                    Severity::Success => line.as_str().green(),
                    Severity::Error => line.as_str().red(),
                };
                writeln!(self.out, "{styled}")?;
            } else {
                writeln!(self.out, "{line}")?;
            }
        }
        if !display.text().is_empty() {
            writeln!(self.out, "{}", display.text())?;
        }
        Ok(())
    }

    fn draw_json(&mut self, banner: &StatusBanner, display: &DisplayArea) -> Result<()> {
        let snapshot = Snapshot {
            banner: banner.state(),
            display: display.text(),
        };
        serde_json::to_writer(&mut self.out, &snapshot)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
