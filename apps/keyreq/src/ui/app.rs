use std::io::{self, Write};

use client_core::{ClipboardSink, FeedbackController};
use crossbeam_channel::{never, select, Receiver, Sender};
use tracing::info;
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::input::{parse_input, InputAction};
use crate::ui::render::render_alert;

const TITLE: &str = "Get API key";
const HELP: &str = "Type your email address and press Enter. \
Commands: :copy, :dismiss, :docs, :help, :quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct KeyRequestApp<W: Write> {
    controller: FeedbackController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    clipboard: Box<dyn ClipboardSink>,
    docs_url: Url,
    status: String,
    in_flight: usize,
    out: W,
}

impl<W: Write> KeyRequestApp<W> {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        clipboard: Box<dyn ClipboardSink>,
        docs_url: Url,
        out: W,
    ) -> Self {
        Self {
            controller: FeedbackController::new(),
            cmd_tx,
            ui_rx,
            clipboard,
            docs_url,
            status: String::new(),
            in_flight: 0,
            out,
        }
    }

    /// Drives the session until `:quit`, or until input closes and every
    /// outstanding request has been answered.
    pub fn run(&mut self, input_rx: Receiver<String>) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{HELP}")?;

        let mut input_rx = input_rx;
        let mut input_open = true;
        let ui_rx = self.ui_rx.clone();
        loop {
            let flow = select! {
                recv(input_rx) -> line => match line {
                    Ok(line) => self.handle_input(&line)?,
                    Err(_) => {
                        input_open = false;
                        Flow::Continue
                    }
                },
                recv(ui_rx) -> event => match event {
                    Ok(event) => {
                        self.apply_event(event)?;
                        Flow::Continue
                    }
                    Err(_) => Flow::Quit,
                },
            };
            if flow == Flow::Quit {
                break;
            }

            if !input_open {
                if self.in_flight == 0 {
                    break;
                }
                input_rx = never();
            }
        }
        self.out.flush()
    }

    pub fn handle_input(&mut self, line: &str) -> io::Result<Flow> {
        match parse_input(line, self.controller.is_acknowledgeable()) {
            InputAction::Submit(email) => self.submit(email)?,
            InputAction::Rejected => {
                self.controller.on_validation_rejected();
                self.render()?;
            }
            InputAction::Acknowledge => {
                if self.controller.on_acknowledge(self.clipboard.as_mut()) {
                    self.render()?;
                } else {
                    writeln!(self.out, "No API key to copy")?;
                }
            }
            InputAction::Dismiss => self.controller.dismiss(),
            InputAction::Docs => writeln!(self.out, "Docs: {}", self.docs_url)?,
            InputAction::Help => writeln!(self.out, "{HELP}")?,
            InputAction::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn submit(&mut self, email: String) -> io::Result<()> {
        self.controller.begin_submission();
        info!("submitting api key request");
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::RequestApiKey { email },
            &mut self.status,
        ) {
            self.in_flight += 1;
            writeln!(self.out, "Requesting API key...")
        } else {
            writeln!(self.out, "{}", self.status)
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) -> io::Result<()> {
        match event {
            UiEvent::IssuanceCompleted { email, outcome } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.controller.apply_outcome(&email, outcome);
                self.render()
            }
            UiEvent::Error(message) => {
                tracing::error!("{message}");
                self.status = message;
                writeln!(self.out, "error: {}", self.status)
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        if let Some(alert) = self.controller.alert() {
            let line = render_alert(alert, self.controller.is_acknowledgeable());
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
