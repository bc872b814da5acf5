// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AppAction, CodeListing, CommonResult, DEBUG_APP_MOD, EngineSignal,
            EngineSignalSender, RunOutcome, SessionController, SessionOptions};

/// What the main event loop should do after an action or signal was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
    ExitMainEventLoop,
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub cols: u16,
    pub rows: u16,
}

#[derive(Debug)]
pub struct AppState {
    pub session: SessionController,
    pub code_listing: CodeListing,
    pub window_size: WindowSize,
    /// Shown in the status line until the next action. Set when an action was refused
    /// or a run failed.
    pub maybe_notice: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(
        options: SessionOptions,
        signal_sender: EngineSignalSender,
        window_size: WindowSize,
    ) -> Self {
        Self {
            session: SessionController::new(options, signal_sender),
            code_listing: CodeListing::default(),
            window_size,
            maybe_notice: None,
        }
    }

    /// Runs `action` against the session, if its control is enabled in the current
    /// phase. Disabled controls are refused with a notice and change nothing.
    pub fn apply_action(&mut self, action: AppAction) -> EventPropagation {
        DEBUG_APP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "AppState::apply_action", action = ?action);
        });

        let control = action.control();
        if !self.session.controls().is_enabled(control) {
            self.maybe_notice = Some(format!("{control} is disabled while sorting"));
            return EventPropagation::ConsumedRender;
        }

        self.maybe_notice = None;
        let result: CommonResult<()> = match action {
            AppAction::Exit => {
                self.session.stop_run();
                return EventPropagation::ExitMainEventLoop;
            }
            AppAction::SelectAlgorithm(algorithm) => {
                self.session.select_algorithm(algorithm)
            }
            AppAction::NextAlgorithm => {
                let next = self.session.selected_algorithm().next();
                self.session.select_algorithm(next)
            }
            AppAction::PrevAlgorithm => {
                let prev = self.session.selected_algorithm().prev();
                self.session.select_algorithm(prev)
            }
            AppAction::Start => {
                self.session.start_run();
                Ok(())
            }
            AppAction::Stop => {
                self.session.stop_run();
                Ok(())
            }
            AppAction::AdjustSpeed(delta) => {
                self.session.adjust_speed(delta);
                Ok(())
            }
            AppAction::AdjustBarCount(delta) => {
                self.session.adjust_bar_count(delta).map(|_| ())
            }
            AppAction::Shuffle => self.session.shuffle(),
            AppAction::Reset => self.session.reset(),
            AppAction::CycleCodeListing => {
                self.code_listing = self.code_listing.next();
                Ok(())
            }
        };

        if let Err(report) = result {
            // % is Display, ? is Debug.
            tracing::warn!(message = "Action refused", action = ?action, error = ?report);
            self.maybe_notice = Some(report.to_string());
        }
        EventPropagation::ConsumedRender
    }

    pub fn on_engine_signal(&mut self, signal: &EngineSignal) -> EventPropagation {
        match signal {
            EngineSignal::Step(_) => EventPropagation::ConsumedRender,
            EngineSignal::RunFinished(report) => {
                if !self.session.on_run_finished(report) {
                    return EventPropagation::Consumed;
                }
                if let RunOutcome::Failed(reason) = &report.outcome {
                    self.maybe_notice = Some(format!("{} failed: {reason}", report.algorithm));
                }
                EventPropagation::ConsumedRender
            }
        }
    }

    pub fn on_resize(&mut self, window_size: WindowSize) -> EventPropagation {
        self.window_size = window_size;
        EventPropagation::ConsumedRender
    }
}
