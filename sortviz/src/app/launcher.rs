// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Stdout, stdout};

use crossterm::{cursor::{Hide, Show},
                event::{Event, EventStream},
                execute,
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use futures_util::{FutureExt, StreamExt};

use crate::{AppAction, AppState, CommonResult, DEBUG_APP_MOD, EngineSignalReceiver,
            EventPropagation, SessionOptions, SortVizError, WindowSize,
            new_engine_signal_channel, paint, render_app, throws_with_return};

/// Raw mode and the alternate screen, for as long as this is alive. Dropping it puts the
/// terminal back the way it was, on every exit path including errors and panics that
/// unwind through the main event loop.
#[derive(Debug)]
pub struct RawMode {
    stdout: Stdout,
}

impl RawMode {
    /// # Errors
    ///
    /// Returns [`SortVizError::Terminal`] if raw mode can't be entered.
    pub fn start() -> CommonResult<Self> {
        terminal::enable_raw_mode().map_err(|source| SortVizError::Terminal {
            context: "enable raw mode",
            source,
        })?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, Hide).map_err(|source| {
            SortVizError::Terminal {
                context: "enter alternate screen",
                source,
            }
        })?;
        Ok(Self { stdout })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        execute!(self.stdout, Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

/// Runs the app until the user exits. Returns the options the session ended with, so
/// they can be saved.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up or painted to.
pub async fn run_app(options: SessionOptions) -> CommonResult<SessionOptions> {
    throws_with_return!({
        let (cols, rows) = terminal::size().map_err(|source| SortVizError::Terminal {
            context: "get terminal size",
            source,
        })?;
        let (signal_sender, signal_receiver) = new_engine_signal_channel();
        let mut state = AppState::new(options, signal_sender, WindowSize { cols, rows });

        let mut raw_mode = RawMode::start()?;
        main_event_loop(&mut state, signal_receiver, &mut raw_mode).await?;
        drop(raw_mode);

        state.session.options()
    })
}

async fn main_event_loop(
    state: &mut AppState,
    mut signal_receiver: EngineSignalReceiver,
    raw_mode: &mut RawMode,
) -> CommonResult<()> {
    let mut event_stream = EventStream::new();
    render(state, raw_mode)?;

    tracing::info!(message = "main_event_loop -> Startup 🚀");

    loop {
        let propagation = tokio::select! {
            // Cancel safe, since recv is cancel safe.
            maybe_signal = signal_receiver.recv() => {
                // The controller holds a sender, so the channel never closes here.
                let Some(signal) = maybe_signal else { break };
                let mut propagation = state.on_engine_signal(&signal);
                // Coalesce whatever else is already queued into a single render.
                while let Ok(signal) = signal_receiver.try_recv() {
                    if state.on_engine_signal(&signal) == EventPropagation::ConsumedRender {
                        propagation = EventPropagation::ConsumedRender;
                    }
                }
                propagation
            }

            // Cancel safe, since no state is held inside the future.
            maybe_event = event_stream.next().fuse() => {
                match maybe_event {
                    Some(Ok(event)) => handle_terminal_event(state, event),
                    Some(Err(error)) => {
                        // % is Display, ? is Debug.
                        tracing::error!(message = "Could not read terminal event", error = ?error);
                        EventPropagation::Consumed
                    }
                    // Input is gone, nothing more can happen.
                    None => EventPropagation::ExitMainEventLoop,
                }
            }
        };

        match propagation {
            EventPropagation::ConsumedRender => render(state, raw_mode)?,
            EventPropagation::Consumed | EventPropagation::Propagate => {}
            EventPropagation::ExitMainEventLoop => break,
        }
    }

    state.session.stop_run();
    tracing::info!(message = "main_event_loop -> Shutdown 🛑");
    Ok(())
}

fn handle_terminal_event(state: &mut AppState, event: Event) -> EventPropagation {
    match event {
        Event::Key(key_event) => match AppAction::try_from(key_event) {
            Ok(action) => state.apply_action(action),
            Err(()) => EventPropagation::Propagate,
        },
        Event::Resize(cols, rows) => {
            DEBUG_APP_MOD.then(|| {
                tracing::debug!(message = "main_event_loop -> Resize", cols, rows);
            });
            state.on_resize(WindowSize { cols, rows })
        }
        _ => EventPropagation::Propagate,
    }
}

fn render(state: &AppState, raw_mode: &mut RawMode) -> CommonResult<()> {
    paint(&render_app(state), &mut raw_mode.stdout)
}
