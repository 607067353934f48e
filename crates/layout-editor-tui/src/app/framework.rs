//! Application framework with App trait and runner

use crate::buffer::Buffer;
use crate::event::{Event, EventLoop, EventResult};
use crate::geometry::Rect;
use crate::terminal::Terminal;
use std::io;

/// Consecutive event read failures tolerated before `run` gives up
const MAX_READ_FAILURES: u32 = 32;

/// Application trait for implementing TUI apps
///
/// The runner owns the terminal and the event loop; an app only reacts to
/// events and renders its state into a buffer.
pub trait App {
    /// Application state type
    type State;

    /// Handle an event and update state
    fn handle_event(&mut self, event: Event, state: &mut Self::State) -> EventResult;

    /// Render the UI to a buffer
    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer);
}

/// Application runner that manages the terminal and event loop
pub struct AppRunner<A: App> {
    app: A,
    terminal: Terminal,
    event_loop: EventLoop,
}

impl<A: App> AppRunner<A> {
    /// Create a new app runner
    pub fn new(app: A) -> io::Result<Self> {
        Ok(Self {
            app,
            terminal: Terminal::new()?,
            event_loop: EventLoop::new(),
        })
    }

    /// Run the application until it asks to quit
    ///
    /// Returns the final state. The terminal is restored even when an error
    /// is propagated.
    pub fn run(&mut self, mut state: A::State) -> io::Result<A::State> {
        let _raw_guard = self.terminal.enter_raw_mode()?;

        self.render(&state)?;
        let mut failures = ReadFailures::default();

        loop {
            let event = match self.event_loop.next() {
                Ok(event) => {
                    failures.reset();
                    event
                }
                Err(err) => {
                    failures.record(err)?;
                    continue;
                }
            };

            if event.is_resize() {
                self.terminal.refresh_size()?;
                self.terminal.invalidate();
            }

            match self.app.handle_event(event, &mut state) {
                EventResult::Quit => break,
                EventResult::Repaint => self.terminal.invalidate(),
                EventResult::Consumed | EventResult::Ignored => {}
            }

            self.render(&state)?;
        }

        Ok(state)
    }

    /// Render the current state
    fn render(&mut self, state: &A::State) -> io::Result<()> {
        let area = self.terminal.full_rect();
        let mut buf = Buffer::new(area);

        self.app.render(state, area, &mut buf);
        self.terminal.draw(&buf)
    }
}

/// Run of back-to-back event read errors
#[derive(Debug, Default)]
struct ReadFailures(u32);

impl ReadFailures {
    /// Note one failure, handing the error back once the limit is reached
    fn record(&mut self, err: io::Error) -> io::Result<()> {
        self.0 += 1;
        if self.0 >= MAX_READ_FAILURES {
            tracing::warn!(error = %err, failures = self.0, "Giving up reading terminal events");
            return Err(err);
        }
        tracing::debug!(error = %err, failures = self.0, "Failed to read terminal event");
        Ok(())
    }

    fn reset(&mut self) {
        self.0 = 0;
    }
}
