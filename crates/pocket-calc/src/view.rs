//! View sinks and the session that feeds them
//!
//! The accumulator does not know how it is shown. A front end implements
//! [`CalculatorView`] and hands it to a [`Session`], which owns the
//! accumulator and pushes the affected outputs after every event.

use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::core::{Accumulator, Event};

/// Output side of a front end
pub trait CalculatorView {
    /// Shows the operand text; `pulse` asks for the short "updated" highlight
    fn show_display(&mut self, text: &str, pulse: bool);

    /// Shows the pending operation (`"7 +"`) or clears it (`""`)
    fn show_pending(&mut self, text: &str);

    /// Shows the whole history list, newest first
    fn show_history(&mut self, entries: &[String]);

    /// Empties the history list
    fn clear_history(&mut self) {
        self.show_history(&[]);
    }
}

/// A view that may not be attached yet; updates are dropped while `None`
impl<V: CalculatorView> CalculatorView for Option<V> {
    fn show_display(&mut self, text: &str, pulse: bool) {
        if let Some(view) = self {
            view.show_display(text, pulse);
        }
    }

    fn show_pending(&mut self, text: &str) {
        if let Some(view) = self {
            view.show_pending(text);
        }
    }

    fn show_history(&mut self, entries: &[String]) {
        if let Some(view) = self {
            view.show_history(entries);
        }
    }

    fn clear_history(&mut self) {
        if let Some(view) = self {
            view.clear_history();
        }
    }
}

/// Everything a front end shows, captured at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Main display text
    pub display: String,
    /// Pending-operation line
    pub pending: String,
    /// History lines, newest first
    pub history: Vec<String>,
    /// Memory indicator (register is non-zero)
    pub memory: bool,
}

impl Snapshot {
    /// Captures the observable state of an accumulator
    #[must_use]
    pub fn of(acc: &Accumulator) -> Self {
        Self {
            display: acc.display().to_string(),
            pending: acc.pending_display(),
            history: acc.history().lines(),
            memory: acc.memory().is_set(),
        }
    }
}

/// An accumulator bound to a view
#[derive(Debug)]
pub struct Session<V> {
    accumulator: Accumulator,
    view: V,
}

impl<V: CalculatorView> Session<V> {
    /// Creates a session with a default accumulator and renders it once
    pub fn new(view: V) -> Self {
        Self::with_accumulator(Accumulator::new(), view)
    }

    /// Creates a session from a configuration
    pub fn with_config(config: &CalculatorConfig, view: V) -> Self {
        Self::with_accumulator(Accumulator::with_config(config), view)
    }

    /// Creates a session around an existing accumulator
    pub fn with_accumulator(accumulator: Accumulator, view: V) -> Self {
        let mut session = Self { accumulator, view };
        session.render_all();
        session
    }

    /// Applies an event and pushes what changed to the view
    pub fn dispatch(&mut self, event: Event) {
        let changes = self.accumulator.handle(event);

        if changes.display {
            self.view.show_display(self.accumulator.display(), true);
        }
        if changes.pending {
            let pending = self.accumulator.pending_display();
            self.view.show_pending(&pending);
        }
        if changes.history {
            if self.accumulator.history().is_empty() {
                self.view.clear_history();
            } else {
                self.view.show_history(&self.accumulator.history().lines());
            }
        }
    }

    /// Applies a sequence of events
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Pushes the full state to the view (no pulse)
    pub fn render_all(&mut self) {
        self.view.show_display(self.accumulator.display(), false);
        let pending = self.accumulator.pending_display();
        self.view.show_pending(&pending);
        self.view.show_history(&self.accumulator.history().lines());
    }

    /// Current observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.accumulator)
    }

    /// The accumulator
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// The view
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Splits the session back into its parts
    pub fn into_parts(self) -> (Accumulator, V) {
        (self.accumulator, self.view)
    }
}
