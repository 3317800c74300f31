//! Remote control — the invoker.
//!
//! The remote holds one command per button and a history of the commands it
//! executed. It never talks to devices directly: it only calls
//! [`Command::execute`] and [`Command::undo`].

use std::rc::Rc;

use homeremote_domain::command::{Command, CommandPair};
use homeremote_domain::status::StatusMessage;

use crate::ports::StatusSink;

/// A bindable button on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    On,
    Off,
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// Invoker with an on slot, an off slot and an undo stack.
///
/// Pressing an unbound button does nothing and records nothing. Undo pops the
/// most recent command and reverses it; the popped command is gone for good,
/// so repeated undos walk further back.
pub struct RemoteControl<S> {
    on_command: Option<Rc<dyn Command>>,
    off_command: Option<Rc<dyn Command>>,
    history: Vec<Rc<dyn Command>>,
    sink: S,
}

impl<S: StatusSink> RemoteControl<S> {
    /// Create a remote with both buttons unbound, reporting through `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            on_command: None,
            off_command: None,
            history: Vec::new(),
            sink,
        }
    }

    /// Bind both buttons, replacing whatever was bound before.
    ///
    /// Nothing checks that `off` actually reverses `on`; that is up to the
    /// caller. History is left untouched.
    #[tracing::instrument(skip_all, fields(on = %on, off = %off))]
    pub fn set_commands(&mut self, on: Rc<dyn Command>, off: Rc<dyn Command>) {
        self.on_command = Some(on);
        self.off_command = Some(off);
    }

    /// Bind a device's on/off pair.
    pub fn bind(&mut self, pair: &CommandPair) {
        self.set_commands(Rc::clone(&pair.on), Rc::clone(&pair.off));
    }

    #[tracing::instrument(skip(self))]
    pub fn press_on(&mut self) {
        self.press(Button::On);
    }

    #[tracing::instrument(skip(self))]
    pub fn press_off(&mut self) {
        self.press(Button::Off);
    }

    /// Undo the most recently executed command, or announce that there is
    /// nothing to undo.
    #[tracing::instrument(skip(self))]
    pub fn press_undo(&mut self) {
        match self.history.pop() {
            Some(command) => {
                tracing::debug!(%command, remaining = self.history.len(), "undoing");
                command.undo();
            }
            None => {
                tracing::debug!("history is empty");
                self.sink.publish(StatusMessage::NothingToUndo);
            }
        }
    }

    /// Number of commands that can still be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether `button` currently has a command bound.
    #[must_use]
    pub fn is_bound(&self, button: Button) -> bool {
        self.slot(button).is_some()
    }

    fn slot(&self, button: Button) -> Option<&Rc<dyn Command>> {
        match button {
            Button::On => self.on_command.as_ref(),
            Button::Off => self.off_command.as_ref(),
        }
    }

    fn press(&mut self, button: Button) {
        let Some(command) = self.slot(button).cloned() else {
            tracing::debug!(%button, "button has no command bound");
            return;
        };
        command.execute();
        self.history.push(command);
    }
}
