//! Command — an action bound to one receiver, together with its inverse.
//!
//! The remote control only ever sees `Rc<dyn Command>`; it never learns which
//! device sits behind a button. Each concrete command owns a shared handle to
//! exactly one receiver, so the on- and off-command of a device point at the
//! same instance.

use std::fmt;
use std::rc::Rc;

use crate::device::Switchable;

/// An executable, undoable action.
///
/// `Display` gives a short description used in logs, e.g. `turn_on(light)`.
pub trait Command: fmt::Display {
    /// Perform the forward action on the bound receiver.
    fn execute(&self);

    /// Perform the inverse of [`execute`](Self::execute) on the bound receiver.
    fn undo(&self);
}

/// Turns its receiver on; undo turns it off.
pub struct TurnOn<D> {
    device: Rc<D>,
}

impl<D: Switchable> TurnOn<D> {
    /// Bind a turn-on command to `device`.
    #[must_use]
    pub fn new(device: Rc<D>) -> Self {
        Self { device }
    }
}

impl<D: Switchable> Command for TurnOn<D> {
    fn execute(&self) {
        tracing::debug!(device_id = %self.device.id(), command = %self, "execute");
        self.device.turn_on();
    }

    fn undo(&self) {
        tracing::debug!(device_id = %self.device.id(), command = %self, "undo");
        self.device.turn_off();
    }
}

impl<D: Switchable> fmt::Display for TurnOn<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn_on({})", self.device.kind())
    }
}

/// Turns its receiver off; undo turns it back on.
pub struct TurnOff<D> {
    device: Rc<D>,
}

impl<D: Switchable> TurnOff<D> {
    /// Bind a turn-off command to `device`.
    #[must_use]
    pub fn new(device: Rc<D>) -> Self {
        Self { device }
    }
}

impl<D: Switchable> Command for TurnOff<D> {
    fn execute(&self) {
        tracing::debug!(device_id = %self.device.id(), command = %self, "execute");
        self.device.turn_off();
    }

    fn undo(&self) {
        tracing::debug!(device_id = %self.device.id(), command = %self, "undo");
        self.device.turn_on();
    }
}

impl<D: Switchable> fmt::Display for TurnOff<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn_off({})", self.device.kind())
    }
}

/// The on/off command pair of a single receiver, ready to bind to a remote.
pub struct CommandPair {
    pub on: Rc<dyn Command>,
    pub off: Rc<dyn Command>,
}

impl CommandPair {
    /// Build [`TurnOn`] and [`TurnOff`] commands sharing `device`.
    #[must_use]
    pub fn power<D: Switchable + 'static>(device: &Rc<D>) -> Self {
        Self {
            on: Rc::new(TurnOn::new(Rc::clone(device))),
            off: Rc::new(TurnOff::new(Rc::clone(device))),
        }
    }
}
