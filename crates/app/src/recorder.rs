//! In-process status sink that keeps every message in memory.
//!
//! Useful wherever output has to be inspected rather than printed: tests,
//! or embedding the remote in another program.

use std::cell::RefCell;

use homeremote_domain::id::DeviceId;
use homeremote_domain::power::PowerState;
use homeremote_domain::status::StatusMessage;

use crate::ports::StatusSink;

/// Records published messages in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<StatusMessage>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<StatusMessage> {
        self.messages.borrow().clone()
    }

    /// Number of messages published so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Number of published messages equal to `message`.
    #[must_use]
    pub fn count(&self, message: &StatusMessage) -> usize {
        self.messages.borrow().iter().filter(|m| *m == message).count()
    }

    /// The state announced by the device's most recent power message.
    ///
    /// This is the device's observable state; `None` means it never spoke.
    #[must_use]
    pub fn last_state(&self, device_id: DeviceId) -> Option<PowerState> {
        self.messages.borrow().iter().rev().find_map(|m| match m {
            StatusMessage::Power {
                device_id: id,
                state,
                ..
            } if *id == device_id => Some(*state),
            _ => None,
        })
    }
}

impl StatusSink for RecordingSink {
    fn publish(&self, message: StatusMessage) {
        self.messages.borrow_mut().push(message);
    }
}
