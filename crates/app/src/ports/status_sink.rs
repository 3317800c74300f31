//! Status sink port — where receivers and the remote report what they did.

use std::rc::Rc;

use homeremote_domain::status::StatusMessage;

/// Destination for observable output.
///
/// Publishing is infallible from the caller's point of view: a sink that
/// cannot deliver a message (e.g. a closed stdout) deals with it internally.
pub trait StatusSink {
    /// Deliver one status message.
    fn publish(&self, message: StatusMessage);
}

impl<T: StatusSink + ?Sized> StatusSink for Rc<T> {
    fn publish(&self, message: StatusMessage) {
        (**self).publish(message);
    }
}

impl<T: StatusSink + ?Sized> StatusSink for &T {
    fn publish(&self, message: StatusMessage) {
        (**self).publish(message);
    }
}
