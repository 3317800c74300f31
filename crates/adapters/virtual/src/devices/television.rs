//! Virtual television — responds to `turn_on` and `turn_off`.

use homeremote_app::ports::StatusSink;
use homeremote_domain::device::{DeviceKind, Switchable};
use homeremote_domain::id::DeviceId;
use homeremote_domain::power::PowerState;

/// A simulated television.
pub struct VirtualTelevision<S> {
    id: DeviceId,
    sink: S,
}

impl<S: StatusSink> VirtualTelevision<S> {
    /// Create a television with a fresh identity that reports through `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            id: DeviceId::new(),
            sink,
        }
    }
}

impl<S: StatusSink> Switchable for VirtualTelevision<S> {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Television
    }

    fn turn_on(&self) {
        super::announce(&self.sink, self.id, DeviceKind::Television, PowerState::On);
    }

    fn turn_off(&self) {
        super::announce(&self.sink, self.id, DeviceKind::Television, PowerState::Off);
    }
}
