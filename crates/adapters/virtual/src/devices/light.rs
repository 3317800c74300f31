//! Virtual light — responds to `turn_on` and `turn_off`.

use homeremote_app::ports::StatusSink;
use homeremote_domain::device::{DeviceKind, Switchable};
use homeremote_domain::id::DeviceId;
use homeremote_domain::power::PowerState;

/// A simulated light.
pub struct VirtualLight<S> {
    id: DeviceId,
    sink: S,
}

impl<S: StatusSink> VirtualLight<S> {
    /// Create a light with a fresh identity that reports through `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            id: DeviceId::new(),
            sink,
        }
    }
}

impl<S: StatusSink> Switchable for VirtualLight<S> {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Light
    }

    fn turn_on(&self) {
        super::announce(&self.sink, self.id, DeviceKind::Light, PowerState::On);
    }

    fn turn_off(&self) {
        super::announce(&self.sink, self.id, DeviceKind::Light, PowerState::Off);
    }
}
