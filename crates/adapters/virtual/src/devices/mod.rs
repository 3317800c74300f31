//! Virtual device implementations — light, television.
//!
//! Both devices are stateless apart from their identity: every action is
//! performed unconditionally and announced through the device's sink.

mod light;
mod television;

pub use light::VirtualLight;
pub use television::VirtualTelevision;

use homeremote_app::ports::StatusSink;
use homeremote_domain::device::DeviceKind;
use homeremote_domain::id::DeviceId;
use homeremote_domain::power::PowerState;
use homeremote_domain::status::StatusMessage;

fn announce(sink: &impl StatusSink, id: DeviceId, kind: DeviceKind, state: PowerState) {
    tracing::debug!(device_id = %id, device = %kind, %state, "device switched");
    sink.publish(StatusMessage::power(id, kind, state));
}
