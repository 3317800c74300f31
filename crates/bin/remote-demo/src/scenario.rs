//! The canonical demo: drive a light, then a television, from one remote.

use std::rc::Rc;

use homeremote_adapter_virtual::{VirtualLight, VirtualTelevision};
use homeremote_app::ports::StatusSink;
use homeremote_app::remote_control::RemoteControl;
use homeremote_domain::command::CommandPair;
use homeremote_domain::device::{DeviceKind, Switchable};
use homeremote_domain::id::DeviceId;
use homeremote_domain::status::StatusMessage;

/// What the demo left behind, for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOutcome {
    pub light: DeviceId,
    pub television: DeviceId,
    /// Commands still on the remote's undo stack.
    pub remaining_history: usize,
}

/// Run the demo, reporting everything through `sink`.
///
/// For each device in turn: print a header, bind its on/off commands, press
/// on, press off, press undo. Both devices end up on.
pub fn run<S>(sink: S) -> DemoOutcome
where
    S: StatusSink + Clone + 'static,
{
    let light = Rc::new(VirtualLight::new(sink.clone()));
    let television = Rc::new(VirtualTelevision::new(sink.clone()));
    let light_commands = CommandPair::power(&light);
    let television_commands = CommandPair::power(&television);

    let mut remote = RemoteControl::new(sink.clone());

    sink.publish(StatusMessage::Section {
        device: DeviceKind::Light,
    });
    remote.bind(&light_commands);
    on_off_undo(&mut remote);

    sink.publish(StatusMessage::Separator);

    sink.publish(StatusMessage::Section {
        device: DeviceKind::Television,
    });
    remote.bind(&television_commands);
    on_off_undo(&mut remote);

    DemoOutcome {
        light: light.id(),
        television: television.id(),
        remaining_history: remote.history_len(),
    }
}

fn on_off_undo<S: StatusSink>(remote: &mut RemoteControl<S>) {
    remote.press_on();
    remote.press_off();
    remote.press_undo();
}
