//! Status messages — the observable output of receivers and the remote.
//!
//! Every visible effect in the system is one of these messages. Sinks decide
//! how to present them: [`StatusMessage::render`] produces the human-readable
//! line, while the serde representation is used for machine-readable output.

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;
use crate::id::DeviceId;
use crate::language::Language;
use crate::power::PowerState;

/// One line of observable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatusMessage {
    /// Header introducing a block of presses aimed at one kind of device.
    Section { device: DeviceKind },
    /// A receiver performed an action and is now in `state`.
    Power {
        device_id: DeviceId,
        device: DeviceKind,
        state: PowerState,
    },
    /// Undo was pressed with an empty history.
    NothingToUndo,
    /// Blank line between sections.
    Separator,
}

impl StatusMessage {
    /// Shorthand for a [`Power`](Self::Power) announcement.
    #[must_use]
    pub fn power(device_id: DeviceId, device: DeviceKind, state: PowerState) -> Self {
        Self::Power {
            device_id,
            device,
            state,
        }
    }

    /// Human-readable line for this message, without a trailing newline.
    #[must_use]
    pub fn render(&self, language: Language) -> String {
        match self {
            Self::Section { device } => format!("=== {} ===", section_title(*device, language)),
            Self::Power { device, state, .. } => format!(
                "{} {}",
                device.icon(),
                power_sentence(*device, *state, language)
            ),
            Self::NothingToUndo => match language {
                Language::En => "\u{26d4} Nothing to undo.".to_string(),
                Language::Ru => "\u{26d4} Нет команд для отмены.".to_string(),
            },
            Self::Separator => String::new(),
        }
    }
}

fn section_title(device: DeviceKind, language: Language) -> &'static str {
    match (language, device) {
        (Language::En, DeviceKind::Light) => "Light control",
        (Language::En, DeviceKind::Television) => "Television control",
        (Language::Ru, DeviceKind::Light) => "Управление светом",
        (Language::Ru, DeviceKind::Television) => "Управление телевизором",
    }
}

fn power_sentence(device: DeviceKind, state: PowerState, language: Language) -> &'static str {
    match (language, device, state) {
        (Language::En, DeviceKind::Light, PowerState::On) => "Light is on.",
        (Language::En, DeviceKind::Light, PowerState::Off) => "Light is off.",
        (Language::En, DeviceKind::Television, PowerState::On) => "Television is on.",
        (Language::En, DeviceKind::Television, PowerState::Off) => "Television is off.",
        (Language::Ru, DeviceKind::Light, PowerState::On) => "Свет включен.",
        (Language::Ru, DeviceKind::Light, PowerState::Off) => "Свет выключен.",
        (Language::Ru, DeviceKind::Television, PowerState::On) => "Телевизор включен.",
        (Language::Ru, DeviceKind::Television, PowerState::Off) => "Телевизор выключен.",
    }
}
