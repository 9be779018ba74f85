//! Input mapping
//!
//! Hosts translate their native events into `InputEvent`; the carousel only
//! cares about pointer-down and Space key-up.

/// Keys the carousel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown,
    KeyUp { key: Key, ctrl: bool },
}

/// What an event asks the carousel to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Start rotating if stopped, stop if rotating
    ToggleRotation,
    /// Stop everything and restore the static enabled layout
    ForceStatic,
    None,
}

/// Map a host event to a carousel command
pub fn map_input(event: InputEvent) -> InputCommand {
    match event {
        InputEvent::PointerDown => InputCommand::ToggleRotation,
        InputEvent::KeyUp {
            key: Key::Space,
            ctrl: true,
        } => InputCommand::ForceStatic,
        InputEvent::KeyUp {
            key: Key::Space,
            ctrl: false,
        } => InputCommand::ToggleRotation,
        InputEvent::KeyUp { .. } => InputCommand::None,
    }
}
