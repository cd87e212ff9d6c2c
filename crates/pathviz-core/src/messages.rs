//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::geom::Point;

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    /// A printable character.
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("Up"),
            Key::ArrowDown => f.write_str("Down"),
            Key::ArrowLeft => f.write_str("Left"),
            Key::ArrowRight => f.write_str("Right"),
            Key::Escape => f.write_str("Esc"),
            Key::Enter => f.write_str("Enter"),
            Key::Tab => f.write_str("Tab"),
            Key::Space => f.write_str("Space"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Pointer moved, possibly while a button is held.
    Move,
}

/// A message delivered to the application model.
#[derive(Clone, Debug)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key, time: Instant },
    /// A mouse event at a screen position.
    Mouse {
        action: MouseAction,
        pos: Point,
        time: Instant,
    },
    /// The terminal was resized.
    Screen { rows: i32, cols: i32, time: Instant },
    /// Sent once when the application starts.
    Init,
    /// Request to quit.
    Quit,
    /// An application-defined message, typically produced by an
    /// [`Effect::Cmd`](crate::Effect::Cmd).
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Msg {
    /// Convenience: a `KeyDown` stamped now.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            time: Instant::now(),
        }
    }

    /// Convenience: a `Mouse` event stamped now.
    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse {
            action,
            pos,
            time: Instant::now(),
        }
    }

    /// Wrap an application value into a [`Msg::Custom`].
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Borrow the payload of a [`Msg::Custom`] if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(v) => v.downcast_ref::<T>(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tick(u64);

    #[test]
    fn custom_downcast() {
        let msg = Msg::custom(Tick(3));
        assert_eq!(msg.downcast_ref::<Tick>(), Some(&Tick(3)));
        assert!(msg.downcast_ref::<u64>().is_none());
        assert!(Msg::Init.downcast_ref::<Tick>().is_none());
    }

    #[test]
    fn key_display() {
        assert_eq!(Key::Char('?').to_string(), "?");
        assert_eq!(Key::Space.to_string(), "Space");
    }
}
