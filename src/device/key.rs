/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Key {
    Quit,
    Start,
}

impl Key {
    /// Parse a raw key code as returned by a window toolkit. Only the low
    /// byte is significant; negative codes mean no key was pressed.
    pub fn parse(code: i32) -> Option<Self> {
        if code < 0 {
            return None;
        }
        match (code & 0xFF) as u8 {
            b'q' | b'Q' => Some(Self::Quit),
            b' ' => Some(Self::Start),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Quit => write!(f, "quit"),
            Self::Start => write!(f, "start"),
        }
    }
}
