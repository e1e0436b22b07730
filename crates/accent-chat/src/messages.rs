#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    /// Position in the conversation; also scales the recolor delay.
    pub id: u32,
    pub from: Sender,
    pub text: &'static str,
}

impl Message {
    pub const fn new(id: u32, from: Sender, text: &'static str) -> Self {
        Self { id, from, text }
    }

    pub fn is_mine(&self) -> bool {
        self.from == Sender::Me
    }
}

/// The canned conversation shown on the chat screen.
pub static MESSAGES: &[Message] = &[
    Message::new(0, Sender::Them, "Hey! Did you get a chance to look at the new app?"),
    Message::new(1, Sender::Me, "Yes, just now. The chat screen feels really smooth."),
    Message::new(2, Sender::Them, "Try the settings button in the top right corner."),
    Message::new(3, Sender::Me, "Oh nice, a sheet with colors."),
    Message::new(4, Sender::Me, "And I can drag it down to dismiss it!"),
    Message::new(5, Sender::Them, "Pick a color and watch your messages."),
    Message::new(6, Sender::Me, "They change one after another. Love it."),
    Message::new(7, Sender::Them, "The text flips to black on light colors, too."),
    Message::new(8, Sender::Me, "So it stays readable on yellow. Clever."),
];
