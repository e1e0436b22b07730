//! Testing utilities and harness for Accent Chat

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use accent_chat::{ChatOptions, ChatScreen, ScreenEvent};
    pub use accent_sheet::{SheetConfig, SheetEvent, SheetMotion, SheetState};
}
