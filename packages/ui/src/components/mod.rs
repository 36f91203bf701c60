//! Small form primitives shared by every page.

mod button;
mod input;

pub use button::{Button, ButtonVariant};
pub use input::{Input, Label, TextArea};
