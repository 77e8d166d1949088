pub mod buffer;
pub mod element;
pub mod event;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{translate, Event, Key, Modifiers};
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use text_input::{TextEditResult, TextInputData, TextInputState};
pub use types::*;
