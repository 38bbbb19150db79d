pub mod item;
pub mod layout;
pub mod model;
pub mod render;
pub mod state;

pub use item::{display_title, ActionEntry, MenuEntry, MenuTree};
pub use layout::{layout_codes, MenuSettings};
pub use model::{MenuModel, MenuServices};
pub use state::MenuState;
