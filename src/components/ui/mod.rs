pub mod button;
pub mod label;
pub mod panel;
pub mod suggestion_menu;

// Re-export component symbols so callers can `use crate::components::ui::Panel` etc.
pub use button::*;
pub use label::*;
#[allow(unused_imports)]
pub use panel::*;
pub use suggestion_menu::*;
