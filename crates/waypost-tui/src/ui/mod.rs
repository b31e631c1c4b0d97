pub mod close_friends;
pub mod components;
pub mod selector;
pub mod terminal;
pub mod theme;
pub mod views;

pub use terminal::Tui;
