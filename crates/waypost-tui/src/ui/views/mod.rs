pub mod close_friends;
pub mod contacts;

pub use close_friends::render_close_friends_picker;
pub use contacts::render_contacts;
