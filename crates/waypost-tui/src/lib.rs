pub mod app;
pub mod backend;
pub mod contacts_file;
pub mod input;
pub mod render;
pub mod runtime;
pub mod ui;

pub use app::App;
pub use backend::ContactsBackend;
