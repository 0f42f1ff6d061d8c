pub mod items;
pub mod not_found;
pub mod root;

pub use items::item_handler;
pub use not_found::not_found_handler;
pub use root::root_handler;
