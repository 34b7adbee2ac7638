pub mod add;
pub mod config;
pub mod list;
pub mod remove;
pub mod zones;

pub use add::handle_add;
pub use config::handle_config;
pub use list::handle_list;
pub use remove::handle_remove;
pub use zones::handle_zones;
