pub mod format;
pub mod layout;
pub mod list_navigation;
pub mod path;

pub use format::{format_date, format_optional_date, format_price, months_label, short_id};
pub use layout::{center_popup, create_split_layout, create_standard_layout};
pub use list_navigation::ListStateExt;
pub use path::{
    expand_path, get_config_dir, get_config_path, get_credentials_path, get_home_dir, get_log_dir,
};
