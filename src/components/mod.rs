// Reusable screen pieces for the roomrent TUI

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod message_box;
pub mod request_card;
pub mod room_summary;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use message_box::MessageBox;
pub use request_card::{status_badge, RequestCard};
