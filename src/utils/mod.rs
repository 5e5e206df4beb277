//! 通用工具
pub mod preview;
pub mod timestamp;

pub use self::preview::preview_title;
pub use self::timestamp::{is_newer, parse_timestamp};
