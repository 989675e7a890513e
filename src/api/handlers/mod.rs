//! HTTP API request handlers, grouped by resource.

mod cases;
mod items;
mod stats;
mod system;
mod users;

pub use cases::{list_cases, save_cases};
pub use items::list_items;
pub use stats::get_stats;
pub use system::banner;
pub use users::{list_users, save_user, set_balance, touch_user};
