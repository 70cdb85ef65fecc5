pub mod briefing;
pub mod config;
pub mod http;
pub mod template;

pub use briefing::{process_item, BriefingItem};
pub use config::{Config, FlashBriefingsConfig};
pub use http::{create_router, AppState};
pub use template::ItemValue;
