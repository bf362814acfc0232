// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod section;
pub mod stat_card;

// Primitive wrappers
pub mod avatar;
pub mod progress;
pub mod toast;

// Layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use search_bar::*;
pub use section::*;
pub use sidebar::*;
pub use stat_card::*;
pub use toast::*;
