pub mod config;
pub mod error;
pub mod guard;
pub mod nav;
pub mod role;
pub mod session;

// Portal screens' mock data
pub mod chat;
pub mod course;
pub mod dashboard;
pub mod grades;
pub mod login;
pub mod people;
pub mod schedule;

pub use config::*;
pub use error::*;
pub use guard::*;
pub use nav::*;
pub use role::*;
pub use session::*;

pub use chat::*;
pub use course::*;
pub use dashboard::*;
pub use grades::*;
pub use login::*;
pub use people::*;
pub use schedule::*;
