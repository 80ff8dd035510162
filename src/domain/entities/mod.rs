pub mod ai_response;
pub mod conversation;
pub mod message;
pub mod user;

pub use ai_response::*;
pub use conversation::*;
pub use message::*;
pub use user::*;
