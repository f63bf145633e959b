pub mod recent;
pub mod search;

pub use recent::{RecentConversationsArgs, RecentConversationsTool};
pub use search::{SearchConversationsArgs, SearchConversationsTool};
