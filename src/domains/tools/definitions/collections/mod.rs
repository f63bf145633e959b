pub mod count;
pub mod list;
pub mod query;

pub use count::{CountDocumentsArgs, CountDocumentsTool};
pub use list::{ListCollectionsArgs, ListCollectionsTool};
pub use query::{QueryCollectionArgs, QueryCollectionTool};
