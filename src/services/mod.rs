// Service exports
pub mod appwrite;
pub mod cache;
pub mod memory;
pub mod store;

pub use appwrite::AppwriteClient;
pub use cache::{CacheManager, CacheKey, CacheError};
pub use memory::InMemorySurveyStore;
pub use store::{StoreError, SurveyStore};
