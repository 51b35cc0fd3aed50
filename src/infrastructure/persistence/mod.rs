pub mod file_store;
pub mod redis_store;

pub use file_store::FileCredentialStore;
pub use redis_store::RedisCredentialStore;
