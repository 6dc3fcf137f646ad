pub mod connection;
#[cfg(test)]
pub mod memory_store;
pub mod mongo_store;
pub mod store;
