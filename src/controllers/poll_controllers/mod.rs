pub mod cast_vote;
pub mod get_poll;
pub mod get_results;
pub mod models;
pub mod polls;
