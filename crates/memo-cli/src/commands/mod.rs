pub mod add;
pub mod auth_cmd;
pub mod common;
pub mod config_cmd;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;
