pub mod config_data;
pub mod storage;
