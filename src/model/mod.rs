pub mod constants;
pub mod contest_information;
pub mod data_processing;
pub mod history_cache;
pub mod rating_engine;
pub mod rating_utils;
pub mod structures;
