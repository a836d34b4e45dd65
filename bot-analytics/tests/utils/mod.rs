#![allow(dead_code)]

pub mod helpers;
pub mod mock_collector;
pub mod mock_log_provider;
