pub mod api;
pub mod catalog;
pub mod config;
pub mod data_models;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod search;
