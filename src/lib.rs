pub mod advice;
pub mod api;
pub mod backend;
pub mod chat;
pub mod cli;
pub mod config;
pub mod data;
pub mod input;
