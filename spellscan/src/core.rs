// src/core.rs
pub mod command;
pub mod exclude;
pub mod scanner;
