//! Hostblock - block websites by redirecting them in the system hosts file.

pub mod action;
pub mod blocker;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod hosts;
pub mod logging;
pub mod platform;
pub mod shell;
pub mod store;
