pub mod command;
pub mod config;
pub mod dump;
pub mod events;
pub mod gui;
pub mod sys;
