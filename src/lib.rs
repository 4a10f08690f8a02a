//! Camp Warden - two-base hero bot for the arena line protocol

pub mod ai;
pub mod command;
pub mod core;
pub mod entity;
pub mod protocol;
pub mod simulation;
pub mod spatial;
