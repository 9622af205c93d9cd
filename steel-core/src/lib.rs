//! Core simulation for Steel: living entities, the damage → health → death
//! pipeline and the in-memory world services it reports into.

pub mod behavior;
pub mod combat;
pub mod config;
pub mod entity;
pub mod event;
pub mod item;
pub mod player;
pub mod scoreboard;
pub mod server;
pub mod stats;
pub mod world;
