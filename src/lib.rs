//! Valentine Journey: a four-scene terminal greeting.
//!
//! Everything in the library is free of terminal I/O so it can be driven
//! from tests; the binary owns the crossterm loop and rendering.

pub mod app;
pub mod compute;
pub mod config;
pub mod entities;
pub mod game;
pub mod letter;
pub mod poem;
pub mod scene;
pub mod timeline;
pub mod timer;
