use wasm_bindgen::prelude::*;
use glyphfall_engine::*;

mod collisions;
mod config;
mod drag;
mod explosion;
mod game;
mod layout;
mod reveal;
mod spawner;
mod stage;
mod visuals;

use game::Glyphfall;

glyphfall_web::export_game!(Glyphfall, "glyphfall");
