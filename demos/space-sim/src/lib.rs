use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod controls;
mod game;
mod interaction;
mod orbit;
use game::SpaceSimulation;

orrery_web::export_game!(SpaceSimulation, "space-sim");
