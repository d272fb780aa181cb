use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod game;
pub mod settings;
pub mod state;
use game::SolarLine;

scaleline_web::export_app!(SolarLine, "solar-line");
