//! Build script for steel-utils that generates the entity event table.

use std::{fs, path::Path, process::Command};

mod entity_events;

const FMT: bool = true;

const OUT_DIR: &str = "src/generated";
const ENTITY_EVENTS: &str = "entity_events";

/// Main build script entry point that generates the entity event enum.
pub fn main() {
    println!("cargo:rerun-if-changed=build/");

    if !Path::new(OUT_DIR).exists() {
        fs::create_dir_all(OUT_DIR).expect("Failed to create output directory");
    }

    let content = entity_events::build();
    fs::write(format!("{OUT_DIR}/{ENTITY_EVENTS}.rs"), content.to_string())
        .expect("Failed to write entity events file");

    if FMT && let Ok(entries) = fs::read_dir(OUT_DIR) {
        for entry in entries.flatten() {
            let _ = Command::new("rustfmt").arg(entry.path()).output();
        }
    }
}
