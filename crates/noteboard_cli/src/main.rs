//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `noteboard_core` linkage without the Flutter runtime.
//! - Print the seeded board so its shape can be eyeballed.

use noteboard_core::{core_version, ping, NoteStore};

fn main() {
    println!("noteboard_core ping={}", ping());
    println!("noteboard_core version={}", core_version());

    let board = NoteStore::new().snapshot();
    for category in &board.categories {
        println!(
            "category id={} name={:?} notes={}",
            category.id,
            category.name,
            category.len()
        );
    }
}
