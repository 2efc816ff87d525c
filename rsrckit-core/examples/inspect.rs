//! List every resource in a file, trying the true fork before falling back
//! to reading the file as a flattened resource file.
//!
//! Usage: cargo run --example inspect -- <path>

use rsrckit_core::loader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: inspect <path-to-resource-file>")?;

    let catalog = loader::open(&path)?;

    println!(
        "{path}: {} ({} types, {} resources)",
        if catalog.is_resource_fork() {
            "resource fork"
        } else {
            "flattened resource file"
        },
        catalog.type_count(),
        catalog.resource_count(),
    );

    for tag in catalog.types() {
        println!("'{tag}'");
        for res in catalog.resources(tag) {
            let size = catalog
                .data_size(tag, res.id)
                .map(|n| n.to_string())
                .unwrap_or_else(|_| "?".into());
            println!(
                "  {:6}  {:>8} bytes  {}",
                res.id,
                size,
                res.name.as_deref().unwrap_or("")
            );
        }
    }
    Ok(())
}
