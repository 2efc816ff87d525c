use anyhow::{Context, Result};
use colored::Colorize;
use rsrckit_core::loader;
use tracing::info;

pub fn execute(input: &str) -> Result<()> {
    info!("Inspecting file: {}", input);

    let catalog = loader::open(input)
        .with_context(|| format!("Failed to open resource file: {}", input))?;

    let header = catalog.header();
    let origin = if catalog.is_resource_fork() {
        "resource fork".green()
    } else {
        "flattened resource file".yellow()
    };

    println!("\n=== {} ===", input.bold());
    println!("Origin:            {}", origin);
    println!(
        "Data section:      offset {}, {} bytes",
        header.data_offset, header.data_length
    );
    println!(
        "Resource map:      offset {}, {} bytes",
        header.map_offset, header.map_length
    );
    println!("Map attributes:    0x{:04X}", catalog.map_attributes());
    println!("Types:             {}", catalog.type_count());
    println!("Resources:         {}", catalog.resource_count());

    if catalog.is_empty() {
        println!("\n{}", "no resources".dimmed());
    }

    Ok(())
}
