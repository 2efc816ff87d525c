use anyhow::{Context, Result};
use rsrckit_core::loader;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub fn execute(input: &str, output_dir: &str) -> Result<()> {
    info!("Extracting resources from {} into {}", input, output_dir);

    let catalog = loader::open(input)
        .with_context(|| format!("Failed to open resource file: {}", input))?;

    let root = Path::new(output_dir);
    let mut written = 0usize;
    let mut failed = 0usize;

    for tag in catalog.types() {
        let type_dir = root.join(sanitize(&tag.to_string()));
        fs::create_dir_all(&type_dir)
            .with_context(|| format!("Failed to create {}", type_dir.display()))?;

        for res in catalog.resources(tag) {
            let payload = match catalog.data(tag, res.id) {
                Ok(payload) => payload,
                Err(err) => {
                    // one bad record should not stop the export
                    warn!("skipping '{}' {}: {}", tag, res.id, err);
                    failed += 1;
                    continue;
                }
            };

            let file_name = match res.name.as_deref() {
                Some(name) if !name.is_empty() => {
                    format!("{}-{}.bin", res.id, sanitize(name))
                }
                _ => format!("{}.bin", res.id),
            };
            let path = type_dir.join(file_name);
            fs::write(&path, &payload)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            written += 1;
        }
    }

    println!("\n=== Extract Results ===");
    println!("Resources written: {}", written);
    println!("Resources skipped: {}", failed);
    println!("Output directory:  {}", root.display());

    Ok(())
}

/// Replace characters that are invalid on common filesystems.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ':' | '/' | '\\' | '\0' => '_',
            '<' | '>' | '"' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect()
}
