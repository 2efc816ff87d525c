use anyhow::{Context, Result};
use rsrckit_core::loader;
use std::fs;
use std::io::Write;
use tracing::info;

pub fn execute(
    input: &str,
    type_name: &str,
    id: i16,
    output: Option<&str>,
    hex_dump: bool,
) -> Result<()> {
    let tag = super::parse_type(type_name)?;
    info!("Fetching '{}' {} from {}", tag, id, input);

    let catalog = loader::open(input)
        .with_context(|| format!("Failed to open resource file: {}", input))?;

    let payload = catalog
        .data(tag, id)
        .with_context(|| format!("Failed to read resource '{}' {}", tag, id))?;

    if let Some(path) = output {
        fs::write(path, &payload)
            .with_context(|| format!("Failed to write output file: {}", path))?;
        info!("{} bytes written to {}", payload.len(), path);
        return Ok(());
    }

    if hex_dump {
        for (line, chunk) in payload.chunks(16).enumerate() {
            let printable: String = chunk
                .iter()
                .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
                .collect();
            println!("{:08x}  {:<32}  {}", line * 16, hex::encode(chunk), printable);
        }
        return Ok(());
    }

    // raw bytes straight to stdout, suitable for piping
    std::io::stdout()
        .write_all(&payload)
        .with_context(|| "Failed to write payload to stdout")?;
    Ok(())
}
