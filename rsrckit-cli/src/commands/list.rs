use anyhow::{Context, Result};
use colored::Colorize;
use rsrckit_core::{loader, ResType, ResourceCatalog};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize)]
struct ResourceRow {
    r#type: String,
    id: i16,
    size: Option<u32>,
    attributes: u8,
    name: Option<String>,
}

pub fn execute(input: &str, type_filter: Option<&str>, json: bool) -> Result<()> {
    info!("Listing resources in: {}", input);

    let catalog = loader::open(input)
        .with_context(|| format!("Failed to open resource file: {}", input))?;

    let tags: Vec<ResType> = match type_filter {
        Some(name) => vec![super::parse_type(name)?],
        None => catalog.types(),
    };

    if json {
        let rows = collect_rows(&catalog, &tags);
        let out = serde_json::to_string_pretty(&rows)
            .with_context(|| "Failed to serialize resource rows")?;
        println!("{out}");
        return Ok(());
    }

    for tag in tags {
        let resources = catalog.resources(tag);
        println!("'{}'  ({} resources)", tag.to_string().bold(), resources.len());
        for res in resources {
            // a bad data record must not take the listing down with it
            let size = catalog
                .data_size(tag, res.id)
                .map(|n| n.to_string())
                .unwrap_or_else(|_| "?".into());
            let attrs = res.attributes.labels().join(", ");
            println!(
                "  {:>6}  {:>8}  {:20}  {}",
                res.id,
                size,
                res.name.as_deref().unwrap_or(""),
                attrs.dimmed()
            );
        }
    }

    Ok(())
}

fn collect_rows(catalog: &ResourceCatalog, tags: &[ResType]) -> Vec<ResourceRow> {
    let mut rows = Vec::new();
    for &tag in tags {
        for res in catalog.resources(tag) {
            rows.push(ResourceRow {
                r#type: tag.to_string(),
                id: res.id,
                size: catalog.data_size(tag, res.id).ok(),
                attributes: res.attributes.as_u8(),
                name: res.name.clone(),
            });
        }
    }
    rows
}
