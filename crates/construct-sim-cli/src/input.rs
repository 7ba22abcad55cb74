//! CSV loaders for the two pipeline inputs.
//!
//! Items arrive as `construct,text` rows; the reference table as
//! `construct_1,construct_2,correlation` rows. Both files carry a header.

use std::path::Path;

use anyhow::{bail, Context, Result};

use construct_sim_core::{Item, ReferenceTriple};

/// Load the items file.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open items file {}", path.display()))?;

    let mut items = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let item: Item =
            result.with_context(|| format!("Failed to parse items row {}", row + 2))?;
        if item.construct.trim().is_empty() {
            bail!("Items row {} has an empty construct label", row + 2);
        }
        if item.text.trim().is_empty() {
            bail!(
                "Items row {} (construct '{}') has empty text",
                row + 2,
                item.construct
            );
        }
        items.push(item);
    }

    if items.is_empty() {
        bail!("Items file {} contains no rows", path.display());
    }

    Ok(items)
}

/// Load the reference correlation table.
pub fn load_reference(path: &Path) -> Result<Vec<ReferenceTriple>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open reference file {}", path.display()))?;

    let mut triples = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let triple: ReferenceTriple =
            result.with_context(|| format!("Failed to parse reference row {}", row + 2))?;
        if !triple.correlation.is_finite() {
            bail!(
                "Reference row {} has a non-finite correlation for ({}, {})",
                row + 2,
                triple.construct_1,
                triple.construct_2
            );
        }
        triples.push(triple);
    }

    if triples.is_empty() {
        bail!("Reference file {} contains no rows", path.display());
    }

    Ok(triples)
}
