use std::path::Path;

pub fn run(data: &Path) -> Result<(), String> {
    let dataset = super::load_dataset(data)?;

    println!("  All checks passed for '{}'.", data.display());
    println!(
        "  {} races, {} classes, {} pantheons, {} alignments",
        dataset.races.len(),
        dataset.classes.len(),
        dataset.deities.len(),
        dataset.alignments.len()
    );

    Ok(())
}
