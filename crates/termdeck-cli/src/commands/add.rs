//! The `termdeck add` command.

use anyhow::Result;

use termdeck_core::store::AddOutcome;

use super::AppContext;

pub fn execute(
    ctx: &AppContext,
    workbook: &str,
    term: &str,
    definition: &str,
    example: &str,
) -> Result<()> {
    match ctx.store.add(workbook, term, definition, example) {
        Ok(AddOutcome::Saved) => {
            println!("Term added to {}.", ctx.store.path().display());
            Ok(())
        }
        Ok(AddOutcome::Duplicate) => {
            println!(
                "'{}' already exists in workbook '{}', not added.",
                term.trim(),
                workbook.trim()
            );
            Ok(())
        }
        Err(e) if e.is_validation() => anyhow::bail!("invalid entry: {e}"),
        Err(e) => Err(anyhow::Error::new(e).context("term not saved")),
    }
}
