//! The `termdeck search` command.

use anyhow::Result;

use termdeck_core::model::search_term;

use super::AppContext;

pub fn execute(ctx: &AppContext, term: &str) -> Result<()> {
    let entries = ctx.store.load_all();
    let found = search_term(&entries, term);

    if found.is_empty() {
        println!("Term not found.");
    } else {
        for entry in found {
            ctx.print_entry(entry);
        }
    }

    Ok(())
}
