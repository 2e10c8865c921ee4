//! The `termdeck learn` command.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use termdeck_core::model::random_entry;

use super::AppContext;

pub fn execute(ctx: &AppContext, seed: Option<u64>) -> Result<()> {
    let entries = ctx.store.load_all();
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    match random_entry(&entries, &mut rng) {
        Some(entry) => ctx.print_entry(entry),
        None => println!("No terms available. Add one with `termdeck add`."),
    }

    Ok(())
}
