//! The `termdeck init` command.

use std::path::Path;

use anyhow::Result;

use termdeck_core::config::LOCAL_CONFIG;

use super::AppContext;

pub fn execute(ctx: &AppContext) -> Result<()> {
    if Path::new(LOCAL_CONFIG).exists() {
        println!("{LOCAL_CONFIG} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG, sample_config(&ctx.config.data_file))?;
        println!("Created {LOCAL_CONFIG}");
    }

    let data_file = ctx.store.path().display();
    if ctx.store.ensure_file()? {
        println!("Created {data_file}");
    } else {
        println!("{data_file} already exists, skipping.");
    }

    println!("\nNext steps:");
    println!("  1. Run: termdeck add --workbook \"Java Basics\" --term JVM --definition \"Runs bytecode\"");
    println!("  2. Run: termdeck show \"Java Basics\"");
    println!("  3. Run: termdeck quiz --questions 5");

    Ok(())
}

fn sample_config(data_file: &Path) -> String {
    format!(
        r#"# termdeck configuration

# Glossary file (relative to the working directory)
data_file = "{}"

# Questions per quiz when --questions is not given
default_questions = 5

# Print usage examples next to definitions
show_examples = true
"#,
        data_file.display().to_string().replace('\\', "/")
    )
}
