// pluck/src/commands/patterns.rs
//! The `patterns` command: lists the built-in pattern definitions.

use anyhow::Result;
use owo_colors::OwoColorize;

use pluck_core::PatternConfig;

use crate::ui::output;

pub fn run() -> Result<()> {
    let config = PatternConfig::load_builtin_rules()?;
    let colored = output::stdout_supports_color();

    println!("Built-in patterns ({}):", config.rules.len());
    for rule in &config.rules {
        println!();
        if colored {
            println!("{}", rule.name.cyan().bold());
        } else {
            println!("{}", rule.name);
        }
        if let Some(description) = &rule.description {
            println!("  {description}");
        }
        println!("  pattern: {}", rule.pattern);
    }
    Ok(())
}
