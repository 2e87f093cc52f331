//! conjugo rules - List the validation rules and their effective state

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, severity_badge};
use crate::error::Result;
use crate::lint::ValidationEngine;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Include each rule's description
    #[arg(long)]
    pub long: bool,
}

pub fn run(ctx: &AppContext, args: &RulesArgs) -> Result<()> {
    let engine = ValidationEngine::with_builtin_rules(ctx.config.validate.rules.clone());
    let rules = engine.list_rules();

    if ctx.output_format != OutputFormat::Human {
        return emit_json(&rules);
    }

    let mut layout = HumanLayout::new();
    layout.title("Validation Rules");
    for rule in &rules {
        let state = if rule.enabled { "" } else { " (disabled)" };
        layout.bullet(&format!(
            "{} {} - {}{state}",
            severity_badge(rule.severity),
            rule.id,
            rule.name
        ));
        if args.long {
            layout.push_line(format!("    {}", rule.description));
        }
    }
    emit_human(layout);

    Ok(())
}
