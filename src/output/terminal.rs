// Colored terminal output for verdicts, batch runs and status.

use colored::Colorize;

use super::truncate_chars;
use crate::config::Config;
use crate::moderation::{Decision, DecisionPath};
use crate::pipeline::batch::BatchItem;

/// Print one verdict with the tier that produced it.
pub fn display_decision(text: &str, decision: &Decision) {
    let verdict = if decision.verdict.is_harmful {
        "HARMFUL".red().bold()
    } else {
        "OK".green().bold()
    };
    println!("{}  {}", verdict, truncate_chars(text, 80));
    println!("    {}", describe_path(&decision.path).dimmed());
}

/// One-line explanation of how a verdict was reached.
pub fn describe_path(path: &DecisionPath) -> String {
    match path {
        DecisionPath::Blocklist { term } => format!("blocklist match: \"{term}\""),
        DecisionPath::Provider { name, answer } => {
            format!("{name} answered: {}", truncate_chars(answer.trim(), 60))
        }
        DecisionPath::Unconfigured => "no provider configured (default: not harmful)".to_string(),
        DecisionPath::Degraded { provider, error } => {
            format!("{provider} failed, defaulted to not harmful: {error}")
        }
    }
}

/// Summarize a batch run.
pub fn display_batch_summary(items: &[BatchItem]) {
    let harmful = items
        .iter()
        .filter(|i| i.decision.verdict.is_harmful)
        .count();
    let blocklisted = items
        .iter()
        .filter(|i| matches!(i.decision.path, DecisionPath::Blocklist { .. }))
        .count();
    let degraded = items
        .iter()
        .filter(|i| matches!(i.decision.path, DecisionPath::Degraded { .. }))
        .count();

    println!(
        "\n{}",
        format!("=== Batch Report ({} messages) ===", items.len()).bold()
    );
    println!("  Harmful:     {}", harmful.to_string().red());
    println!("  Blocklisted: {blocklisted}");
    if degraded > 0 {
        println!(
            "  Degraded:    {} {}",
            degraded.to_string().yellow(),
            "(provider failures, counted as not harmful)".dimmed()
        );
    }
}

/// Show which providers and sinks the current configuration enables.
pub fn display_status(config: &Config, blocklist_len: usize) {
    println!("{}", "Chatwarden status".bold());
    if config.providers.is_empty() {
        println!("  Providers: {}", "none (blocklist only)".yellow());
    } else {
        for (i, spec) in config.providers.entries.iter().enumerate() {
            let role = if i == 0 { "primary" } else { "fallback" };
            println!(
                "  Provider {}: {} ({}, model {})",
                i + 1,
                spec.name.bold(),
                role,
                spec.model
            );
        }
    }
    println!("  Provider timeout: {}s", config.provider_timeout.as_secs());
    println!("  Blocklist terms: {blocklist_len}");
    match &config.telemetry_url {
        Some(url) => println!("  Telemetry: {url} (source {})", config.source_id),
        None => println!("  Telemetry: {}", "off".dimmed()),
    }
}
