// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use crate::analyzer::{self, improve};
use crate::crypto;
use crate::generators;
use crate::models::{GenerationSpec, StrengthLevel};
use crate::utils::truncate_string;
use super::commands::CliCommand;

const HASH_DISPLAY_LEN: usize = 60;

pub fn run_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Analyze { password } => run_analyze(&password),
        CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
        } => run_generate(GenerationSpec {
            length,
            include_lowercase: !no_lowercase,
            include_uppercase: !no_uppercase,
            include_digits: !no_digits,
            include_special: !no_special,
        }),
        CliCommand::Improve { password } => run_improve(&password),
    }
}

fn run_analyze(password: &str) -> Result<()> {
    let analysis = analyzer::analyze(password)?;
    let strength = &analysis.strength;

    println!();
    println!(
        "Strength: {}  (score {}/100)",
        styled_level(strength.level),
        strength.score
    );
    println!("Length:   {} characters", strength.length);
    println!("Entropy:  {} bits", strength.entropy);
    if strength.is_common {
        println!("{}", style("Found in the common-password blocklist!").red().bold());
    }

    println!();
    println!("Crack times (average case):");
    for entry in &analysis.crack_times {
        println!("  {:<10} {}", entry.algorithm, entry.time_human);
    }

    println!();
    println!("Suggestions:");
    for suggestion in &analysis.suggestions {
        println!("  {}", suggestion);
    }

    let hashes = crypto::hash_comparison(password)?;
    println!();
    println!("Stored as:");
    println!("  plaintext  {}", style(&hashes.plaintext).red());
    println!("  md5        {}", hashes.md5);
    println!("  sha256     {}", hashes.sha256);
    println!("  bcrypt     {}", truncate_string(&hashes.bcrypt, HASH_DISPLAY_LEN));
    match &hashes.argon2 {
        Some(hash) => println!("  argon2     {}", truncate_string(hash, HASH_DISPLAY_LEN)),
        None => println!("  argon2     {}", style("(backend not compiled in)").dim()),
    }

    Ok(())
}

fn run_generate(spec: GenerationSpec) -> Result<()> {
    let password = generators::generate_password(&spec)?;
    let strength = analyzer::strength(&password);

    println!("{}", style(&password).green().bold());
    println!(
        "{} (score {}/100), {} bits of entropy",
        styled_level(strength.level),
        strength.score,
        strength.entropy
    );

    Ok(())
}

fn run_improve(password: &str) -> Result<()> {
    let original = analyzer::strength(password);
    let candidates = improve::improve(password);

    println!(
        "Original: {} (score {}/100)",
        styled_level(original.level),
        original.score
    );
    println!();

    if candidates.is_empty() {
        println!("No stronger variant found - the password already scores well.");
        return Ok(());
    }

    for candidate in candidates {
        println!(
            "  {:<24} {} (score {}/100) - {}",
            candidate.password,
            styled_level(candidate.level),
            candidate.score,
            candidate.strategy
        );
    }

    Ok(())
}

fn styled_level(level: StrengthLevel) -> console::StyledObject<&'static str> {
    match level {
        StrengthLevel::VeryWeak => style(level.as_str()).red().bold(),
        StrengthLevel::Weak => style(level.as_str()).red(),
        StrengthLevel::Moderate => style(level.as_str()).yellow(),
        StrengthLevel::Strong => style(level.as_str()).green(),
        StrengthLevel::VeryStrong => style(level.as_str()).green().bold(),
    }
}
