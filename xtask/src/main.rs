//! xtask - Build tasks for copycat
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man page, OPTIONS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use copycat::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for copycat")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate the man page
        #[arg(long)]
        man: bool,

        /// Generate OPTIONS.md
        #[arg(long)]
        markdown: bool,

        /// Generate all formats (default if no specific format is specified)
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
            all,
        } => {
            // If no specific format is specified, generate all
            let gen_all = all || (!man && !markdown);

            if gen_all || man {
                generate_man_page(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate the man page using clap_mangen
fn generate_man_page(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let man = Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = man_dir.join("copycat.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Render `-s, --long <VALUE>` for one flag.
fn flag_label(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    let mut label = match (short, long) {
        (Some(s), Some(l)) => format!("{}, {}", s, l),
        (None, Some(l)) => l,
        (Some(s), None) => s,
        (None, None) => return None,
    };
    if let Some(names) = arg.get_value_names() {
        for name in names {
            label.push_str(&format!(" <{}>", name));
        }
    }
    Some(label)
}

/// Generate OPTIONS.md, grouped by help heading
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# copycat Option Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }

    let positional: Vec<_> = cmd.get_positionals().filter(|a| !a.is_hide_set()).collect();
    if !positional.is_empty() {
        markdown.push_str("## Arguments\n\n");
        for arg in positional {
            markdown.push_str(&format!("- `<{}>`: ", arg.get_id().as_str().to_uppercase()));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&format!("{}", help));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    // Headings in first-seen order; ungrouped flags go under "Options".
    let mut sections: Vec<(&str, Vec<&Arg>)> = Vec::new();
    for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
        let heading = arg.get_help_heading().unwrap_or("Options");
        match sections.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, args)) => args.push(arg),
            None => sections.push((heading, vec![arg])),
        }
    }

    for (heading, args) in sections {
        markdown.push_str(&format!("## {}\n\n", heading));
        markdown.push_str("| Option | Description |\n");
        markdown.push_str("|--------|-------------|\n");
        for arg in args {
            let Some(label) = flag_label(arg) else {
                continue;
            };
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            markdown.push_str(&format!("| `{}` | {} |\n", label, help));
        }
        markdown.push('\n');
    }

    if let Some(after_help) = cmd.get_after_help() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", after_help));
        markdown.push_str("```\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("OPTIONS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
