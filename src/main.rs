use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use infographics::Config;
use infographics::diagram::{self, Diagram};
use infographics::output;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "infographics")]
#[command(version, about = "Renders the launch infographics as PNG images")]
struct Cli {
    /// Directory to write images to (overrides the config file)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Render only this built-in diagram (repeatable)
    #[arg(long, value_name = "NAME", action = ArgAction::Append)]
    only: Vec<String>,

    /// Also render a diagram described by a TOML layout file (repeatable)
    #[arg(long, value_name = "PATH", action = ArgAction::Append)]
    layout: Vec<PathBuf>,

    /// Use this config file instead of ~/.config/infographics/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the built-in diagram names and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,
}

/// Picks the built-ins named by `--only`, or all of them when none are named.
fn select_builtin(only: &[String]) -> Result<Vec<Diagram>> {
    let builtin = diagram::builtin();
    if only.is_empty() {
        return Ok(builtin);
    }
    for name in only {
        if !builtin.iter().any(|d| &d.name == name) {
            let known: Vec<&str> = builtin.iter().map(|d| d.name.as_str()).collect();
            bail!(
                "unknown diagram '{}' (available: {})",
                name,
                known.join(", ")
            );
        }
    }
    Ok(builtin
        .into_iter()
        .filter(|d| only.contains(&d.name))
        .collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list {
        for diagram in diagram::builtin() {
            println!("{}", diagram.name);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut diagrams = select_builtin(&cli.only)?;
    for path in &cli.layout {
        let layout = Diagram::load(path)?;
        if diagrams.iter().any(|d| d.name == layout.name) {
            bail!(
                "layout {} reuses the diagram name '{}'",
                path.display(),
                layout.name
            );
        }
        diagrams.push(layout);
    }

    let directory = cli
        .output_dir
        .unwrap_or_else(|| config.output.directory.clone());
    let directory = output::ensure_directory_exists(&directory)?;

    let style = config.style();
    let size = config.canvas_size();
    for diagram in &diagrams {
        output::render_to_file(diagram, &style, size, &directory)
            .with_context(|| format!("Failed to render '{}'", diagram.name))?;
    }

    println!("updated infographics in {}", directory.display());
    Ok(())
}
