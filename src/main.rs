use clap::{Parser, Subcommand};
use refshelf::{config, output, scan, search, shuffle, trail, tree};
use std::path::PathBuf;

/// Shared flags for commands that can emit JSON instead of an inventory.
#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Print JSON instead of the human-readable listing
    #[arg(long)]
    json: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "refshelf")]
#[command(about = "Organize reference docs and examples into navigable trees")]
#[command(long_about = "\
Organize reference docs and examples into navigable trees

Records are JSON files in a content directory. Reference entries are grouped
by their category/subcategory fields; examples by their directory.

Content structure:

  content/
  ├── config.toml                        # Optional settings
  ├── reference/
  │   └── shape/2d_primitives/arc.json   # {\"name\": \"arc()\", \"category\": \"shape\", ...}
  └── examples/
      └── Basics/Shape/Points/           # Category/Subcategory/Example
          ├── Points.json                # {\"name\": \"Points\", ...}
          └── Points.png                 # Preview image

Run 'refshelf gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the reference tree
    Reference(FormatArgs),
    /// Print the example tree
    Examples(FormatArgs),
    /// Filter records by a search query (every term must match)
    Search {
        /// Query terms
        #[arg(required = true)]
        query: Vec<String>,
        /// Search examples instead of reference entries
        #[arg(long)]
        examples: bool,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the breadcrumb trail of a reference entry
    Trail {
        /// Reference entry identifier (file stem)
        name: String,
    },
    /// Print a random selection of examples
    Featured {
        /// Number of examples (defaults to featured.count in config)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Validate the content directory without printing trees
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Reference(format) => {
            let content = scan::scan(&cli.source)?;
            let tree = tree::build_reference_tree(&content.references);
            if format.json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                output::print_reference_tree(&tree, content.config.output.description_width);
            }
        }
        Command::Examples(format) => {
            let content = scan::scan(&cli.source)?;
            let options = content.config.examples.tree_options();
            let tree = tree::build_example_tree_with(&content.examples, &content.images, &options);
            if format.json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                output::print_example_tree(&tree, content.config.output.description_width);
            }
        }
        Command::Search {
            query,
            examples,
            format,
        } => {
            let content = scan::scan(&cli.source)?;
            let query = query.join(" ");
            let width = content.config.output.description_width;
            if examples {
                let matches = search::filter_items(&content.examples, &query);
                if format.json {
                    println!("{}", serde_json::to_string_pretty(&matches)?);
                } else {
                    output::print_lines(&output::format_example_matches(
                        &query,
                        &matches,
                        content.examples.len(),
                        width,
                    ));
                }
            } else {
                let matches = search::filter_items(&content.references, &query);
                if format.json {
                    println!("{}", serde_json::to_string_pretty(&matches)?);
                } else {
                    output::print_lines(&output::format_reference_matches(
                        &query,
                        &matches,
                        content.references.len(),
                        width,
                    ));
                }
            }
        }
        Command::Trail { name } => {
            let content = scan::scan(&cli.source)?;
            let entry = content
                .references
                .iter()
                .find(|r| r.name == name)
                .ok_or_else(|| format!("No reference entry named '{name}'"))?;
            let crumbs = trail::trail(&content.config.library, entry, &content.references);
            output::print_lines(&output::format_trail(&crumbs));
        }
        Command::Featured { count } => {
            let content = scan::scan(&cli.source)?;
            let count = count.unwrap_or(content.config.featured.count);
            let picked = shuffle::featured(&content.examples, count);
            output::print_lines(&output::format_featured(
                &picked,
                content.examples.len(),
                content.config.output.description_width,
            ));
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let content = scan::scan(&cli.source)?;
            let reference_tree = tree::build_reference_tree(&content.references);
            let options = content.config.examples.tree_options();
            let example_tree =
                tree::build_example_tree_with(&content.examples, &content.images, &options);
            let has_config = cli.source.join("config.toml").exists();
            output::print_lines(&output::format_check_output(
                &content,
                &reference_tree,
                &example_tree,
                has_config,
            ));
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
