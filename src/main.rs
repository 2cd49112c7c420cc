//! Prefix Tree - command line entrypoint.
//!
//! Loads a word list into a prefix tree and answers a single query against
//! it: completions, membership, prefix existence or tree statistics.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use prefix_tree_lib::config::{
    AppConfig, ConfigLoader, ConfigResult, LogConfig, OutputConfig, OutputFormat, ENV_PREFIX,
};
use prefix_tree_lib::dictionary;
use prefix_tree_lib::{PrefixTree, PrefixTreeError, PrefixTreeResult};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_tree", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding `dictionary.path`
    #[clap(short, long, value_parser)]
    dict: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Check whether a word was loaded
    Contains {
        /// Word to look up
        word: String,
    },

    /// Check whether any loaded word starts with a prefix
    HasPrefix {
        /// Prefix to look up
        prefix: String,
    },

    /// Print word and node counts
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> PrefixTreeResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        PrefixTreeError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Builds the tree from the configured dictionary, or an empty one if none is set.
fn build_tree(config: &AppConfig) -> PrefixTreeResult<PrefixTree> {
    match &config.dictionary.path {
        Some(path) => {
            let tree = dictionary::load_from_path(path, &config.dictionary)?;
            info!(words = tree.len(), ?path, "Dictionary ready");
            Ok(tree)
        }
        None => {
            warn!("No dictionary configured, querying an empty tree");
            Ok(PrefixTree::new())
        }
    }
}

/// Writes completions in the configured format.
fn print_words<W: Write>(
    out: &mut W,
    words: Vec<String>,
    output: &OutputConfig,
) -> PrefixTreeResult<()> {
    let words = output.arrange(words);

    match output.format {
        OutputFormat::Plain => {
            for word in &words {
                writeln!(out, "{word}")?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&words)?)?,
    }
    Ok(())
}

/// Writes a yes/no answer as `true` or `false`.
fn print_flag<W: Write>(out: &mut W, flag: bool) -> PrefixTreeResult<()> {
    writeln!(out, "{flag}")?;
    Ok(())
}

/// Writes word and node counts in the configured format.
fn print_stats<W: Write>(
    out: &mut W,
    tree: &PrefixTree,
    format: OutputFormat,
) -> PrefixTreeResult<()> {
    match format {
        OutputFormat::Plain => {
            writeln!(out, "words: {}", tree.len())?;
            writeln!(out, "nodes: {}", tree.node_count())?;
        }
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "words": tree.len(), "nodes": tree.node_count() })
        )?,
    }
    Ok(())
}

/// Turns the load result into a usable configuration, applying `--dict`.
fn resolve_config(
    loaded: ConfigResult<AppConfig>,
    dict: Option<PathBuf>,
) -> PrefixTreeResult<AppConfig> {
    let mut config = loaded.map_err(|e| {
        error!("Configuration error: {}", e);
        PrefixTreeError::from(e)
    })?;

    if let Some(dict) = dict {
        config.dictionary.path = Some(dict);
    }
    Ok(config)
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> PrefixTreeResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| PrefixTreeError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> PrefixTreeResult<()> {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    init_logging(loaded.as_ref().map(|c| &c.log).unwrap_or(&LogConfig::default()))?;

    let mut stdout = io::stdout().lock();

    match args.command {
        Command::GenConfig { output } => gen_config(&output),
        Command::Validate => {
            resolve_config(loaded, args.dict)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::Complete { prefix } => {
            let config = resolve_config(loaded, args.dict)?;
            let tree = build_tree(&config)?;
            print_words(&mut stdout, tree.words_with_prefix(prefix.as_str()), &config.output)
        }
        Command::Contains { word } => {
            let tree = build_tree(&resolve_config(loaded, args.dict)?)?;
            print_flag(&mut stdout, tree.search(word.as_str()))
        }
        Command::HasPrefix { prefix } => {
            let tree = build_tree(&resolve_config(loaded, args.dict)?)?;
            print_flag(&mut stdout, tree.starts_with(prefix.as_str()))
        }
        Command::Stats => {
            let config = resolve_config(loaded, args.dict)?;
            let tree = build_tree(&config)?;
            print_stats(&mut stdout, &tree, config.output.format)
        }
    }
}
