use clap::{Parser, Subcommand};

use translit_cli::commands::{config_ops, convert_ops, corpus_ops, guide_ops};

#[derive(Parser)]
#[command(name = "translit", about = "Pointed Hebrew to Latin transliteration tool")]
struct Cli {
    /// Custom settings TOML
    #[arg(long, global = true)]
    config: Option<String>,
    /// Write a JSON trace log into this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (arguments, a file, or stdin line by line)
    Convert {
        /// Text to transliterate
        text: Vec<String>,
        /// Read input from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
    },
    /// Show which rule decided each consonant cluster
    Explain {
        /// Text to explain
        text: String,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the consonant and vowel reference tables
    Guide {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Build a drill corpus of pointed verses
    Corpus {
        #[command(subcommand)]
        action: CorpusAction,
    },
    /// Export default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum CorpusAction {
    /// Download a Sefaria text and write its verses as a JSON array
    Fetch {
        /// Output JSON file
        output: String,
        /// Source URL (defaults to corpus.source_url)
        #[arg(long)]
        url: Option<String>,
        /// Similarity threshold for near-duplicate removal
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Clean a local file with one verse per line
    Clean {
        /// Input text file
        input: String,
        /// Output JSON file
        output: String,
        /// Similarity threshold for near-duplicate removal
        #[arg(long)]
        threshold: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        config_ops::trace_start(dir);
    }
    if let Some(file) = cli.config.as_deref() {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Convert { text, file } => convert_ops::convert_cmd(&text, file.as_deref()),
        Command::Explain { text, json } => convert_ops::explain_cmd(&text, json),
        Command::Guide { json } => guide_ops::guide_cmd(json),
        Command::Corpus { action } => match action {
            CorpusAction::Fetch {
                output,
                url,
                threshold,
            } => corpus_ops::fetch(&output, url.as_deref(), threshold),
            CorpusAction::Clean {
                input,
                output,
                threshold,
            } => corpus_ops::clean(&input, &output, threshold),
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
