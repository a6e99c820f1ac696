use clap::{Parser, Subcommand};

use kana_cli::commands::classify_ops::{classify_cmd, kanji_cmd};
use kana_cli::commands::convert_ops::{convert_cmd, Target};
use kana_cli::commands::{collect_inputs, load_rules};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana and romaji transliteration tool")]
struct Cli {
    /// Custom rule dataset (TOML) replacing the built-in tables
    #[arg(long, global = true)]
    rules: Option<String>,
    /// Log every pipeline stage to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert kana to romaji
    Romaji {
        /// Write katakana as uppercase romaji
        #[arg(long)]
        cased: bool,
        /// Spell ぢ/づ as ji/zu instead of di/du
        #[arg(long)]
        phonetic: bool,
        /// Input text (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Convert romaji to hiragana
    Hiragana {
        /// Input text (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Convert romaji to katakana
    Katakana {
        /// Input text (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Convert lowercase romaji to hiragana and uppercase to katakana
    Kana {
        /// Input text (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Report which scripts each input is written in
    Classify {
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Input text (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Extract the kanji of each input
    Kanji {
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Input text (reads stdin lines when omitted)
        text: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Romaji {
            cased,
            phonetic,
            text,
        } => {
            let rules = load_rules(cli.rules.as_deref());
            convert_cmd(rules, Target::Romaji { cased, phonetic }, &collect_inputs(text));
        }
        Command::Hiragana { text } => {
            let rules = load_rules(cli.rules.as_deref());
            convert_cmd(rules, Target::Hiragana, &collect_inputs(text));
        }
        Command::Katakana { text } => {
            let rules = load_rules(cli.rules.as_deref());
            convert_cmd(rules, Target::Katakana, &collect_inputs(text));
        }
        Command::Kana { text } => {
            let rules = load_rules(cli.rules.as_deref());
            convert_cmd(rules, Target::Kana, &collect_inputs(text));
        }
        Command::Classify { json, text } => classify_cmd(&collect_inputs(text), json),
        Command::Kanji { json, text } => kanji_cmd(&collect_inputs(text), json),
    }
}
