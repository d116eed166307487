use clap::{Parser, Subcommand};

use rhyme_cli::commands::{analyze_ops, config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "rhymetool", about = "Rhyme detection and dictionary tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a CMU pronouncing dictionary into the binary format
    Compile {
        /// CMU dictionary text file
        input_txt: String,
        /// Output file
        output_file: String,
    },
    /// Show dictionary info
    Info {
        /// Dictionary file (.txt or compiled)
        dict_file: String,
    },
    /// Look up pronunciations
    Lookup {
        /// Dictionary file (.txt or compiled)
        dict_file: String,
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
        /// Fetch words missing locally from a G2P service at this base URL
        #[arg(long)]
        remote: Option<String>,
    },
    /// Explain whether two words rhyme and which rule decided it
    Explain {
        /// Dictionary file (.txt or compiled)
        dict_file: String,
        word_a: String,
        word_b: String,
    },
    /// Detect rhyme groups in a text file
    Analyze {
        /// Dictionary file (.txt or compiled)
        dict_file: String,
        /// Input text file
        input_file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Fetch unknown words from a G2P service at this base URL first
        #[arg(long)]
        remote: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            input_txt,
            output_file,
        } => dict_ops::compile(&input_txt, &output_file),
        Command::Info { dict_file } => dict_ops::info(&dict_file),
        Command::Lookup {
            dict_file,
            words,
            remote,
        } => dict_ops::lookup(&dict_file, &words, remote.as_deref()),
        Command::Explain {
            dict_file,
            word_a,
            word_b,
        } => dict_ops::explain(&dict_file, &word_a, &word_b),
        Command::Analyze {
            dict_file,
            input_file,
            json,
            remote,
        } => analyze_ops::analyze(&dict_file, &input_file, json, remote.as_deref()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
