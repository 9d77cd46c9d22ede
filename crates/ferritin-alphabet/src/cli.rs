use super::commands;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use strum::{Display, EnumString};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Fasta,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode the chains of a PDB/mmCIF file into twelve-state sequences
    Encode {
        #[arg(short, long)]
        input: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        #[arg(short, long, default_value_t = OutputFormat::Fasta)]
        format: OutputFormat,
        /// Only encode the chain with this id
        #[arg(long)]
        chain: Option<String>,
    },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Encode {
                input,
                output,
                format,
                chain,
            } => commands::encode::execute(input, output, format, chain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::Fasta.to_string(), "fasta");
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["ferritin-alphabet", "encode", "-i", "x.pdb"]);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        let cli = Cli::parse_from(["ferritin-alphabet", "-vv", "encode", "-i", "x.pdb"]);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        let cli = Cli::parse_from(["ferritin-alphabet", "encode", "-i", "x.pdb", "-vvvv"]);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_encode_arguments() {
        let cli = Cli::parse_from([
            "ferritin-alphabet",
            "encode",
            "--input",
            "x.pdb",
            "--format",
            "json",
            "--chain",
            "B",
        ]);
        match cli.command {
            Commands::Encode {
                input,
                output,
                format,
                chain,
            } => {
                assert_eq!(input, "x.pdb");
                assert_eq!(output, None);
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(chain.as_deref(), Some("B"));
            }
        }
    }
}
