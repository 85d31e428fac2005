//! Command-line surface for notibak.
//!
//! Option names and help texts follow the original German-language tool;
//! required options are enforced per subcommand by clap, and failures
//! exit with a non-zero code instead of relying on message content.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use notifier_api::{ClientConfig, NotifierClient, read_token_file};

#[derive(Parser, Debug)]
#[command(name = "notibak", version)]
#[command(
    about = "Tool, um Backups des Datenbestandes von mobilenotifier zu erstellen und wiederherzustellen"
)]
pub struct Cli {
    /// Hostname des mobile notifier APIs, z.B. https://notifier.example.org
    #[arg(short = 'n', long, env = "NOTIFIER_HOST")]
    pub host_name: String,

    /// Datei, die ein gültiges JWT für das REST-Backend enthält
    #[arg(short = 't', long)]
    pub token_file: PathBuf,

    /// Datei, die das CA-Bundle enthält, falls das benötigt wird
    #[arg(short = 'c', long)]
    pub ca_bundle: Option<PathBuf>,

    /// Verbose mode (repeat for more: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Backup des Adressbuchs und der Reminder erstellen
    Backup {
        /// Ausgabedatei für das Backup
        #[arg(short = 'o', long)]
        output_file: PathBuf,
    },

    /// Backup auf einen Server zurückspielen.
    ///
    /// Achtung: Datensätze werden blind anhand ihrer IDs überschrieben,
    /// und ein Fehler bricht den Restore ab, ohne bereits geschriebene
    /// Datensätze zurückzunehmen.
    Restore {
        /// Eingabedatei für den Restore
        #[arg(short = 'i', long)]
        input_file: PathBuf,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let token = read_token_file(&cli.token_file)?;
    let mut config = ClientConfig::new(&cli.host_name, &token);
    if let Some(ca_bundle) = &cli.ca_bundle {
        config = config.ca_bundle(ca_bundle);
    }
    let client = NotifierClient::with_config(config)?;

    match cli.command {
        Commands::Backup { output_file } => {
            let document = client.backup_to_file(&output_file).await?;
            println!(
                "Backup geschrieben nach {}: {} Adressbucheinträge, {} Reminder",
                output_file.display(),
                document.address_book.len(),
                document.reminders.len()
            );
        }
        Commands::Restore { input_file } => {
            client.restore_from_file(&input_file).await?;
            println!("Restore von {} abgeschlossen", input_file.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn backup_requires_an_output_file() {
        let result = Cli::try_parse_from([
            "notibak", "-n", "https://host", "-t", "/tmp/token", "backup",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn restore_parses_with_input_file() {
        let cli = Cli::try_parse_from([
            "notibak",
            "-n",
            "https://host",
            "-t",
            "/tmp/token",
            "restore",
            "-i",
            "/tmp/backup.json",
        ])
        .expect("parse");
        assert!(matches!(cli.command, Commands::Restore { .. }));
    }
}
