/*
 * addr2b64 - compact and Base64-encode an address book file
 *
 * SPDX-License-Identifier: Apache-2.0
 */
//! Creates a more compact version of an address book JSON file by removing
//! newlines and whitespace, then Base64-encodes the compacted JSON. The
//! result is a single line that can be used as an environment variable
//! value without any quoting.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "addr2b64", version)]
#[command(about = "Kompaktiert eine Adressbuch-JSON-Datei und kodiert sie als Base64")]
struct Cli {
    /// Adressbuch-Datei (JSON)
    address_book_file: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let encoded = notifier_api::compact_and_encode(&cli.address_book_file)?;
    println!("{encoded}");
    Ok(())
}
