//! Editor example: the content store and admin gate end to end.
//!
//! Opens a directory-backed content store, authenticates against the PIN
//! gate, edits the glossary, then reopens the store to show the edit
//! survived. Finishes with a factory reset.
//!
//! Run with:
//!   cargo run --example editor -p flowsim -- --pin 19901991

use anyhow::{Result, bail};
use clap::Parser;
use flowsim::{
    admin::AdminGate,
    content::{ContentStore, DirStore},
};

#[derive(Parser)]
struct Args {
    /// Editor PIN.
    #[arg(long)]
    pin: String,

    /// Directory holding the content slices.
    #[arg(long, default_value = "./content")]
    dir: std::path::PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut gate = AdminGate::new();
    if !gate.login(&args.pin) {
        bail!("wrong PIN, content left untouched");
    }
    println!("authenticated, editing {}", args.dir.display());

    let mut store = ContentStore::open(DirStore::new(&args.dir))?;
    println!("glossary has {} terms", store.glossary().len());

    let mut glossary = store.glossary().clone();
    glossary.insert(
        "AQM".to_owned(),
        "Active Queue Management. Drops or marks packets before the queue \
         is full to keep latency bounded."
            .to_owned(),
    );
    store.update_glossary(glossary)?;
    println!("added \"AQM\", store persisted");

    // Reopen from disk: the edit must still be there.
    let mut store = ContentStore::open(DirStore::new(&args.dir))?;
    match store.glossary().get("AQM") {
        Some(definition) => println!("reloaded: AQM = {definition}"),
        None => bail!("edit did not survive a reload"),
    }

    store.reset_to_defaults()?;
    println!(
        "factory reset: glossary back to {} terms",
        store.glossary().len()
    );

    gate.logout();
    Ok(())
}
