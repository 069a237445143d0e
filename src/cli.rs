use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cdb-export")]
#[command(
    about = "Convert a parameter-sweep manifest (info.json) into a Cinema .cdb database",
    long_about = None
)]
#[command(version)]
pub(crate) struct Cli {
    /// Path to the sweep manifest; image paths resolve relative to its directory.
    pub(crate) manifest: PathBuf,

    /// Database directory to create (".cdb" is appended when missing). Must not exist.
    pub(crate) output: PathBuf,
}
