use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["events-json", "events-treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("fswikifmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Formatter for FreeStyleWiki markup")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("table-align")
                .long("table-align")
                .value_parser(["left", "right"])
                .global(true),
        )
        .arg(
            Arg::new("table-space")
                .long("table-space")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("format")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(Arg::new("input").index(1).value_hint(ValueHint::FilePath))
                .arg(
                    Arg::new("transform")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        )),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "fswikifmt", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "fswikifmt", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "fswikifmt", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
