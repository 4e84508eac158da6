use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    let language = Arg::new("language")
        .long("language")
        .short('l')
        .value_name("LANG")
        .value_hint(ValueHint::Other);
    let bind = Arg::new("bind")
        .long("bind")
        .short('b')
        .value_name("TOKEN=VALUE")
        .action(ArgAction::Append);
    let strict = Arg::new("strict").long("strict").action(ArgAction::SetTrue);

    Command::new("snip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and expanding snippet definitions")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .arg(Arg::new("path").index(1).value_hint(ValueHint::FilePath))
                .arg(language.clone())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("expand")
                .arg(Arg::new("spec").index(1).value_hint(ValueHint::Other))
                .arg(bind.clone())
                .arg(strict.clone()),
        )
        .subcommand(
            Command::new("render")
                .arg(Arg::new("path").index(1).value_hint(ValueHint::FilePath))
                .arg(Arg::new("trigger").index(2).value_hint(ValueHint::Other))
                .arg(language)
                .arg(bind)
                .arg(strict),
        )
        .subcommand(Command::new("filters"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "snip", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "snip", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "snip", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
