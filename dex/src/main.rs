#[macro_use]
extern crate clap;

use std::process;

use clap::{AppSettings, Arg, SubCommand};

fn main() {
    pretty_env_logger::init();

    let matches = app_from_crate!()
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("assemble")
                .visible_alias("a")
                .about("Converts assembly source to machine code")
                .arg(
                    Arg::with_name("SRC")
                        .help("Sets the assembly source file to read")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("DST")
                        .help("Sets the binary file to write (stdout if omitted)")
                        .index(2),
                ),
        )
        .subcommand(
            SubCommand::with_name("emulate")
                .visible_alias("e")
                .about("Executes a program in the emulator")
                .arg(
                    Arg::with_name("BIN")
                        .help("Sets the binary file to run")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("debug")
                .visible_alias("d")
                .about("Debugs a program in the emulator")
                .arg(
                    Arg::with_name("BIN")
                        .help("Sets the binary file to debug")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("disassemble")
                .visible_alias("dis")
                .about("Converts machine code to assembly (reserved)"),
        )
        .subcommand(
            SubCommand::with_name("hexdump")
                .visible_alias("h")
                .about("Displays a binary file in readable format")
                .arg(
                    Arg::with_name("BIN")
                        .help("Sets the binary file to display")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("assemble", Some(sub)) => {
            dex::assemble_file(sub.value_of("SRC").unwrap(), sub.value_of("DST"))
        }
        ("emulate", Some(sub)) => dex::emulate_file(sub.value_of("BIN").unwrap()),
        ("debug", Some(sub)) => dex::debug_file(sub.value_of("BIN").unwrap()),
        ("hexdump", Some(sub)) => dex::hexdump_file(sub.value_of("BIN").unwrap()),
        _ => Ok(()),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}
