//! Fallible command implementations behind the `dex` binary. Each function
//! maps onto one subcommand; `main` only parses arguments and reports errors.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;

use dcpu::{debugger, Machine};

#[derive(Debug)]
pub enum IoContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error, IoContext, PathBuf),
    Asm(dasm::Error),
    Exec(dcpu::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IoContext::ReadInput => "reading input",
                    IoContext::WriteOutput => "writing output",
                },
                path.display(),
                err
            ),
            Error::Asm(err) => write!(f, "assembling input failed: {}", err),
            Error::Exec(err) => write!(f, "dcpu: {}", err),
        }
    }
}

fn read_err(path: &str) -> impl FnOnce(io::Error) -> Error + '_ {
    move |err| Error::Io(err, IoContext::ReadInput, PathBuf::from(path))
}

fn write_err(path: &str) -> impl FnOnce(io::Error) -> Error + '_ {
    move |err| Error::Io(err, IoContext::WriteOutput, PathBuf::from(path))
}

/// Assembles `input` and writes the binary to `output`, or to stdout when no
/// output path is given.
pub fn assemble_file(input: &str, output: Option<&str>) -> Result<(), Error> {
    let src = fs::read(input).map_err(read_err(input))?;
    let gen = dasm::assemble(&src).map_err(Error::Asm)?;

    info!(target: "dex", "assembled {} into {} words", input, gen.len());

    match output {
        Some(path) => words::write_file(path, &gen).map_err(write_err(path)),
        None => {
            let stdout = io::stdout();
            words::write(&mut stdout.lock(), &gen).map_err(write_err("<stdout>"))
        }
    }
}

/// Loads a binary image into a fresh machine.
pub fn load_machine(path: &str) -> Result<Machine, Error> {
    let image = words::read_file(path).map_err(read_err(path))?;
    let mut machine = Machine::new();
    machine.load(&image);
    Ok(machine)
}

/// Runs a binary until the machine reports an error.
pub fn emulate_file(path: &str) -> Result<(), Error> {
    let mut machine = load_machine(path)?;
    info!(target: "dex", "executing {}", path);
    machine.exec().map_err(Error::Exec)
}

/// Pretty-prints the nonzero rows of a binary.
pub fn hexdump_file(path: &str) -> Result<(), Error> {
    let image = words::read_file(path).map_err(read_err(path))?;
    let stdout = io::stdout();
    words::hexdump(&image, &mut stdout.lock()).map_err(write_err("<stdout>"))
}

/// A line-based debugger REPL over stdin. Commands: `step`, `steploop`,
/// `stepjmp`, `mem`, `r`, `op`, `quit`. End of input quits.
pub fn debug_file(path: &str) -> Result<(), Error> {
    let mut machine = load_machine(path)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("(d) ");
        io::stdout().flush().map_err(write_err("<stdout>"))?;

        let line = match lines.next() {
            Some(line) => line.map_err(read_err("<stdin>"))?,
            None => return Ok(()),
        };

        match line.trim() {
            "quit" => return Ok(()),
            "step" => report(machine.step()),
            "steploop" => report(debugger::step_loop(&mut machine)),
            "stepjmp" => report(debugger::step_jmp(&mut machine)),
            "mem" => {
                let stdout = io::stdout();
                words::hexdump(machine.ram(), &mut stdout.lock()).map_err(write_err("<stdout>"))?;
            }
            "r" => println!("{}", debugger::rdump(&machine)),
            "op" => println!("{}", debugger::instruction_at(&machine)),
            "" => {}
            other => println!("unknown command: {:?}", other),
        }
    }
}

fn report(result: Result<(), dcpu::Error>) {
    if let Err(err) = result {
        println!("dcpu err: {}", err);
    }
}
