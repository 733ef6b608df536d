use std::process::ExitCode;

use clex_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    clex_driver::run(argument)
}
