// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::parser::Parser;
use std::env;
use std::process;

/// The integer which is returned from main() if the program exits
/// successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub const EXIT_FAILURE: i32 = 1;

/// Returns the current program's parameters (accessed essentially via
/// `std::env::args`) collected into a Vec. The 0'th parameter (the
/// executable) is omitted.
pub fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

/// Builds a parser via the given setup callback, parses this process's
/// argument vector with it, and exits the process with an appropriate exit
/// code.
///
/// The setup callback performs the registrations (and may install an error
/// callback); a registration error is printed to stderr and treated as a
/// failed run. Like `std::process::exit`, because this function never returns
/// and it terminates the process, no destructors on the current stack or any
/// other thread's stack will be run. The caller should ensure that this
/// function is called from the only thread, and that any destructors which
/// need to be run are in the stack of the parameter handlers.
pub fn main_impl<F>(setup: F) -> !
where
    F: for<'p> FnOnce(&mut Parser<'p>) -> Result<()>,
{
    let mut parser = Parser::new();
    if let Err(e) = setup(&mut parser) {
        eprintln!(
            "Error configuring command-line parser: {}",
            match cfg!(debug_assertions) {
                false => e.to_string(),
                true => format!("{:?}", e),
            }
        );
        process::exit(EXIT_FAILURE);
    }

    let args = get_program_parameters();
    process::exit(match parser.parse(&args) {
        true => EXIT_SUCCESS,
        false => EXIT_FAILURE,
    });
}
