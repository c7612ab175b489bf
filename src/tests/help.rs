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

use crate::parser::Parser;
use crate::spec::ParamSpec;

fn build_parser<'a>() -> Parser<'a> {
    let mut parser = Parser::new();
    parser
        .register(ParamSpec::optional(
            "--help",
            "Displays help",
            Box::new(|_| Ok(())),
        ))
        .unwrap();
    parser
        .register(ParamSpec::required(
            "--mode",
            "Execution mode",
            Box::new(|_| Ok(())),
        ))
        .unwrap();
    parser
        .register(ParamSpec::required(
            "input",
            "Input file",
            Box::new(|_| Ok(())),
        ))
        .unwrap();
    parser
}

#[test]
fn test_help_lines_follow_registration_order() {
    let parser = build_parser();
    assert_eq!(
        vec![
            "--help (optional)\tDisplays help".to_owned(),
            "--mode (required)\tExecution mode".to_owned(),
            "input (required)\tInput file".to_owned(),
        ],
        parser.help_lines()
    );
}

// The unnamed value slot is listed under the name it was registered with,
// not under its empty dispatch key.
#[test]
fn test_unnamed_slot_is_listed_by_display_name() {
    let parser = build_parser();
    let lines = parser.help_lines();
    assert!(lines[2].starts_with("input "));
}

#[test]
fn test_print_help_writes_one_line_per_parameter() {
    let parser = build_parser();

    let mut buffer: Vec<u8> = vec![];
    parser.print_help(Some(&mut buffer)).unwrap();

    let rendered = String::from_utf8(buffer).unwrap();
    assert_eq!(
        "--help (optional)\tDisplays help\n\
         --mode (required)\tExecution mode\n\
         input (required)\tInput file\n",
        rendered
    );
}

#[test]
fn test_print_help_without_writer_is_a_noop() {
    let parser = build_parser();
    assert!(parser.print_help::<Vec<u8>>(None).is_ok());
}
