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

/// A ParseEvent is the value handed to a parameter handler, once per matched
/// occurrence of its parameter in the argument vector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseEvent {
    /// The parameter name as it was matched, including the "--" prefix. This
    /// is empty when the event describes the unnamed value slot.
    pub name: String,
    /// The raw value string associated with the parameter. This is empty when
    /// no value was supplied (e.g. "--verbose").
    pub value: String,
}

impl ParseEvent {
    /// A convenience function to construct a new ParseEvent from borrowed
    /// name and value strings.
    pub fn new(name: &str, value: &str) -> ParseEvent {
        ParseEvent {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// The result of a single handler invocation: Ok if the handler accepted the
/// parsed value, or Err with a human-readable reason if it did not. A
/// rejection does not halt parsing; it is recorded against the parameter and
/// aggregated into the parser's overall success state.
pub type HandlerResult = std::result::Result<(), String>;

/// The caller-provided callback trait object which is invoked each time its
/// parameter is matched in the argument vector.
pub type ParamCallback<'a> = Box<dyn FnMut(ParseEvent) -> HandlerResult + 'a>;

/// The caller-provided callback trait object which is invoked with the name
/// of any token which could not be matched against a registered parameter.
/// Its only job is notification, so it has no return value.
pub type ErrorCallback<'a> = Box<dyn FnMut(&str) + 'a>;
