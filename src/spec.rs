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

use crate::event::{HandlerResult, ParamCallback, ParseEvent};
use crate::token::PARAMETER_PREFIX;
use std::fmt;

/// A ParamSpec describes a single command-line parameter: the name it is
/// matched by, whether the parser requires it to appear, the help text shown
/// for it, and the handler invoked with its parsed occurrences.
///
/// A name starting with "--" describes an ordinary named parameter. Any other
/// name describes the single unnamed value slot: the spec is matched by a
/// bare value token instead of its name, and the name only serves as the
/// display label in help and diagnostic output.
pub struct ParamSpec<'a> {
    /// The name exactly as registered.
    name: String,
    /// The help string to print out for this parameter when applicable.
    help: String,
    /// Whether overall parsing success requires this parameter to have been
    /// dispatched at least once.
    required: bool,
    /// The handler to invoke per matched occurrence. A spec without a handler
    /// is dispatchable, but dispatching it is a configuration fault.
    callback: Option<ParamCallback<'a>>,
    /// Set once any occurrence of this parameter has been dispatched.
    parsed: bool,
    /// The verdict of the most recent handler invocation.
    had_error: bool,
}

impl<'a> ParamSpec<'a> {
    /// Constructs a ParamSpec with the given properties. The `required` and
    /// `optional` constructors are usually more convenient.
    pub fn new(name: &str, help: &str, required: bool, callback: ParamCallback<'a>) -> ParamSpec<'a> {
        ParamSpec {
            name: name.to_owned(),
            help: help.to_owned(),
            required: required,
            callback: Some(callback),
            parsed: false,
            had_error: false,
        }
    }

    /// Constructs a ParamSpec which must be observed in the argument vector
    /// for parsing to succeed overall.
    pub fn required(name: &str, help: &str, callback: ParamCallback<'a>) -> ParamSpec<'a> {
        ParamSpec::new(name, help, true, callback)
    }

    /// Constructs a ParamSpec which may or may not appear in the argument
    /// vector.
    pub fn optional(name: &str, help: &str, callback: ParamCallback<'a>) -> ParamSpec<'a> {
        ParamSpec::new(name, help, false, callback)
    }

    /// Constructs a ParamSpec with no handler attached. Such a spec still
    /// appears in help output, but dispatching it is reported as a
    /// configuration fault and fails the parse, so this is only useful as a
    /// placeholder while a front-end is being wired up.
    pub fn unhandled(name: &str, help: &str, required: bool) -> ParamSpec<'a> {
        ParamSpec {
            name: name.to_owned(),
            help: help.to_owned(),
            required: required,
            callback: None,
            parsed: false,
            had_error: false,
        }
    }

    /// Returns the name this spec was registered with. For a positional spec
    /// this is the display label for the unnamed value slot.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable help text for this parameter.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns true if overall parsing success requires this parameter to
    /// have been observed.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if this spec occupies the unnamed value slot (that is,
    /// its registered name does not start with the parameter prefix).
    pub fn is_positional(&self) -> bool {
        !self.name.starts_with(PARAMETER_PREFIX)
    }

    /// Returns true once any occurrence of this parameter has been
    /// dispatched in the current parse pass.
    pub fn was_parsed(&self) -> bool {
        self.parsed
    }

    /// Returns true if the most recent handler invocation for this parameter
    /// rejected its value.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Invoke this spec's handler with the given event, recording the parsed
    /// and error state from the invocation. Returns None, without touching
    /// any state, if this spec has no handler.
    pub(crate) fn dispatch(&mut self, event: ParseEvent) -> Option<HandlerResult> {
        match self.callback.as_mut() {
            None => None,
            Some(callback) => {
                let result = callback(event);
                self.had_error = result.is_err();
                self.parsed = true;
                Some(result)
            }
        }
    }

    /// Clear the per-pass parse state, so this spec behaves as if it had
    /// never been dispatched.
    pub(crate) fn reset(&mut self) {
        self.parsed = false;
        self.had_error = false;
    }
}

impl<'a> fmt::Debug for ParamSpec<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(
            format!(
                "ParamSpec {{ {:#?}, {:#?}, required: {:#?}, parsed: {:#?}, had_error: {:#?} }}",
                self.name, self.help, self.required, self.parsed, self.had_error
            )
            .as_str(),
        )
    }
}
