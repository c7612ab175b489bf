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
use crate::event::{ErrorCallback, ParamCallback, ParseEvent};
use crate::help;
use crate::registry::Registry;
use crate::spec::ParamSpec;
use crate::token::tokenize;
use log::{debug, error, warn};
use std::io::Write;

/// The outcome of dispatching a single token against the registry. Dispatch
/// is resolved against the registry first and acted upon afterwards, so the
/// error callback never runs while a registry entry is borrowed.
enum Dispatch {
    /// The token matched a spec and its handler ran; the handler's verdict
    /// is carried along.
    Handled { had_error: bool },
    /// The token matched a spec which has no handler attached.
    MissingHandler,
    /// The token did not match any registered spec.
    Unregistered,
}

/// A Parser owns a registry of parameter specs and dispatches an argument
/// vector against them, aggregating per-parameter and overall outcomes.
///
/// All error kinds encountered during a parse pass are collected rather than
/// returned eagerly: the entire argument vector is always consumed, and the
/// aggregate verdict is queryable afterwards via `overall_success`. A panic
/// inside a caller-provided handler is not caught and propagates as usual.
pub struct Parser<'a> {
    registry: Registry<'a>,
    error_callback: Option<ErrorCallback<'a>>,
    /// False once any dispatch-time failure (an unmatched token, a missing
    /// handler, or a handler rejection) has been observed in this pass.
    all_parsed_successfully: bool,
}

impl<'a> Parser<'a> {
    /// Constructs a new Parser with an empty registry and no error callback.
    pub fn new() -> Parser<'a> {
        Parser {
            registry: Registry::new(),
            error_callback: None,
            all_parsed_successfully: true,
        }
    }

    /// Register a parameter spec. Fails, leaving the registry unchanged, if
    /// the spec's name is empty or the name (or the unnamed value slot it
    /// claims) is already registered.
    pub fn register(&mut self, spec: ParamSpec<'a>) -> Result<()> {
        self.registry.add(spec)
    }

    /// A convenience function to register a parameter in one call, without
    /// constructing the ParamSpec separately.
    pub fn register_callback(
        &mut self,
        name: &str,
        help: &str,
        required: bool,
        callback: ParamCallback<'a>,
    ) -> Result<()> {
        self.register(ParamSpec::new(name, help, required, callback))
    }

    /// Look up a registered definition by name, e.g. to inspect its parse
    /// state after a pass. Any name not starting with the parameter prefix
    /// (the empty string included) finds the definition occupying the
    /// unnamed value slot, mirroring how bare value tokens are dispatched.
    pub fn lookup(&self, name: &str) -> Option<&ParamSpec<'a>> {
        self.registry.lookup(name)
    }

    /// Install the callback invoked with the name of each token which cannot
    /// be matched against the registry, replacing any previous one. Not
    /// installing one is fine; unmatched tokens still fail the parse either
    /// way.
    pub fn set_error_callback(&mut self, callback: ErrorCallback<'a>) {
        self.error_callback = Some(callback);
    }

    /// Parse the given argument vector, invoking the matching handler (or
    /// the error callback) for each token in order, and return the overall
    /// verdict as per `overall_success`. Each token is self-contained; the
    /// accepted forms are "--name", "--name=value", and a bare value for the
    /// unnamed slot.
    ///
    /// If the same parameter occurs several times, its handler runs once per
    /// occurrence, and the recorded per-parameter state reflects the most
    /// recent invocation.
    pub fn parse(&mut self, args: &[String]) -> bool {
        for arg in args {
            let token = tokenize(arg);
            debug!("parameter: '{}' value: '{}'", token.name, token.value);
            self.dispatch(token.name, token.value);
        }
        self.overall_success()
    }

    /// Dispatch one (name, value) pair against the registry.
    fn dispatch(&mut self, name: &str, value: &str) {
        let outcome = match self.registry.lookup_mut(name) {
            None => Dispatch::Unregistered,
            Some(spec) => match spec.dispatch(ParseEvent::new(name, value)) {
                None => Dispatch::MissingHandler,
                Some(result) => {
                    if let Err(message) = &result {
                        warn!(
                            "invalid value for parameter '{}': {}",
                            spec.get_name(),
                            message
                        );
                    }
                    Dispatch::Handled {
                        had_error: result.is_err(),
                    }
                }
            },
        };

        match outcome {
            Dispatch::Handled { had_error: false } => (),
            Dispatch::Handled { had_error: true } => self.all_parsed_successfully = false,
            Dispatch::MissingHandler => {
                error!("parameter '{}' was registered without a handler", name);
                self.notify_error(name);
                self.all_parsed_successfully = false;
            }
            Dispatch::Unregistered => {
                self.notify_error(name);
                self.all_parsed_successfully = false;
            }
        }
    }

    /// Invoke the installed error callback, if any, with an unmatched name.
    fn notify_error(&mut self, name: &str) {
        if let Some(callback) = self.error_callback.as_mut() {
            callback(name);
        }
    }

    /// Returns the aggregate verdict of the parse pass: false if any
    /// dispatch-time failure was observed, if any required parameter was
    /// never dispatched, or if any parameter's most recent handler invocation
    /// rejected its value.
    ///
    /// Specs are scanned in registration order and the first failing one is
    /// identified in the log; the verdict itself does not depend on order.
    pub fn overall_success(&self) -> bool {
        if !self.all_parsed_successfully {
            debug!("parsing already failed during dispatch");
            return false;
        }

        for spec in self.registry.iter() {
            if spec.is_required() && !spec.was_parsed() {
                warn!("parameter '{}' is required", spec.get_name());
                return false;
            }

            if spec.had_error() {
                warn!("parameter '{}' had an invalid value", spec.get_name());
                return false;
            }
        }

        true
    }

    /// Clear all per-pass state - every spec's parsed / error flags, and the
    /// aggregate dispatch verdict - so this instance can run a fresh parse
    /// pass with the same registrations.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.all_parsed_successfully = true;
    }

    /// Returns the help listing for the registered parameters: one line per
    /// spec, in registration order.
    pub fn help_lines(&self) -> Vec<String> {
        help::render_help(&self.registry)
    }

    /// Write the help listing to the given writer, one parameter per line.
    /// Passing None is a no-op; this allows callers to thread an optional
    /// diagnostic stream through without branching.
    pub fn print_help<W: Write>(&self, f: Option<&mut W>) -> Result<()> {
        help::print_help(f, &self.registry)
    }
}
