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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! clparams is a small library for callback-driven command-line parameter
// parsing: callers register named parameters (plus at most one unnamed value
// slot) along with the handlers to invoke for them, parse the process's
// argument vector against those registrations, and then query the aggregate
// verdict. Dispatch-time diagnostics are emitted through the standard `log`
// facade, so the consumer's logger configuration decides their visibility.

/// error defines the error types this crate surfaces from registration and
/// help output, along with a matching Result alias.
pub mod error;
/// event defines the values exchanged with caller-provided callbacks: the
/// per-occurrence ParseEvent, and the callback type aliases themselves.
pub mod event;
/// main_impl provides the glue for using a Parser directly from a program's
/// entry point.
pub mod main_impl;
/// parser implements dispatching an argument vector against the registered
/// parameters, and the aggregate success check.
pub mod parser;
/// spec defines the per-parameter registration data: name, handler, required
/// flag, help text, and per-pass parse state.
pub mod spec;
/// testing provides utilities which are useful for unit testing code built
/// on top of this crate.
pub mod testing;

mod help;
mod registry;
mod token;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use crate::error::{Error, Result};
pub use crate::event::{ErrorCallback, HandlerResult, ParamCallback, ParseEvent};
pub use crate::parser::Parser;
pub use crate::spec::ParamSpec;
