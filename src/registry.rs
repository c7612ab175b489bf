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
use crate::spec::ParamSpec;
use crate::token::PARAMETER_PREFIX;

/// Returns the key a spec with the given registered name is dispatched under:
/// the name itself for named parameters, or the empty string for the spec
/// occupying the unnamed value slot. This matches the name part a Token
/// carries after splitting a raw argument.
fn dispatch_key(name: &str) -> String {
    match name.starts_with(PARAMETER_PREFIX) {
        true => name.to_owned(),
        false => String::new(),
    }
}

/// One registry entry: a spec plus the key it is dispatched under.
struct Registration<'a> {
    key: String,
    spec: ParamSpec<'a>,
}

/// A Registry is the ordered collection of registered ParamSpec structures.
/// Dispatch looks entries up by key; help and validation traverse them in
/// registration order.
pub(crate) struct Registry<'a> {
    params: Vec<Registration<'a>>,
}

impl<'a> Registry<'a> {
    pub(crate) fn new() -> Registry<'a> {
        Registry { params: vec![] }
    }

    /// Add a spec to the registry. This fails if the spec's name is empty, if
    /// the name is already registered, or if the spec describes the unnamed
    /// value slot and another spec already occupies it. On failure the
    /// registry is left unchanged.
    pub(crate) fn add(&mut self, spec: ParamSpec<'a>) -> Result<()> {
        if spec.get_name().is_empty() {
            return Err(Error::EmptyName);
        }

        let key = dispatch_key(spec.get_name());
        if let Some(existing) = self.params.iter().find(|r| r.key == key) {
            return Err(match key.is_empty() {
                true => Error::PositionalSlotOccupied(existing.spec.get_name().to_owned()),
                false => Error::DuplicateParameter(spec.get_name().to_owned()),
            });
        }

        self.params.push(Registration {
            key: key,
            spec: spec,
        });
        Ok(())
    }

    /// Locate the spec matched by the given name, if any. Any name not
    /// starting with the parameter prefix (the empty string included) finds
    /// the spec occupying the unnamed value slot, mirroring how bare value
    /// tokens are dispatched.
    pub(crate) fn lookup(&self, name: &str) -> Option<&ParamSpec<'a>> {
        let key = dispatch_key(name);
        self.params.iter().find(|r| r.key == key).map(|r| &r.spec)
    }

    /// The mutable counterpart of `lookup`, used during dispatch.
    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut ParamSpec<'a>> {
        let key = dispatch_key(name);
        self.params
            .iter_mut()
            .find(|r| r.key == key)
            .map(|r| &mut r.spec)
    }

    /// Returns an Iterator over the registered specs, in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &ParamSpec<'a>> {
        self.params.iter().map(|r| &r.spec)
    }

    /// Clear the per-pass parse state of every registered spec.
    pub(crate) fn reset(&mut self) {
        for registration in self.params.iter_mut() {
            registration.spec.reset();
        }
    }
}
