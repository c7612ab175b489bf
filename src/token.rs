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

/// The prefix which distinguishes a named parameter token from a bare value.
pub(crate) const PARAMETER_PREFIX: &str = "--";

/// A Token is a single raw argument split into its parameter name and value
/// parts. The name is empty for a bare value (one destined for the unnamed
/// value slot).
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Token<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
}

/// Split one raw argument into a (name, value) Token.
///
/// An argument starting with the parameter prefix is split at the first '='
/// character: the part before it (prefix included) is the name, the part
/// after it is the value, which may be empty. Without an '=' the whole
/// argument is the name. Anything not starting with the prefix - including
/// strings shorter than the prefix itself - is a bare value with an empty
/// name.
pub(crate) fn tokenize(arg: &str) -> Token<'_> {
    if arg.starts_with(PARAMETER_PREFIX) {
        match arg.find('=') {
            None => Token {
                name: arg,
                value: "",
            },
            Some(idx) => Token {
                name: &arg[..idx],
                value: &arg[idx + 1..],
            },
        }
    } else {
        Token {
            name: "",
            value: arg,
        }
    }
}
