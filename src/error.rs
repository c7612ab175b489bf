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

use thiserror::Error;

/// Error represents the various errors which can come up while registering
/// command-line parameters or emitting diagnostics about them. Note that a
/// *handler* rejecting a value is not an Error - that outcome is aggregated
/// into the parser's overall success state instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was registered with more than one definition. The failed
    /// registration leaves the original definition untouched.
    #[error("parameter '{0}' is already registered")]
    DuplicateParameter(String),
    /// A parameter was registered with an empty name.
    #[error("empty parameter name")]
    EmptyName,
    /// An I/O error, generally encountered when writing help output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A second parameter tried to claim the single unnamed value slot. The
    /// name carried here is the display name of the definition which already
    /// occupies it.
    #[error("the unnamed value slot is already registered as '{0}'")]
    PositionalSlotOccupied(String),
}

/// A Result type which uses this crate's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
