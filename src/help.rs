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
use crate::registry::Registry;
use std::io::Write;

/// Render the help listing for the given registry: one line per registered
/// spec, in registration order. Each line carries the display name, the
/// required / optional marker, and the help text verbatim.
pub(crate) fn render_help(registry: &Registry) -> Vec<String> {
    registry
        .iter()
        .map(|spec| {
            format!(
                "{} ({})\t{}",
                spec.get_name(),
                match spec.is_required() {
                    true => "required",
                    false => "optional",
                },
                spec.get_help()
            )
        })
        .collect()
}

/// Write the rendered help listing to the given writer, one line per spec.
pub(crate) fn print_help<W: Write>(f: Option<&mut W>, registry: &Registry) -> Result<()> {
    if f.is_none() {
        return Ok(());
    }
    let f = f.unwrap();

    for line in render_help(registry) {
        f.write_fmt(format_args!("{}\n", line))?;
    }

    Ok(())
}
