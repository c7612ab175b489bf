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

use crate::event::ParseEvent;
use std::sync::Mutex;

/// This is a structure which records the parameter handler and error callback
/// invocations a parser performs, so a test can assert on them afterwards.
/// Because it has internal synchronization, the recording functions can be
/// called from inside callbacks without the callbacks having to capture any
/// mutable reference.
pub struct HandlerInstrumentation {
    invocations: Mutex<Vec<(String, String)>>,
    unmatched: Mutex<Vec<String>>,
}

impl HandlerInstrumentation {
    /// Construct a new instrumentation state with no recorded invocations.
    pub fn new() -> HandlerInstrumentation {
        HandlerInstrumentation {
            invocations: Mutex::new(vec![]),
            unmatched: Mutex::new(vec![]),
        }
    }

    /// Record that a parameter handler was invoked with the given event.
    pub fn record_invocation(&self, event: &ParseEvent) {
        let mut data = self.invocations.lock().unwrap();
        data.push((event.name.clone(), event.value.clone()));
    }

    /// Record that the error callback was invoked with the given unmatched
    /// name.
    pub fn record_unmatched(&self, name: &str) {
        let mut data = self.unmatched.lock().unwrap();
        data.push(name.to_owned());
    }

    /// Return the current number of handler invocations recorded.
    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    /// Return the recorded handler invocations, as (name, value) pairs in
    /// invocation order.
    pub fn invocations(&self) -> Vec<(String, String)> {
        self.invocations.lock().unwrap().clone()
    }

    /// Return the recorded unmatched names, in invocation order.
    pub fn unmatched(&self) -> Vec<String> {
        self.unmatched.lock().unwrap().clone()
    }
}
