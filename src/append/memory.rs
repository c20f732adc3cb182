// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::Mutex;

use crate::Error;
use crate::append::Append;
use crate::layout::Layout;
use crate::layout::PatternLayout;
use crate::record::Record;

/// An appender that collects formatted records in memory.
///
/// Useful for inspecting exactly what a layout produced, in tests or when
/// capturing output for later processing. Lines are retrieved through the
/// shared [`MemoryBuffer`] handle.
///
/// # Examples
///
/// ```
/// use logloom::append::Memory;
/// use logloom::layout::PatternLayout;
///
/// let append = Memory::default().with_layout(PatternLayout::new("%p %m").unwrap());
/// let buffer = append.buffer();
/// ```
#[derive(Debug)]
pub struct Memory {
    layout: Box<dyn Layout>,
    buffer: MemoryBuffer,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            layout: Box::new(PatternLayout::default()),
            buffer: MemoryBuffer::default(),
        }
    }
}

impl Memory {
    /// Sets the layout used to format records.
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Returns a handle to the buffer this appender writes into.
    ///
    /// The handle stays valid after the appender is moved into a logger.
    pub fn buffer(&self) -> MemoryBuffer {
        self.buffer.clone()
    }
}

impl Append for Memory {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let bytes = self.layout.format(record)?;
        self.buffer.push(String::from_utf8_lossy(&bytes).into_owned());
        Ok(())
    }
}

/// A shared handle to the lines collected by a [`Memory`] appender.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryBuffer {
    fn push(&self, line: String) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(line);
    }

    /// Returns a snapshot of the collected lines.
    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.clone()
    }

    /// Removes and returns the collected lines.
    pub fn drain(&self) -> Vec<String> {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *lines)
    }
}
