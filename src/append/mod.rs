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

//! Appenders for writing formatted log records to different destinations.

use std::fmt;

use crate::Error;
use crate::record::Record;

mod memory;
mod stdio;
mod testing;

pub use memory::Memory;
pub use memory::MemoryBuffer;
pub use stdio::Stderr;
pub use stdio::Stdout;
pub use testing::Testing;

/// A trait representing an appender that writes log records to a destination.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Dispatches a log record to this appender.
    fn append(&self, record: &Record) -> Result<(), Error>;

    /// Flushes any buffered records.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(append: T) -> Self {
        Box::new(append)
    }
}
