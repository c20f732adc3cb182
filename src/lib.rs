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

//! Logloom is a logging framework for Rust applications, built around conversion-pattern
//! layouts and easy log dispatching.
//!
//! # Overview
//!
//! Logloom formats log records with [`PatternLayout`](layout::PatternLayout), a compiled
//! `%[flags][width][.precision]<code>` conversion pattern in the tradition of
//! log4j/log4perl pattern layouts. It supports elapsed-time fields (`%r` since process
//! start, `%R` since the previous record), timestamps, caller locations, and custom
//! field resolvers. You can set up multiple log dispatches with different filters and
//! appenders, and it integrates seamlessly with the `log` crate.
//!
//! # Examples
//!
//! Simple setup with default stdout appender:
//!
//! ```
//! logloom::stdout().apply();
//!
//! log::info!("This is an info message.");
//! ```
//!
//! Advanced setup with a custom pattern and multiple appenders:
//!
//! ```
//! use logloom::append;
//! use logloom::layout::PatternLayout;
//! use logloom::record::LevelFilter;
//!
//! logloom::builder()
//!     .dispatch(|d| {
//!         d.filter(LevelFilter::Error)
//!             .append(append::Stderr::default())
//!     })
//!     .dispatch(|d| {
//!         let layout = PatternLayout::new("%d{%H:%M:%S} %5p %c: %m").unwrap();
//!         d.filter(LevelFilter::Info)
//!             .append(append::Stdout::default().with_layout(layout))
//!     })
//!     .apply();
//!
//! log::error!("Error message.");
//! log::info!("Info message.");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod clock;
pub mod filter;
pub mod layout;
pub mod record;

mod bridge;
mod error;
mod logger;

pub use append::Append;
pub use error::Error;
pub use filter::Filter;
pub use layout::Layout;
pub use logger::*;
