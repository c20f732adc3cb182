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

use std::str::FromStr;

use jiff::SignedDuration;
use jiff::Timestamp;
use logloom::Error;
use logloom::Layout;
use logloom::append::Memory;
use logloom::clock::ManualClock;
use logloom::layout::PatternLayout;
use logloom::record::Level;
use logloom::record::LevelFilter;
use logloom::record::Record;
use logloom::record::RecordBuilder;

fn t0() -> Timestamp {
    Timestamp::from_str("2024-01-01T00:00:00Z").unwrap()
}

fn log_step(logger: &logloom::Logger, level: Level) {
    let record = RecordBuilder::default()
        .level(level)
        .target("split::check")
        .args(format_args!("tick"))
        .build();
    logger.log(&record);
}

// Two appenders observe the same stream of records, but one sits behind a
// level threshold. Each appender's layout tracks its own since-last state, so
// intervals the filtered appender never saw show up merged into its next
// value, and the unfiltered intervals sum to the same total.
#[test]
fn test_threshold_split_preserves_interval_sums() {
    let clock = ManualClock::new(t0());

    let all = Memory::default()
        .with_layout(PatternLayout::new("%R").unwrap().with_clock(clock.clone()));
    let all_lines = all.buffer();

    let filtered = Memory::default()
        .with_layout(PatternLayout::new("%R").unwrap().with_clock(clock.clone()));
    let filtered_lines = filtered.buffer();

    let logger = logloom::builder()
        .dispatch(|d| d.append(all))
        .dispatch(|d| d.filter(LevelFilter::Info).append(filtered))
        .build();

    let steps = [
        (0, Level::Info),
        (1000, Level::Debug),
        (2000, Level::Info),
        (1000, Level::Debug),
        (1000, Level::Info),
    ];
    for (advance, level) in steps {
        clock.advance(SignedDuration::from_millis(advance));
        log_step(&logger, level);
    }

    let a: Vec<i64> = all_lines
        .lines()
        .iter()
        .map(|line| line.parse().unwrap())
        .collect();
    let b: Vec<i64> = filtered_lines
        .lines()
        .iter()
        .map(|line| line.parse().unwrap())
        .collect();

    assert_eq!(a, vec![0, 1000, 2000, 1000, 1000]);
    assert_eq!(b, vec![0, 3000, 2000]);

    // the filtered stream merges the intervals it never saw
    assert_eq!(b[0], a[0]);
    assert_eq!(b[1], a[1] + a[2]);
    assert_eq!(b[2], a[3] + a[4]);
}

#[test]
fn test_since_start_agrees_across_appenders() {
    let clock = ManualClock::new(t0());

    let first = Memory::default()
        .with_layout(PatternLayout::new("%r").unwrap().with_clock(clock.clone()));
    let first_lines = first.buffer();

    let second = Memory::default()
        .with_layout(PatternLayout::new("%r").unwrap().with_clock(clock.clone()));
    let second_lines = second.buffer();

    let logger = logloom::builder()
        .dispatch(|d| d.append(first))
        .dispatch(|d| d.append(second))
        .build();

    for advance in [250, 750, 4000] {
        clock.advance(SignedDuration::from_millis(advance));
        log_step(&logger, Level::Info);
    }

    // %r measures from a shared origin, so both appenders report the same values
    assert_eq!(first_lines.lines(), second_lines.lines());
    assert_eq!(first_lines.lines(), vec!["250", "1000", "5000"]);
}

#[derive(Debug)]
struct HeaderLayout(&'static str);

impl Layout for HeaderLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        Ok(format!("{} [{}] {}", self.0, record.level(), record.args()).into_bytes())
    }
}

#[test]
fn test_custom_layout_in_dispatch() {
    let append = Memory::default().with_layout(HeaderLayout("worker"));
    let lines = append.buffer();

    let logger = logloom::builder().dispatch(|d| d.append(append)).build();

    let record = RecordBuilder::default()
        .level(Level::Warn)
        .args(format_args!("queue is backed up"))
        .build();
    logger.log(&record);

    assert_eq!(lines.lines(), vec!["worker [WARN] queue is backed up"]);
}
