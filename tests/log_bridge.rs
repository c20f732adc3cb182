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

use logloom::append::Memory;
use logloom::layout::PatternLayout;

// This test installs the global logger, so everything that exercises the
// bridge lives in this single test function.
#[test]
fn test_records_flow_from_log_macros() {
    let append = Memory::default().with_layout(PatternLayout::new("%p %c %m (%F)").unwrap());
    let buffer = append.buffer();

    logloom::builder().dispatch(|d| d.append(append)).apply();

    log::info!(target: "bridge::check", "over the bridge");
    log::trace!(target: "bridge::check", "also recorded");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!("INFO bridge::check over the bridge ({})", file!())
    );
    assert_eq!(
        lines[1],
        format!("TRACE bridge::check also recorded ({})", file!())
    );

    log::logger().flush();
}
