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

use std::thread;
use std::time::Duration;

use logloom::append;
use logloom::layout::PatternLayout;

fn main() {
    let layout = PatternLayout::new("+%Rms (total %rms) %5p %m").unwrap();

    logloom::builder()
        .dispatch(|d| d.append(append::Stdout::default().with_layout(layout)))
        .apply();

    log::info!("starting up");
    thread::sleep(Duration::from_millis(250));
    log::info!("connected");
    thread::sleep(Duration::from_millis(750));
    log::warn!("slow response");
    log::info!("done");
}
