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

use logloom::append;
use logloom::filter::EnvFilter;
use logloom::layout::PatternLayout;

fn main() {
    let layout = PatternLayout::new("%d %5p [%P] %c: %m (%F:%L)").unwrap();

    logloom::builder()
        .dispatch(|d| {
            d.filter(EnvFilter::from_default_env_or("debug"))
                .append(append::Stdout::default().with_layout(layout))
        })
        .apply();

    log::error!("Hello error!");
    log::warn!("Hello warn!");
    log::info!("Hello info!");
    log::debug!("Hello debug!");
    log::trace!("Hello trace!");
}
