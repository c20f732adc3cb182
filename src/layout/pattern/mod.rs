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

use std::collections::HashMap;
use std::fmt;
use std::fmt::Write;
use std::sync::Mutex;

#[cfg(feature = "colored")]
use colored::Color;
use jiff::Timestamp;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

use crate::Error;
use crate::clock::Clock;
use crate::layout::Layout;
use crate::record::Record;

mod parse;

use self::parse::Chunk;
use self::parse::FieldDirective;
use self::parse::FormatSpec;

/// Token rendered in place of a directive whose field code has no resolver.
const FORMAT_ERROR_TOKEN: &str = "FORMAT-ERROR";

/// Pattern used by [`PatternLayout::default`].
const DEFAULT_PATTERN: &str = "%d %5p %c: %F:%L %m";

/// Date format used by `%d` when no argument is given.
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6f%:z";

/// Field codes with built-in resolvers; custom resolvers cannot take these.
const BUILTIN_CODES: [char; 12] = ['m', 'c', 'p', 'd', 'F', 'L', 'M', 'l', 'P', 'r', 'R', 'n'];

type FieldResolver = dyn Fn(&Record) -> String + Send + Sync + 'static;

/// What `%R` reports for the first record an instance renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FirstEventElapsed {
    /// The first record reports zero elapsed time.
    #[default]
    Zero,
    /// The first record reports the time elapsed since process start.
    SinceProcessStart,
}

/// A layout driven by a conversion pattern, in the classic
/// `%[flags][width][.precision]<code>[{arg}]` mini-language.
///
/// The pattern is compiled once at construction; rendering a record walks the
/// compiled directives and resolves only the fields the pattern mentions.
///
/// Built-in field codes:
///
/// | code | value |
/// |------|-------|
/// | `m`  | message text |
/// | `c`  | category (target); `%c{n}` keeps the last *n* `::` segments |
/// | `p`  | level name |
/// | `d`  | record timestamp, ISO 8601 by default; `%d{...}` takes a [strftime][jiff::fmt::strtime] format |
/// | `F`  | source file |
/// | `L`  | source line |
/// | `M`  | module path |
/// | `l`  | caller location, `module (file:line)` |
/// | `P`  | process id |
/// | `r`  | milliseconds since process start |
/// | `R`  | milliseconds since the previous record rendered by this instance |
/// | `n`  | newline |
///
/// `%%` renders a literal percent sign. Width and precision carry printf
/// semantics: `%5p` pads right-aligned to five columns, `%-5p` pads
/// left-aligned, and `%.3p` truncates to three characters.
///
/// `%r` and `%R` share a single clock sample per rendered record, and the
/// since-last state is scoped to the layout instance: two appenders with
/// their own pattern layouts track their own intervals. On clocks without
/// sub-second resolution both codes fall back to whole seconds.
///
/// A directive whose code is neither built in nor registered with
/// [`resolver`](PatternLayout::resolver) renders an inline `FORMAT-ERROR`
/// token instead of failing the record.
///
/// # Examples
///
/// ```
/// use logloom::layout::PatternLayout;
///
/// let layout = PatternLayout::new("%d{%H:%M:%S} %5p %c: %m").unwrap();
/// ```
///
/// Tracking time between records:
///
/// ```
/// use logloom::layout::PatternLayout;
///
/// let layout = PatternLayout::new("+%Rms %m").unwrap();
/// ```
pub struct PatternLayout {
    pattern: String,
    chunks: Vec<Chunk>,
    uses_elapsed: bool,
    resolvers: HashMap<char, Box<FieldResolver>>,
    clock: Clock,
    first_event: FirstEventElapsed,
    tz: Option<TimeZone>,
    #[cfg(feature = "colored")]
    colors: Option<LevelColor>,
    state: Mutex<ElapsedState>,
}

#[derive(Debug, Default)]
struct ElapsedState {
    last_event: Option<Timestamp>,
    advised_low_resolution: bool,
}

#[derive(Debug, Clone, Copy)]
struct Elapsed {
    since_start: u64,
    since_last: u64,
}

impl PatternLayout {
    /// Compile `pattern` into a new layout.
    ///
    /// # Errors
    ///
    /// Return an error if the pattern is structurally malformed: a dangling
    /// `%`, a non-letter field code, a precision without digits, an
    /// unterminated `{` argument, an invalid `%d` date format, or a `%c`
    /// segment count that is not a positive integer. An unknown field code
    /// is not a compile error; it reports inline at render time.
    pub fn new(pattern: impl Into<String>) -> Result<Self, Error> {
        let pattern = pattern.into();
        let chunks = parse::parse(&pattern)?;
        for chunk in &chunks {
            let Chunk::Field(directive) = chunk else {
                continue;
            };
            match (directive.code, directive.arg.as_deref()) {
                ('d', Some(format)) => validate_date_format(&pattern, format)?,
                ('c', Some(count)) => validate_segment_count(&pattern, count)?,
                _ => {}
            }
        }
        let uses_elapsed = chunks
            .iter()
            .any(|chunk| matches!(chunk, Chunk::Field(d) if d.code == 'r' || d.code == 'R'));
        Ok(Self {
            pattern,
            chunks,
            uses_elapsed,
            resolvers: HashMap::new(),
            clock: Clock::default(),
            first_event: FirstEventElapsed::default(),
            tz: None,
            #[cfg(feature = "colored")]
            colors: None,
            state: Mutex::new(ElapsedState::default()),
        })
    }

    /// Set the clock that `%r` and `%R` read.
    ///
    /// Defaults to the system clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use logloom::clock::ManualClock;
    /// use logloom::layout::PatternLayout;
    ///
    /// let clock = ManualClock::new(Timestamp::UNIX_EPOCH);
    /// let layout = PatternLayout::new("%r %m").unwrap().with_clock(clock.clone());
    /// ```
    pub fn with_clock(mut self, clock: impl Into<Clock>) -> Self {
        self.clock = clock.into();
        self
    }

    /// Set what `%R` reports for the first record this instance renders.
    ///
    /// # Examples
    ///
    /// ```
    /// use logloom::layout::FirstEventElapsed;
    /// use logloom::layout::PatternLayout;
    ///
    /// let layout = PatternLayout::new("%R %m")
    ///     .unwrap()
    ///     .first_event_elapsed(FirstEventElapsed::SinceProcessStart);
    /// ```
    pub fn first_event_elapsed(mut self, policy: FirstEventElapsed) -> Self {
        self.first_event = policy;
        self
    }

    /// Set the timezone for `%d` timestamps.
    ///
    /// Defaults to the system timezone if not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logloom::layout::PatternLayout;
    ///
    /// let layout = PatternLayout::new("%d %m").unwrap().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Register a resolver for an extra field code.
    ///
    /// The resolver runs once per rendered record in which `code` appears;
    /// width and precision apply to its result like any built-in field.
    ///
    /// # Panics
    ///
    /// Panic if `code` is one of the built-in field codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use logloom::layout::PatternLayout;
    ///
    /// let layout = PatternLayout::new("%p [%t] %m")
    ///     .unwrap()
    ///     .resolver('t', |record| record.target().to_uppercase());
    /// ```
    pub fn resolver(
        mut self,
        code: char,
        resolve: impl Fn(&Record) -> String + Send + Sync + 'static,
    ) -> Self {
        assert!(
            !BUILTIN_CODES.contains(&code),
            "field code '{code}' is reserved by the built-in resolvers"
        );
        self.resolvers.insert(code, Box::new(resolve));
        self
    }

    /// Colorize `%p` with the default per-level colors.
    #[cfg(feature = "colored")]
    pub fn colorize_levels(mut self) -> Self {
        self.colors = Some(LevelColor::default());
        self
    }

    /// Colorize `%p` with the given per-level colors.
    #[cfg(feature = "colored")]
    pub fn level_colors(mut self, colors: LevelColor) -> Self {
        self.colors = Some(colors);
        self
    }

    // Sample the clock once and roll the since-last state forward. The lock
    // spans the whole read-compute-update so concurrent renders serialize
    // and no interval is counted twice or dropped.
    fn take_elapsed(&self) -> Elapsed {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now();
        let high_resolution = self.clock.is_high_resolution();
        if !high_resolution && !state.advised_low_resolution {
            state.advised_low_resolution = true;
            eprintln!(
                "logloom: clock has no sub-second resolution; %r and %R fall back to whole seconds"
            );
        }
        let since_start = elapsed_units(self.clock.start_time(), now, high_resolution);
        let since_last = match state.last_event {
            Some(last) => elapsed_units(last, now, high_resolution),
            None => match self.first_event {
                FirstEventElapsed::Zero => 0,
                FirstEventElapsed::SinceProcessStart => since_start,
            },
        };
        state.last_event = Some(now);
        Elapsed {
            since_start,
            since_last,
        }
    }

    fn append_field(
        &self,
        out: &mut String,
        directive: &FieldDirective,
        record: &Record,
        elapsed: Option<Elapsed>,
    ) {
        #[cfg(feature = "colored")]
        let color = if directive.code == 'p' {
            self.colors.as_ref().map(|colors| colors.for_level(record.level()))
        } else {
            None
        };

        if directive.spec.is_plain() {
            #[cfg(feature = "colored")]
            if let Some(color) = color {
                use colored::Colorize;
                // SAFETY: write to a string always succeeds
                write!(out, "{}", record.level().as_str().color(color)).unwrap();
                return;
            }
            self.resolve_into(out, directive, record, elapsed);
            return;
        }

        let mut value = String::new();
        self.resolve_into(&mut value, directive, record, elapsed);
        let value = apply_spec(directive.spec, value);

        #[cfg(feature = "colored")]
        if let Some(color) = color {
            use colored::Colorize;
            // colorize after padding so escape sequences don't count as width
            // SAFETY: write to a string always succeeds
            write!(out, "{}", value.as_str().color(color)).unwrap();
            return;
        }

        out.push_str(&value);
    }

    // `elapsed` is `Some` whenever the compiled pattern contains %r or %R.
    fn resolve_into(
        &self,
        out: &mut String,
        directive: &FieldDirective,
        record: &Record,
        elapsed: Option<Elapsed>,
    ) {
        // SAFETY: write to a string always succeeds
        match directive.code {
            'm' => write!(out, "{}", record.args()).unwrap(),
            'c' => match directive.arg.as_deref().and_then(|count| count.parse().ok()) {
                Some(keep) => out.push_str(shorten_category(record.target(), keep)),
                None => out.push_str(record.target()),
            },
            'p' => out.push_str(record.level().as_str()),
            'd' => self.append_date(out, directive.arg.as_deref(), record),
            'F' => out.push_str(record.file().unwrap_or_default()),
            'L' => {
                if let Some(line) = record.line() {
                    write!(out, "{line}").unwrap();
                }
            }
            'M' => out.push_str(record.module_path().unwrap_or_default()),
            'l' => {
                let module = record.module_path().unwrap_or_default();
                let file = record.file().unwrap_or_default();
                let line = record.line().unwrap_or_default();
                write!(out, "{module} ({file}:{line})").unwrap();
            }
            'P' => write!(out, "{}", std::process::id()).unwrap(),
            'r' => {
                if let Some(elapsed) = elapsed {
                    write!(out, "{}", elapsed.since_start).unwrap();
                }
            }
            'R' => {
                if let Some(elapsed) = elapsed {
                    write!(out, "{}", elapsed.since_last).unwrap();
                }
            }
            'n' => out.push('\n'),
            code => match self.resolvers.get(&code) {
                Some(resolve) => out.push_str(&resolve(record)),
                None => out.push_str(FORMAT_ERROR_TOKEN),
            },
        }
    }

    fn append_date(&self, out: &mut String, format: Option<&str>, record: &Record) {
        let ts = match Timestamp::try_from(record.time()) {
            Ok(ts) => ts,
            Err(_) => {
                out.push_str(FORMAT_ERROR_TOKEN);
                return;
            }
        };
        let tz = self.tz.clone().unwrap_or_else(TimeZone::system);
        let zoned = ts.to_zoned(tz);
        match strtime::format(format.unwrap_or(DEFAULT_DATE_FORMAT), &zoned) {
            Ok(text) => out.push_str(&text),
            Err(_) => out.push_str(FORMAT_ERROR_TOKEN),
        }
    }
}

impl Default for PatternLayout {
    fn default() -> Self {
        // SAFETY: the default pattern is a valid conversion pattern
        PatternLayout::new(DEFAULT_PATTERN).unwrap()
    }
}

impl fmt::Debug for PatternLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternLayout")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl Layout for PatternLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let elapsed = self.uses_elapsed.then(|| self.take_elapsed());
        let mut out = String::with_capacity(self.pattern.len() + 48);
        for chunk in &self.chunks {
            match chunk {
                Chunk::Literal(text) => out.push_str(text),
                Chunk::Field(directive) => self.append_field(&mut out, directive, record, elapsed),
            }
        }
        Ok(out.into_bytes())
    }
}

fn elapsed_units(earlier: Timestamp, now: Timestamp, high_resolution: bool) -> u64 {
    let units = if high_resolution {
        now.as_millisecond() - earlier.as_millisecond()
    } else {
        now.as_second() - earlier.as_second()
    };
    units.max(0) as u64
}

fn apply_spec(spec: FormatSpec, value: String) -> String {
    match (spec.min_width, spec.max_width) {
        (None, None) => value,
        (Some(width), None) if spec.left_align => format!("{value:<width$}"),
        (Some(width), None) => format!("{value:>width$}"),
        (None, Some(precision)) => format!("{value:.precision$}"),
        (Some(width), Some(precision)) if spec.left_align => {
            format!("{value:<width$.precision$}")
        }
        (Some(width), Some(precision)) => format!("{value:>width$.precision$}"),
    }
}

fn shorten_category(category: &str, keep: usize) -> &str {
    match category.rmatch_indices("::").nth(keep - 1) {
        Some((index, separator)) => &category[index + separator.len()..],
        None => category,
    }
}

fn validate_date_format(pattern: &str, format: &str) -> Result<(), Error> {
    let probe = Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);
    strtime::format(format, &probe).map(drop).map_err(|err| {
        Error::new("malformed conversion pattern")
            .with_context("pattern", pattern)
            .with_context("date format", format)
            .with_source(err)
    })
}

fn validate_segment_count(pattern: &str, count: &str) -> Result<(), Error> {
    match count.parse::<usize>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(Error::new("malformed conversion pattern")
            .with_context("pattern", pattern)
            .with_context(
                "reason",
                format!("category segment count must be a positive integer, got '{count}'"),
            )),
    }
}

/// Customize the color of each log level.
#[cfg(feature = "colored")]
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for error level logs.
    pub error: Color,
    /// Color for warn level logs.
    pub warn: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for trace level logs.
    pub trace: Color,
}

#[cfg(feature = "colored")]
impl Default for LevelColor {
    fn default() -> Self {
        Self {
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
            trace: Color::Magenta,
        }
    }
}

#[cfg(feature = "colored")]
impl LevelColor {
    fn for_level(&self, level: crate::record::Level) -> Color {
        use crate::record::Level;
        match level {
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::time::Duration;
    use std::time::SystemTime;

    use jiff::SignedDuration;

    use super::*;
    use crate::clock::ManualClock;
    use crate::record::Level;
    use crate::record::Record;
    use crate::record::RecordBuilder;

    fn t0() -> Timestamp {
        Timestamp::from_str("2024-01-01T00:00:00Z").unwrap()
    }

    fn format_str(layout: &PatternLayout, record: &Record<'_>) -> String {
        String::from_utf8(layout.format(record).unwrap()).unwrap()
    }

    fn render(layout: &PatternLayout, args: fmt::Arguments<'_>) -> String {
        let record = RecordBuilder::default()
            .level(Level::Info)
            .target("app::core::net")
            .args(args)
            .build();
        format_str(layout, &record)
    }

    #[test]
    fn test_render_basic_fields() {
        let layout = PatternLayout::new("%p %c %m").unwrap();
        assert_eq!(render(&layout, format_args!("ready")), "INFO app::core::net ready");
    }

    #[test]
    fn test_right_and_left_alignment() {
        let layout = PatternLayout::new("[%7p][%-7p]").unwrap();
        let record = RecordBuilder::default()
            .level(Level::Warn)
            .args(format_args!(""))
            .build();
        assert_eq!(format_str(&layout, &record), "[   WARN][WARN   ]");
    }

    #[test]
    fn test_precision_truncates() {
        let layout = PatternLayout::new("%.3p|%6.3p").unwrap();
        let record = RecordBuilder::default()
            .level(Level::Debug)
            .args(format_args!(""))
            .build();
        assert_eq!(format_str(&layout, &record), "DEB|   DEB");
    }

    #[test]
    fn test_category_keeps_last_segments() {
        let layout = PatternLayout::new("%c{1}|%c{2}|%c{5}|%c").unwrap();
        assert_eq!(
            render(&layout, format_args!("")),
            "net|core::net|app::core::net|app::core::net"
        );
    }

    #[test]
    fn test_percent_escape_renders() {
        let layout = PatternLayout::new("100%% %m").unwrap();
        assert_eq!(render(&layout, format_args!("done")), "100% done");
    }

    #[test]
    fn test_newline_directive() {
        let layout = PatternLayout::new("%m%n").unwrap();
        assert_eq!(render(&layout, format_args!("line")), "line\n");
    }

    #[test]
    fn test_unknown_code_reports_inline() {
        let layout = PatternLayout::new("<%Q> %m").unwrap();
        assert_eq!(render(&layout, format_args!("intact")), "<FORMAT-ERROR> intact");
    }

    #[test]
    fn test_custom_resolver() {
        let layout = PatternLayout::new("%t %m")
            .unwrap()
            .resolver('t', |record| record.target().to_uppercase());
        assert_eq!(render(&layout, format_args!("up")), "APP::CORE::NET up");
    }

    #[test]
    #[should_panic(expected = "is reserved")]
    fn test_reserved_resolver_code_panics() {
        let _ = PatternLayout::new("%m")
            .unwrap()
            .resolver('R', |record| record.target().to_owned());
    }

    #[test]
    fn test_first_event_reports_zero() {
        let clock = ManualClock::new(t0());
        // move time before the first render; the default policy still reports 0
        clock.advance(SignedDuration::from_secs(7));
        let layout = PatternLayout::new("%R").unwrap().with_clock(clock);
        assert_eq!(render(&layout, format_args!("")), "0");
    }

    #[test]
    fn test_first_event_since_process_start() {
        let clock = ManualClock::new(t0());
        clock.advance(SignedDuration::from_secs(3));
        let layout = PatternLayout::new("%R")
            .unwrap()
            .with_clock(clock)
            .first_event_elapsed(FirstEventElapsed::SinceProcessStart);
        assert_eq!(render(&layout, format_args!("")), "3000");
    }

    #[test]
    fn test_since_last_tracks_between_renders() {
        let clock = ManualClock::new(t0());
        let layout = PatternLayout::new("%Rms %m").unwrap().with_clock(clock.clone());

        assert_eq!(render(&layout, format_args!("Start")), "0ms Start");
        clock.advance(SignedDuration::from_secs(1));
        assert_eq!(render(&layout, format_args!("End")), "1000ms End");
        clock.advance(SignedDuration::from_millis(250));
        assert_eq!(render(&layout, format_args!("Later")), "250ms Later");
    }

    #[test]
    fn test_since_start_and_since_last_share_one_sample() {
        let clock = ManualClock::new(t0());
        let layout = PatternLayout::new("%r|%R").unwrap().with_clock(clock.clone());

        clock.advance(SignedDuration::from_millis(500));
        assert_eq!(render(&layout, format_args!("")), "500|0");
        clock.advance(SignedDuration::from_millis(300));
        assert_eq!(render(&layout, format_args!("")), "800|300");
        // unchanged clock, so both fields observe the same instant again
        assert_eq!(render(&layout, format_args!("")), "800|0");
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let clock = ManualClock::new(t0());
        let first = PatternLayout::new("%R").unwrap().with_clock(clock.clone());
        let second = PatternLayout::new("%R").unwrap().with_clock(clock.clone());

        assert_eq!(render(&first, format_args!("")), "0");
        clock.advance(SignedDuration::from_secs(2));
        // the second instance has not rendered yet, so it starts at zero
        assert_eq!(render(&second, format_args!("")), "0");
        clock.advance(SignedDuration::from_secs(1));
        assert_eq!(render(&first, format_args!("")), "3000");
        assert_eq!(render(&second, format_args!("")), "1000");
    }

    #[test]
    fn test_interval_sums_match_clock() {
        let clock = ManualClock::new(t0());
        let layout = PatternLayout::new("%R").unwrap().with_clock(clock.clone());

        let mut sum: i64 = render(&layout, format_args!("")).parse().unwrap();
        let advances: [i64; 4] = [137, 1, 999, 12_345];
        for advance in advances {
            clock.advance(SignedDuration::from_millis(advance));
            let since_last: i64 = render(&layout, format_args!("")).parse().unwrap();
            assert!(since_last >= 0);
            sum += since_last;
        }
        assert_eq!(sum, advances.iter().sum());
    }

    #[test]
    fn test_low_resolution_falls_back_to_seconds() {
        let clock = ManualClock::low_resolution(t0());
        let layout = PatternLayout::new("%r/%R").unwrap().with_clock(clock.clone());

        clock.advance(SignedDuration::from_millis(2500));
        assert_eq!(render(&layout, format_args!("")), "2/0");
        clock.advance(SignedDuration::from_millis(1000));
        assert_eq!(render(&layout, format_args!("")), "3/1");
    }

    #[test]
    fn test_custom_date_format() {
        let layout = PatternLayout::new("%d{%Y-%m-%d %H:%M:%S}")
            .unwrap()
            .timezone(TimeZone::UTC);
        let record = RecordBuilder::default()
            .time(SystemTime::UNIX_EPOCH + Duration::from_secs(1234))
            .args(format_args!(""))
            .build();
        assert_eq!(format_str(&layout, &record), "1970-01-01 00:20:34");
    }

    #[test]
    fn test_invalid_date_format_fails_compile() {
        assert!(PatternLayout::new("%d{abc%}").is_err());
    }

    #[test]
    fn test_bad_category_count_fails_compile() {
        assert!(PatternLayout::new("%c{zero}").is_err());
        assert!(PatternLayout::new("%c{0}").is_err());
    }

    #[test]
    fn test_caller_location_fields() {
        let layout = PatternLayout::new("%M %F:%L %l").unwrap();
        let record = RecordBuilder::default()
            .module_path(Some("app::worker"))
            .file(Some("src/worker.rs"))
            .line(Some(42))
            .args(format_args!(""))
            .build();
        assert_eq!(
            format_str(&layout, &record),
            "app::worker src/worker.rs:42 app::worker (src/worker.rs:42)"
        );
    }

    #[test]
    fn test_process_id_field() {
        let layout = PatternLayout::new("%P").unwrap();
        assert_eq!(render(&layout, format_args!("")), std::process::id().to_string());
    }

    #[test]
    fn test_compiling_twice_renders_identically() {
        let pattern = "[%5p] %c{1} %m";
        let first = PatternLayout::new(pattern).unwrap();
        let second = PatternLayout::new(pattern).unwrap();
        let record = RecordBuilder::default()
            .level(Level::Warn)
            .target("a::b")
            .args(format_args!("same"))
            .build();
        assert_eq!(format_str(&first, &record), format_str(&second, &record));
    }

    #[test]
    fn test_default_pattern_renders() {
        let layout = PatternLayout::default();
        let line = render(&layout, format_args!("hello"));
        assert!(line.contains("INFO"));
        assert!(line.ends_with("hello"));
    }
}
