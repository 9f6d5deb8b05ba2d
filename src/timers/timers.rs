use std::collections::HashMap;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        use web_time::Instant;
    } else {
        use std::time::Instant;
    }
}

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    count: u32,
    subtimers: SubTimersMap,
}

impl InnerTimer {
    fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
        self.count = 0;
        self.subtimers.clear();
    }

    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
            self.count += 1;
        }
    }
}

#[derive(Debug, Default)]
struct SubTimersMap(HashMap<&'static str, InnerTimer>);

impl Deref for SubTimersMap {
    type Target = HashMap<&'static str, InnerTimer>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SubTimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SubTimersMap {
    fn start_subtimer(&mut self, key: &'static str) {
        let t = self.entry(key).or_default();
        t.start();
    }

    fn total_time(&self) -> Duration {
        self.values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    fn print(&self, out: &mut dyn Write, depth: u8) -> std::io::Result<()> {
        // sorted so that output is stable between runs
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(key, _)| **key);
        for (key, val) in entries {
            let tabs = format!("{: <1$}", "", 4 * depth as usize);
            writeln!(out, "{}{} ({}) : {:?}", tabs, key, val.count, val.elapsed)?;
            val.subtimers.print(out, depth + 1)?;
        }
        Ok(())
    }
}

/// Collection of named timers.  Timers started while another is
/// running are nested beneath it.
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;
        let mut active_timer = self.subtimers.get_mut(first)?;
        for key in rest {
            active_timer = active_timer.subtimers.get_mut(key)?;
        }
        Some(active_timer)
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.subtimers.clear();
    }

    pub fn reset_timer(&mut self, key: &'static str) {
        if let Some(t) = self.subtimers.get_mut(key) {
            t.reset();
        }
    }

    /// starts a timer with name `key` as the current timer
    pub fn start_as_current(&mut self, key: &'static str) {
        if let Some(active) = self.mut_active_timer() {
            active.subtimers.start_subtimer(key);
        } else {
            self.subtimers.start_subtimer(key);
        }
        self.stack.push(key);
    }

    /// stops the current timer.  Does nothing if no timer is running.
    pub fn stop_current(&mut self) {
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }
        self.stack.pop();
    }

    /// cumulative time of a top level timer
    pub fn elapsed(&self, key: &'static str) -> Option<Duration> {
        self.subtimers.get(key).map(|t| t.elapsed)
    }

    /// number of completed runs of a top level timer
    pub fn count(&self, key: &'static str) -> u32 {
        self.subtimers.get(key).map_or(0, |t| t.count)
    }

    pub fn total_time(&self) -> Duration {
        self.subtimers.total_time()
    }

    pub fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        self.subtimers.print(out, 0)
    }
}

macro_rules! timeit {
    ($timer:expr => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;
