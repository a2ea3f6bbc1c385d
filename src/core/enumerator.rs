//! Base-10 digit enumeration.
//!
//! A walk appends the digits `0`..=`9` to a prefix, depth-first and
//! left-to-right, and emits one line per leaf. Depth 0 behaves like depth 1,
//! so every walk emits `10^max(depth, 1)` lines.
//!
//! When the prefix is empty, the zero branch keeps it empty instead of
//! appending `"0"`. Because the prefix is still empty one level down, this
//! repeats along the whole all-zero path: `("", n)` emits the integers
//! `0..10^n` without leading zeros. A non-empty prefix never loses a digit.

use crate::adapters::sink::{MemorySink, WriterSink};
use crate::domain::model::{Strategy, DIGITS};
use crate::domain::ports::LineSink;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitEnumerator {
    strategy: Strategy,
}

impl DigitEnumerator {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Walks `(prefix, depth)` into `sink` and returns the number of lines
    /// emitted. The sink is not flushed; that is left to the owner.
    pub fn enumerate<S: LineSink + ?Sized>(
        &self,
        prefix: &str,
        depth: u32,
        sink: &mut S,
    ) -> Result<u64> {
        match self.strategy {
            Strategy::Iterative => walk_iterative(prefix, depth, sink),
            Strategy::Recursive => {
                let mut emitted = 0;
                walk_recursive(prefix, depth, sink, &mut emitted)?;
                Ok(emitted)
            }
        }
    }

    pub fn collect(&self, prefix: &str, depth: u32) -> Result<Vec<String>> {
        let mut sink = MemorySink::new();
        self.enumerate(prefix, depth, &mut sink)?;
        Ok(sink.into_lines())
    }

    /// Writes the walk to stdout, one line per entry.
    pub fn print(&self, prefix: &str, depth: u32) -> Result<u64> {
        let mut sink = WriterSink::stdout();
        let emitted = self.enumerate(prefix, depth, &mut sink)?;
        sink.finish()?;
        Ok(emitted)
    }
}

/// Prints every digit string of `depth` positions under `prefix` to stdout.
pub fn enumerate(prefix: &str, depth: u32) -> Result<u64> {
    DigitEnumerator::default().print(prefix, depth)
}

fn walk_recursive<S: LineSink + ?Sized>(
    prefix: &str,
    depth: u32,
    sink: &mut S,
    emitted: &mut u64,
) -> Result<()> {
    if depth <= 1 {
        let mut line = String::with_capacity(prefix.len() + 1);
        for &digit in DIGITS {
            line.clear();
            line.push_str(prefix);
            line.push(char::from(digit));
            sink.emit(line.as_bytes())?;
            *emitted += 1;
        }
        return Ok(());
    }

    for (i, &digit) in DIGITS.iter().enumerate() {
        let next = if prefix.is_empty() && i == 0 {
            String::new()
        } else {
            let mut next = String::with_capacity(prefix.len() + 1);
            next.push_str(prefix);
            next.push(char::from(digit));
            next
        };
        walk_recursive(&next, depth - 1, sink, emitted)?;
    }
    Ok(())
}

struct Frame {
    /// Length of `line` that belongs to this frame's prefix.
    base_len: usize,
    remaining: u32,
    next_digit: usize,
}

fn walk_iterative<S: LineSink + ?Sized>(prefix: &str, depth: u32, sink: &mut S) -> Result<u64> {
    let depth = depth.max(1);
    let mut line = Vec::with_capacity(prefix.len() + depth as usize);
    line.extend_from_slice(prefix.as_bytes());

    let mut stack = Vec::with_capacity(depth as usize);
    stack.push(Frame {
        base_len: line.len(),
        remaining: depth,
        next_digit: 0,
    });

    let mut emitted = 0u64;
    while let Some(frame) = stack.last_mut() {
        line.truncate(frame.base_len);

        if frame.remaining <= 1 {
            for &digit in DIGITS {
                line.push(digit);
                sink.emit(&line)?;
                line.pop();
                emitted += 1;
            }
            stack.pop();
            continue;
        }

        if frame.next_digit == DIGITS.len() {
            stack.pop();
            continue;
        }

        let i = frame.next_digit;
        frame.next_digit += 1;
        let remaining = frame.remaining - 1;

        // base_len == 0 is exactly the empty-prefix case
        if !(frame.base_len == 0 && i == 0) {
            line.push(DIGITS[i]);
        }
        stack.push(Frame {
            base_len: line.len(),
            remaining,
            next_digit: 0,
        });
    }

    Ok(emitted)
}
