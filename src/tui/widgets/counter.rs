//! Animated stat counter — cosmetic count-up from zero to a fixed target.

use std::time::Duration;

/// A counter that animates from 0 to a target value over a fixed duration.
///
/// The counter advances one fixed-size step per app tick and lands exactly
/// on its target on the final tick. Once complete it ignores further ticks;
/// the displayed value never exceeds the target and never loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    target: u64,
    ticks_total: u64,
    ticks_elapsed: u64,
}

impl Counter {
    /// Creates a counter that reaches `target` after `duration` worth of
    /// ticks spaced `tick` apart.
    pub fn new(target: u64, duration: Duration, tick: Duration) -> Self {
        let ticks_total = (duration.as_millis() / tick.as_millis().max(1)).max(1) as u64;
        Self {
            target,
            ticks_total,
            ticks_elapsed: 0,
        }
    }

    /// Advances the animation by one tick. No-op once complete.
    pub fn advance(&mut self) {
        if !self.is_done() {
            self.ticks_elapsed += 1;
        }
    }

    /// The value to display: proportional to elapsed ticks, rounded down,
    /// snapping to the exact target on the final tick.
    pub fn value(&self) -> u64 {
        if self.is_done() {
            self.target
        } else {
            self.target * self.ticks_elapsed / self.ticks_total
        }
    }

    /// Returns `true` once the counter has reached its target.
    pub fn is_done(&self) -> bool {
        self.ticks_elapsed >= self.ticks_total
    }

    /// The target value.
    pub fn target(&self) -> u64 {
        self.target
    }
}

/// Formats a count with thousands separators (`1250` → `"1,250"`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    const TICK: Duration = Duration::from_millis(50);
    const DURATION: Duration = Duration::from_millis(1500);

    #[test]
    fn starts_at_zero() {
        let counter = Counter::new(1250, DURATION, TICK);
        assert_eq!(counter.value(), 0);
        assert!(!counter.is_done());
    }

    #[test]
    fn reaches_exactly_target_and_stops() {
        let mut counter = Counter::new(1250, DURATION, TICK);
        for _ in 0..30 {
            counter.advance();
        }
        assert!(counter.is_done());
        assert_eq!(counter.value(), 1250);

        // Further ticks must not move it.
        counter.advance();
        counter.advance();
        assert_eq!(counter.value(), 1250);
    }

    #[test]
    fn never_exceeds_target_while_running() {
        let mut counter = Counter::new(1000, DURATION, TICK);
        for _ in 0..100 {
            assert!(counter.value() <= 1000);
            counter.advance();
        }
        assert_eq!(counter.value(), 1000);
    }

    #[test]
    fn intermediate_values_are_monotonic() {
        let mut counter = Counter::new(1500, DURATION, TICK);
        let mut last = counter.value();
        while !counter.is_done() {
            counter.advance();
            let next = counter.value();
            assert!(next >= last, "value went backwards: {last} -> {next}");
            last = next;
        }
        assert_eq!(last, 1500);
    }

    #[test]
    fn zero_target_holds_at_zero() {
        let mut counter = Counter::new(0, DURATION, TICK);
        assert_eq!(counter.value(), 0);
        for _ in 0..40 {
            counter.advance();
        }
        assert_eq!(counter.value(), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn target_smaller_than_tick_count_still_completes() {
        let mut counter = Counter::new(3, DURATION, TICK);
        for _ in 0..30 {
            counter.advance();
        }
        assert!(counter.is_done());
        assert_eq!(counter.value(), 3);
    }

    #[quickcheck]
    fn always_completes_at_exact_target(target: u32, extra_ticks: u8) -> bool {
        let target = u64::from(target % 100_000);
        let mut counter = Counter::new(target, DURATION, TICK);
        // 30 ticks cover the duration; extras must be no-ops.
        for _ in 0..(30 + usize::from(extra_ticks)) {
            counter.advance();
            if counter.value() > target {
                return false;
            }
        }
        counter.is_done() && counter.value() == target
    }

    mod formatting {
        use super::*;

        #[test]
        fn small_values_unchanged() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(999), "999");
        }

        #[test]
        fn thousands_grouped() {
            assert_eq!(format_count(1000), "1,000");
            assert_eq!(format_count(1250), "1,250");
            assert_eq!(format_count(1_234_567), "1,234,567");
        }

        #[quickcheck]
        fn grouping_preserves_digits(value: u64) -> bool {
            let grouped = format_count(value);
            let stripped: String = grouped.chars().filter(|c| *c != ',').collect();
            stripped == value.to_string()
        }
    }
}
