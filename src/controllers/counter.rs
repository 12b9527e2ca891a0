use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("counter has no data-target attribute")]
    MissingTarget,
    #[error("counter target {0:?} is not a non-negative integer")]
    InvalidTarget(String),
}

pub fn parse_target(raw: Option<&str>) -> Result<u32, CounterError> {
    let raw = raw.ok_or(CounterError::MissingTarget)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CounterError::InvalidTarget(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Show this value and ask for another frame.
    Continue(u32),
    /// Show the target; the animation is over.
    Done(u32),
}

/// Fixed-step count-up from zero to a target.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    increment: f64,
    accumulator: f64,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, config::COUNTER_DURATION_MS, config::FRAME_INTERVAL_MS)
    }

    pub fn with_timing(target: u32, duration_ms: f64, frame_interval_ms: f64) -> Self {
        let frames = (duration_ms / frame_interval_ms).max(1.0);
        Self {
            target,
            increment: f64::from(target) / frames,
            accumulator: 0.0,
        }
    }

    pub fn step(&mut self) -> Frame {
        self.accumulator += self.increment;
        if self.accumulator < f64::from(self.target) {
            Frame::Continue(self.accumulator.floor() as u32)
        } else {
            Frame::Done(self.target)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter<N> {
    pub node: N,
    pub target: u32,
    pub current: u32,
    pub counted: bool,
}

/// Counters that start once, the first time they are seen.
#[derive(Debug, Default)]
pub struct CounterAnimator<N> {
    counters: Vec<Counter<N>>,
}

impl<N: PartialEq> CounterAnimator<N> {
    pub fn new() -> Self {
        Self {
            counters: Vec::new(),
        }
    }

    pub fn register(&mut self, node: N, raw_target: Option<&str>) -> Result<u32, CounterError> {
        let target = parse_target(raw_target)?;
        if !self.counters.iter().any(|counter| counter.node == node) {
            self.counters.push(Counter {
                node,
                target,
                current: 0,
                counted: false,
            });
        }
        Ok(target)
    }

    /// Flags the counter as counted and hands back its animation, once.
    pub fn trigger(&mut self, node: &N, intersecting: bool) -> Option<CountUp> {
        if !intersecting {
            return None;
        }
        let counter = self
            .counters
            .iter_mut()
            .find(|counter| counter.node == *node && !counter.counted)?;
        counter.counted = true;
        Some(CountUp::new(counter.target))
    }

    pub fn record(&mut self, node: &N, value: u32) {
        if let Some(counter) = self.counters.iter_mut().find(|counter| counter.node == *node) {
            counter.current = value.min(counter.target);
        }
    }

    #[cfg(test)]
    pub fn get(&self, node: &N) -> Option<&Counter<N>> {
        self.counters.iter().find(|counter| counter.node == *node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut count: CountUp) -> Vec<u32> {
        let mut shown = Vec::new();
        loop {
            match count.step() {
                Frame::Continue(value) => shown.push(value),
                Frame::Done(value) => {
                    shown.push(value);
                    return shown;
                }
            }
            assert!(shown.len() < 10_000, "count-up never finished");
        }
    }

    #[test]
    fn counts_to_exactly_one_hundred_fifty() {
        let shown = run(CountUp::new(150));
        assert_eq!(shown.last(), Some(&150));
        assert!(shown.iter().all(|value| *value <= 150));
        assert!(shown.windows(2).all(|pair| pair[0] <= pair[1]));
        // 2000ms at 16ms per frame
        assert!((125..=126).contains(&shown.len()), "{} frames", shown.len());
    }

    #[test]
    fn odd_targets_land_exactly() {
        for target in [1, 7, 99, 1234, 98765] {
            let shown = run(CountUp::new(target));
            assert_eq!(shown.last(), Some(&target));
            assert!(shown[..shown.len() - 1].iter().all(|value| *value < target));
        }
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        assert_eq!(run(CountUp::new(0)), vec![0]);
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(parse_target(None), Err(CounterError::MissingTarget));
        assert_eq!(
            parse_target(Some("beaucoup")),
            Err(CounterError::InvalidTarget("beaucoup".to_string()))
        );
        assert!(parse_target(Some("-5")).is_err());
        assert!(parse_target(Some("")).is_err());
        assert_eq!(parse_target(Some(" 42 ")), Ok(42));
    }

    #[test]
    fn triggers_once_per_counter() {
        let mut animator = CounterAnimator::new();
        assert_eq!(animator.register("eleves", Some("150")), Ok(150));

        assert!(animator.trigger(&"eleves", false).is_none());
        assert!(animator.trigger(&"eleves", true).is_some());
        assert!(animator.get(&"eleves").map(|c| c.counted).unwrap_or(false));
        assert!(animator.trigger(&"eleves", true).is_none());
    }

    #[test]
    fn invalid_counter_is_not_registered() {
        let mut animator = CounterAnimator::new();
        assert!(animator.register("annees", Some("dix")).is_err());
        assert!(animator.get(&"annees").is_none());
        assert!(animator.trigger(&"annees", true).is_none());
    }

    #[test]
    fn registered_counter_starts_from_zero() {
        let mut animator = CounterAnimator::new();
        animator.register("seances", Some("800")).unwrap();
        let counter = animator.get(&"seances").unwrap();
        assert_eq!((counter.current, counter.counted), (0, false));
        let first = animator.trigger(&"seances", true).unwrap().step();
        assert!(matches!(first, Frame::Continue(value) if value < 800));
    }

    #[test]
    fn recorded_value_is_clamped() {
        let mut animator = CounterAnimator::new();
        animator.register("cours", Some("20")).unwrap();
        animator.record(&"cours", 12);
        assert_eq!(animator.get(&"cours").map(|c| c.current), Some(12));
        animator.record(&"cours", 25);
        assert_eq!(animator.get(&"cours").map(|c| c.current), Some(20));
    }
}
