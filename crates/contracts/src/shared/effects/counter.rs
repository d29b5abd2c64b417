/// Stat counter counting up from zero in fixed frames.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (duration_ms as f64 / frame_ms.max(1) as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    /// Advance one frame; returns the value to display and whether the
    /// counter has reached its target.
    pub fn step(&mut self) -> (u64, bool) {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            return (self.target, true);
        }
        (self.current.floor() as u64, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target() {
        let mut c = CounterAnimation::new(250, 2000, 16);
        let mut frames = 0;
        let mut last = (0, false);
        while !last.1 {
            last = c.step();
            frames += 1;
            assert!(last.0 <= 250);
        }
        assert_eq!(last.0, 250);
        assert_eq!(frames, 125);
    }

    #[test]
    fn test_monotonic() {
        let mut c = CounterAnimation::new(1000, 2000, 16);
        let mut prev = 0;
        loop {
            let (v, done) = c.step();
            assert!(v >= prev);
            prev = v;
            if done {
                break;
            }
        }
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut c = CounterAnimation::new(0, 2000, 16);
        assert_eq!(c.step(), (0, true));
    }

    #[test]
    fn test_zero_frame_does_not_divide_by_zero() {
        let mut c = CounterAnimation::new(10, 0, 0);
        assert_eq!(c.step(), (10, true));
    }
}
