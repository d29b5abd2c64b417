use crate::shared::config::LoadingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadingFrame {
    /// Progress bar width in percent.
    pub width: f64,
    /// Whole percent shown next to the bar.
    pub percent: u8,
    pub message: String,
    pub done: bool,
}

/// Fake loading progress that advances by random steps until 100%.
#[derive(Debug, Clone)]
pub struct LoadingProgress {
    config: LoadingConfig,
    progress: f64,
}

impl LoadingProgress {
    pub fn new(config: LoadingConfig) -> Self {
        Self {
            config,
            progress: 0.0,
        }
    }

    /// Advance by a step derived from a uniform sample in `[0, 1)`.
    pub fn advance(&mut self, sample: f64) -> LoadingFrame {
        let span = self.config.max_step - self.config.min_step;
        let step = self.config.min_step + sample.clamp(0.0, 1.0) * span;
        self.progress = (self.progress + step.max(0.0)).min(100.0);
        self.frame()
    }

    pub fn frame(&self) -> LoadingFrame {
        LoadingFrame {
            width: self.progress,
            percent: self.progress.floor() as u8,
            message: self.message().to_string(),
            done: self.progress >= 100.0,
        }
    }

    fn message(&self) -> &str {
        self.config
            .stages
            .iter()
            .find(|stage| self.progress < stage.until)
            .or_else(|| self.config.stages.last())
            .map(|stage| stage.message.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_thresholds() {
        let mut p = LoadingProgress::new(LoadingConfig::default());
        assert_eq!(p.frame().message, "Initializing...");

        // min step 5, max step 20: sample 1.0 adds 20
        let f = p.advance(1.0);
        assert_eq!(f.percent, 20);
        assert_eq!(f.message, "Loading assets...");

        let f = p.advance(0.0);
        assert_eq!(f.percent, 25);
        assert_eq!(f.message, "Loading assets...");

        p.advance(1.0);
        p.advance(1.0);
        let f = p.advance(1.0);
        assert_eq!(f.percent, 85);
        assert_eq!(f.message, "Almost ready...");
        assert!(!f.done);
    }

    #[test]
    fn test_clamps_at_hundred() {
        let mut p = LoadingProgress::new(LoadingConfig::default());
        let mut last = p.frame();
        for _ in 0..30 {
            last = p.advance(0.9);
        }
        assert!(last.done);
        assert_eq!(last.percent, 100);
        assert_eq!(last.width, 100.0);
        assert_eq!(last.message, "Welcome!");
    }

    #[test]
    fn test_always_terminates() {
        let mut p = LoadingProgress::new(LoadingConfig::default());
        let ticks = (0..).take_while(|_| !p.advance(0.0).done).count();
        // 5% minimum step: done on the 20th tick
        assert_eq!(ticks, 19);
    }
}
