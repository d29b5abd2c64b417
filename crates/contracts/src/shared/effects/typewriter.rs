use crate::shared::config::TypewriterConfig;

/// Text to display and how long to wait before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Types a phrase, holds it, deletes it and moves on to the next phrase.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn tick(&mut self) -> TypewriterFrame {
        let Some(current) = self.config.phrases.get(self.phrase) else {
            return TypewriterFrame {
                text: String::new(),
                next_delay_ms: self.config.pause_ms,
            };
        };
        let len = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.chars().take(self.chars).collect();

        let mut delay = if self.deleting {
            self.config.delete_ms
        } else {
            self.config.type_ms
        };

        if !self.deleting && self.chars == len {
            delay = self.config.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.config.phrases.len();
            delay = self.config.pause_ms;
        }

        TypewriterFrame {
            text,
            next_delay_ms: delay,
        }
    }
}
