/// `KeyboardEvent.key` values of the Konami code.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KonamiTracker {
    position: usize,
}

impl KonamiTracker {
    /// Feed one key; returns `true` when the sequence completes.
    /// Any wrong key starts over from the beginning.
    pub fn push(&mut self, key: &str) -> bool {
        let expected = KONAMI_SEQUENCE[self.position];
        if key.eq_ignore_ascii_case(expected) {
            self.position += 1;
            if self.position == KONAMI_SEQUENCE.len() {
                self.position = 0;
                return true;
            }
        } else {
            self.position = 0;
        }
        false
    }
}
