/// Click ripple geometry relative to the clicked card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// `rect` is `(left, top, width, height)` of the card in client coordinates.
    pub fn at(client_x: f64, client_y: f64, rect: (f64, f64, f64, f64)) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            x: client_x - left - size / 2.0,
            y: client_y - top - size / 2.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "width: {0}px; height: {0}px; left: {1}px; top: {2}px;",
            self.size, self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_click() {
        let r = Ripple::at(150.0, 120.0, (100.0, 100.0, 200.0, 80.0));
        assert_eq!(r.size, 200.0);
        assert_eq!(r.x, -50.0);
        assert_eq!(r.y, -80.0);
        assert_eq!(r.css(), "width: 200px; height: 200px; left: -50px; top: -80px;");
    }
}
