/// A solid-color image: every pixel is `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub color: Rgba,
}

/// 8-bit straight color; the encoders pick the channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn bgra(&self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_orders() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(c.bgra(), [3, 2, 1, 4]);
        assert_eq!(c.rgb(), [1, 2, 3]);
        assert_eq!(Rgba::from([1, 2, 3, 4]), c);
    }
}
