use glam::IVec2;

/// Integer axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> i32 {
        self.min.x
    }

    pub fn right(&self) -> i32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn bottom(&self) -> i32 {
        self.min.y + self.size.y
    }

    pub fn set_top(&mut self, top: i32) {
        self.min.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.min.y = bottom - self.size.y;
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.min += delta;
    }

    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    /// Half-open point test: the right and bottom edges are outside.
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// The playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    pub width: i32,
    pub height: i32,
}

impl Court {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(IVec2::ZERO, IVec2::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(IVec2::new(90, 175), IVec2::new(10, 50));
        assert_eq!(rect.left(), 90);
        assert_eq!(rect.right(), 100);
        assert_eq!(rect.top(), 175);
        assert_eq!(rect.bottom(), 225);
        assert_eq!(rect.center(), IVec2::new(95, 200));
    }

    #[test]
    fn test_rect_set_bottom_keeps_height() {
        let mut rect = Rect::new(IVec2::new(0, 380), IVec2::new(10, 50));
        rect.set_bottom(400);
        assert_eq!(rect.top(), 350);
        assert_eq!(rect.bottom(), 400);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(IVec2::new(90, 175), IVec2::new(10, 50));
        assert!(rect.contains(IVec2::new(90, 175)), "Top-left corner is inside");
        assert!(rect.contains(IVec2::new(99, 224)));
        assert!(!rect.contains(IVec2::new(100, 200)), "Right edge is outside");
        assert!(!rect.contains(IVec2::new(95, 225)), "Bottom edge is outside");
        assert!(!rect.contains(IVec2::new(89, 200)));
    }

    #[test]
    fn test_court_center() {
        let court = Court::new(500, 400);
        assert_eq!(court.center(), IVec2::new(250, 200));
        assert!(court.bounds().contains(court.center()));
    }
}
