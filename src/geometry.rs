/// Axis-aligned rectangle in canvas pixels, y grows downward.
///
/// Used both as a drawable shape and as a collision volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True unless one rect lies strictly beyond the other on some axis.
    /// Rects that only share an edge count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    pub fn is_well_formed(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.5, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(0.0, -6.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(-5.5, 2.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(2.0, 10.1, 5.0, 5.0)));
    }

    #[test]
    fn test_symmetry() {
        let samples = [
            Rect::new(0.0, 360.0, 800.0, 40.0),
            Rect::new(200.0, 280.0, 200.0, 20.0),
            Rect::new(20.0, 300.0, 30.0, 40.0),
            Rect::new(250.0, 240.0, 20.0, 20.0),
            Rect::new(170.0, 320.0, 30.0, 40.0),
            Rect::new(400.0, 300.0, 0.0, 0.0),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert!(r.is_well_formed());
        assert!(!Rect::new(0.0, 0.0, -1.0, 1.0).is_well_formed());
    }
}
