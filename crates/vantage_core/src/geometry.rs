//! Core geometry types
//!
//! Rects live in document coordinates: the origin is the top-left of the
//! page, not the viewport. A viewport is itself a rect whose y origin is the
//! current scroll offset.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// Overlapping region of two rects, `None` when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = (self.x() + self.width()).min(other.x() + other.width());
        let bottom = (self.y() + self.height()).min(other.y() + other.height());

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Shrink the rect from the top and bottom edges only.
    ///
    /// Used to carve a fixed header/footer band out of a viewport before
    /// visibility ranking. Height never goes negative.
    pub fn inset_vertical(&self, top: f32, bottom: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x, self.origin.y + top),
            size: Size::new(
                self.size.width,
                (self.size.height - top - bottom).max(0.0),
            ),
        }
    }
}

/// Fraction of `element` currently inside `root`, in `[0, 1]`.
///
/// Zero-area elements are never visible.
pub fn visible_fraction(element: Rect, root: Rect) -> f32 {
    let area = element.area();
    if area <= 0.0 {
        return 0.0;
    }
    match element.intersection(&root) {
        Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
        None => 0.0,
    }
}
