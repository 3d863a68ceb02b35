//! Lightbox stepping over the fixed graphic and photo galleries.

/// Navigation direction in the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Step `index` one place in `direction`, wrapping at both ends.
///
/// Valid input is `count >= 1` and `index < count`. Anything else still
/// yields an index in range: `count == 0` gives 0 and an index past the end
/// is clamped to the last item before stepping.
pub fn advance(index: usize, direction: Direction, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = count - 1;
    let index = index.min(last);
    match direction {
        Direction::Next => {
            if index == last {
                0
            } else {
                index + 1
            }
        }
        Direction::Prev => {
            if index == 0 {
                last
            } else {
                index - 1
            }
        }
    }
}

/// The two image galleries on the reviews page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKind {
    Graphic,
    Photo,
}

impl GalleryKind {
    pub fn count(&self) -> usize {
        match self {
            GalleryKind::Graphic => 9,
            GalleryKind::Photo => 3,
        }
    }

    /// Directory segment, e.g. `graphic` -> `/graphics/`
    pub fn slug(&self) -> &'static str {
        match self {
            GalleryKind::Graphic => "graphic",
            GalleryKind::Photo => "photo",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            GalleryKind::Graphic => "design",
            GalleryKind::Photo => "photo",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            GalleryKind::Graphic => "png",
            GalleryKind::Photo => "jpg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryKind::Graphic => "Graphic Design",
            GalleryKind::Photo => "Photo",
        }
    }

    /// Every image of this gallery in display order
    pub fn images(&self) -> Vec<ImageRef> {
        (0..self.count()).map(|i| image_ref(*self, i)).collect()
    }
}

/// Static image path plus the caption shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub path: String,
    pub label: String,
}

/// Resource reference for the 0-based `index` of a gallery.
///
/// `image_ref(GalleryKind::Graphic, 2)` is `/graphics/design-3.png`, "Graphic Design 3".
pub fn image_ref(kind: GalleryKind, index: usize) -> ImageRef {
    let number = index + 1;
    ImageRef {
        path: format!(
            "/{}s/{}-{}.{}",
            kind.slug(),
            kind.prefix(),
            number,
            kind.extension()
        ),
        label: format!("{} {}", kind.label(), number),
    }
}

/// An open lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    kind: GalleryKind,
    index: usize,
}

impl CarouselState {
    pub fn open(kind: GalleryKind, index: usize) -> Self {
        Self {
            kind,
            index: index.min(kind.count() - 1),
        }
    }

    pub fn kind(&self) -> GalleryKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step(&mut self, direction: Direction) {
        self.index = advance(self.index, direction, self.kind.count());
    }

    pub fn current(&self) -> ImageRef {
        image_ref(self.kind, self.index)
    }

    /// `3 / 9` style position text
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.kind.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        assert_eq!(advance(0, Direction::Prev, 9), 8);
        assert_eq!(advance(8, Direction::Next, 9), 0);
        assert_eq!(advance(3, Direction::Next, 9), 4);
        assert_eq!(advance(3, Direction::Prev, 9), 2);
    }

    #[test]
    fn test_single_item_never_moves() {
        assert_eq!(advance(0, Direction::Next, 1), 0);
        assert_eq!(advance(0, Direction::Prev, 1), 0);
    }

    #[test]
    fn test_out_of_range_input_stays_in_range() {
        assert_eq!(advance(0, Direction::Next, 0), 0);
        assert_eq!(advance(42, Direction::Next, 3), 0);
        assert_eq!(advance(42, Direction::Prev, 3), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for count in 1..=9 {
            let mut i = 0;
            for _ in 0..count {
                i = advance(i, Direction::Next, count);
            }
            assert_eq!(i, 0);
        }
    }

    #[test]
    fn test_image_refs() {
        let g = image_ref(GalleryKind::Graphic, 8);
        assert_eq!(g.path, "/graphics/design-9.png");
        assert_eq!(g.label, "Graphic Design 9");

        let p = image_ref(GalleryKind::Photo, 0);
        assert_eq!(p.path, "/photos/photo-1.jpg");
        assert_eq!(p.label, "Photo 1");

        assert_eq!(GalleryKind::Photo.images().len(), 3);
    }

    #[test]
    fn test_state_steps_through_photos() {
        let mut state = CarouselState::open(GalleryKind::Photo, 0);
        state.step(Direction::Prev);
        assert_eq!(state.index(), 2);
        assert_eq!(state.current().path, "/photos/photo-3.jpg");
        assert_eq!(state.position_label(), "3 / 3");
        state.step(Direction::Next);
        assert_eq!(state.current().label, "Photo 1");
    }

    #[test]
    fn test_open_clamps_index() {
        let state = CarouselState::open(GalleryKind::Photo, 7);
        assert_eq!(state.index(), 2);
    }
}
