//! Leaf content for the test layout tree

use lineal_ui_layout::{AlignmentLine, Constraints, IntrinsicQuery};
use lineal_ui_unit::IntSize;

/// Content of a node without children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Leaf {
    /// A box with a preferred size, optionally reporting a baseline.
    Fixed {
        width: i32,
        height: i32,
        baseline: Option<i32>,
    },
    /// Monospaced text of `chars` characters that wraps at any character.
    Text {
        chars: i32,
        char_width: i32,
        line_height: i32,
    },
    /// Takes the full bounded width it is offered.
    FillMaxWidth { height: i32 },
}

impl Leaf {
    pub fn fixed(width: i32, height: i32) -> Self {
        Leaf::Fixed {
            width,
            height,
            baseline: None,
        }
    }

    pub fn fixed_with_baseline(width: i32, height: i32, baseline: i32) -> Self {
        Leaf::Fixed {
            width,
            height,
            baseline: Some(baseline),
        }
    }

    pub fn text(chars: i32, char_width: i32, line_height: i32) -> Self {
        assert!(char_width > 0 && line_height > 0, "text metrics must be positive");
        Leaf::Text {
            chars: chars.max(0),
            char_width,
            line_height,
        }
    }

    pub fn fill_max_width(height: i32) -> Self {
        Leaf::FillMaxWidth { height }
    }

    pub(crate) fn measure(&self, constraints: Constraints) -> IntSize {
        match *self {
            Leaf::Fixed { width, height, .. } => constraints.constrain(width, height),
            Leaf::Text {
                chars,
                char_width,
                line_height,
            } => {
                let per_line = chars_per_line(chars, char_width, constraints.max_width());
                let width = chars.min(per_line).saturating_mul(char_width);
                let height = line_count(chars, per_line).saturating_mul(line_height);
                constraints.constrain(width, height)
            }
            Leaf::FillMaxWidth { height } => {
                let width = if constraints.has_bounded_width() {
                    constraints.max_width()
                } else {
                    constraints.min_width()
                };
                IntSize::new(width, constraints.constrain_height(height))
            }
        }
    }

    pub(crate) fn intrinsic(&self, query: IntrinsicQuery, extent: i32) -> i32 {
        match (*self, query) {
            (Leaf::Fixed { width, .. }, IntrinsicQuery::MinWidth | IntrinsicQuery::MaxWidth) => width,
            (Leaf::Fixed { height, .. }, _) => height,
            (Leaf::Text { char_width, .. }, IntrinsicQuery::MinWidth) => char_width,
            (
                Leaf::Text {
                    chars, char_width, ..
                },
                IntrinsicQuery::MaxWidth,
            ) => chars.saturating_mul(char_width),
            (
                Leaf::Text {
                    chars,
                    char_width,
                    line_height,
                },
                _,
            ) => {
                let per_line = chars_per_line(chars, char_width, extent);
                line_count(chars, per_line).saturating_mul(line_height)
            }
            (Leaf::FillMaxWidth { .. }, IntrinsicQuery::MinWidth | IntrinsicQuery::MaxWidth) => 0,
            (Leaf::FillMaxWidth { height }, _) => height,
        }
    }

    pub(crate) fn alignment_line(&self, line: AlignmentLine, size: IntSize) -> Option<i32> {
        if line != AlignmentLine::FIRST_BASELINE && line != AlignmentLine::LAST_BASELINE {
            return None;
        }
        match *self {
            Leaf::Fixed { baseline, .. } => baseline,
            Leaf::Text { line_height, .. } => {
                let ascent = line_height - line_height / 4;
                if line == AlignmentLine::FIRST_BASELINE {
                    Some(ascent)
                } else {
                    let lines = (size.height / line_height).max(1);
                    Some((lines - 1) * line_height + ascent)
                }
            }
            Leaf::FillMaxWidth { .. } => None,
        }
    }
}

fn chars_per_line(chars: i32, char_width: i32, max_width: i32) -> i32 {
    if max_width == Constraints::INFINITY {
        chars.max(1)
    } else {
        (max_width / char_width).max(1)
    }
}

fn line_count(chars: i32, per_line: i32) -> i32 {
    (chars / per_line + i32::from(chars % per_line != 0)).max(1)
}
