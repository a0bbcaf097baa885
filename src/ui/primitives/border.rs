use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{borders as u, borders_ascii as a};

        match (supports_unicode, self) {
            (true, BorderChar::TopLeft) => u::TOP_LEFT,
            (true, BorderChar::TopRight) => u::TOP_RIGHT,
            (true, BorderChar::BottomLeft) => u::BOTTOM_LEFT,
            (true, BorderChar::BottomRight) => u::BOTTOM_RIGHT,
            (true, BorderChar::Horizontal) => u::HORIZONTAL,
            (true, BorderChar::Vertical) => u::VERTICAL,
            (false, BorderChar::TopLeft) => a::TOP_LEFT,
            (false, BorderChar::TopRight) => a::TOP_RIGHT,
            (false, BorderChar::BottomLeft) => a::BOTTOM_LEFT,
            (false, BorderChar::BottomRight) => a::BOTTOM_RIGHT,
            (false, BorderChar::Horizontal) => a::HORIZONTAL,
            (false, BorderChar::Vertical) => a::VERTICAL,
        }
    }
}
