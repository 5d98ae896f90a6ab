use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Resting,
    Scrolled,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > config::HEADER_SCROLL_THRESHOLD {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Resting
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            HeaderStyle::Resting => {
                "background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(20px);"
            }
            HeaderStyle::Scrolled => {
                "background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(20px);"
            }
        }
    }
}
