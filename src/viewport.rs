//! Mobile and performance helpers keyed off the viewport.

pub const CRITICAL_STYLESHEETS: &[&str] = &[
    "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700;800&display=swap",
];

/// Floating shapes kept visible on narrow screens.
pub const MOBILE_VISIBLE_SHAPES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether the `index`-th floating shape stays displayed.
    pub fn shows_shape(self, index: usize) -> bool {
        match self {
            Self::Mobile => index < MOBILE_VISIBLE_SHAPES,
            Self::Desktop => true,
        }
    }
}

/// Body `overflow` while the mobile nav is open or closed.
pub fn body_overflow(nav_open: bool) -> &'static str {
    if nav_open {
        "hidden"
    } else {
        ""
    }
}

/// Source to swap in for a lazily loaded image, if it names one.
pub fn lazy_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|src| !src.is_empty())
}

/// Whether a resize should start the particle field: wide enough and no
/// field running yet.
pub fn should_start_particles(width: f64, breakpoint: f64, field_present: bool) -> bool {
    !field_present && width > breakpoint
}
