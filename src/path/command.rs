use std::fmt;

/// SVG path commands, keyed by letter.
///
/// Uppercase letters take absolute coordinates; lowercase ones are
/// relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveTo { relative: bool },
    LineTo { relative: bool },
    Horizontal { relative: bool },
    Vertical { relative: bool },
    Cubic { relative: bool },
    SmoothCubic { relative: bool },
    Quadratic { relative: bool },
    SmoothQuadratic { relative: bool },
    Arc { relative: bool },
    Close,
}

const MOVE_OPERANDS: &[&str] = &["x", "y"];
const H_OPERANDS: &[&str] = &["x"];
const V_OPERANDS: &[&str] = &["y"];
const CUBIC_OPERANDS: &[&str] = &["x1", "y1", "x2", "y2", "x", "y"];
const SMOOTH_CUBIC_OPERANDS: &[&str] = &["x2", "y2", "x", "y"];
const QUADRATIC_OPERANDS: &[&str] = &["x1", "y1", "x", "y"];
const ARC_OPERANDS: &[&str] = &[
    "rx",
    "ry",
    "x-axis-rotation",
    "large-arc-flag",
    "sweep-flag",
    "x",
    "y",
];

impl Command {
    /// The full set of recognised command letters.
    pub const LETTERS: &'static str = "MmLlHhVvCcSsQqTtAaZz";

    pub fn from_letter(c: char) -> Option<Self> {
        let relative = c.is_ascii_lowercase();
        Some(match c.to_ascii_uppercase() {
            'M' => Self::MoveTo { relative },
            'L' => Self::LineTo { relative },
            'H' => Self::Horizontal { relative },
            'V' => Self::Vertical { relative },
            'C' => Self::Cubic { relative },
            'S' => Self::SmoothCubic { relative },
            'Q' => Self::Quadratic { relative },
            'T' => Self::SmoothQuadratic { relative },
            'A' => Self::Arc { relative },
            'Z' => Self::Close,
            _ => return None,
        })
    }

    pub fn letter(&self) -> char {
        let (upper, relative) = match *self {
            Self::MoveTo { relative } => ('M', relative),
            Self::LineTo { relative } => ('L', relative),
            Self::Horizontal { relative } => ('H', relative),
            Self::Vertical { relative } => ('V', relative),
            Self::Cubic { relative } => ('C', relative),
            Self::SmoothCubic { relative } => ('S', relative),
            Self::Quadratic { relative } => ('Q', relative),
            Self::SmoothQuadratic { relative } => ('T', relative),
            Self::Arc { relative } => ('A', relative),
            // 'Z' and 'z' are equivalent
            Self::Close => ('Z', false),
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    pub fn is_relative(&self) -> bool {
        match *self {
            Self::MoveTo { relative }
            | Self::LineTo { relative }
            | Self::Horizontal { relative }
            | Self::Vertical { relative }
            | Self::Cubic { relative }
            | Self::SmoothCubic { relative }
            | Self::Quadratic { relative }
            | Self::SmoothQuadratic { relative }
            | Self::Arc { relative } => relative,
            Self::Close => false,
        }
    }

    /// Names of the operands in a single parameter group, in order.
    pub fn operands(&self) -> &'static [&'static str] {
        match self {
            Self::MoveTo { .. } | Self::LineTo { .. } | Self::SmoothQuadratic { .. } => {
                MOVE_OPERANDS
            }
            Self::Horizontal { .. } => H_OPERANDS,
            Self::Vertical { .. } => V_OPERANDS,
            Self::Cubic { .. } => CUBIC_OPERANDS,
            Self::SmoothCubic { .. } => SMOOTH_CUBIC_OPERANDS,
            Self::Quadratic { .. } => QUADRATIC_OPERANDS,
            Self::Arc { .. } => ARC_OPERANDS,
            Self::Close => &[],
        }
    }

    pub fn arity(&self) -> usize {
        self.operands().len()
    }

    /// The command used for parameter groups repeated without a command
    /// letter. "If a moveto is followed by multiple pairs of coordinates,
    /// the subsequent pairs are treated as implicit lineto commands."
    pub fn repeated(&self) -> Self {
        match *self {
            Self::MoveTo { relative } => Self::LineTo { relative },
            other => other,
        }
    }

    /// True for C/c/S/s; these leave a control point for a following S/s.
    pub fn is_cubic(&self) -> bool {
        matches!(self, Self::Cubic { .. } | Self::SmoothCubic { .. })
    }

    /// True for Q/q/T/t; these leave a control point for a following T/t.
    pub fn is_quadratic(&self) -> bool {
        matches!(self, Self::Quadratic { .. } | Self::SmoothQuadratic { .. })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
