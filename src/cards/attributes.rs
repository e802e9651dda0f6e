//! The four card attributes.
//!
//! Every attribute has exactly three values. The rules only ever ask two
//! questions of an attribute: "are these equal?" and "which value is the
//! remaining one?", so all four share the [`Attribute`] trait and the rules
//! code is written once, generically.
//!
//! ## Values
//!
//! - `Shape`: Square, Circle, Diamond
//! - `Amount`: One, Two, Three
//! - `Fill`: Outline, Half, Solid
//! - `Color`: Red, Green, Blue

use serde::{Deserialize, Serialize};

/// Number of values every attribute takes.
pub const VALUES_PER_ATTRIBUTE: usize = 3;

/// A three-valued card attribute.
pub trait Attribute: Copy + Eq + std::fmt::Debug + 'static {
    /// Human-readable attribute name ("shape", "color", ...).
    const NAME: &'static str;

    /// All values in canonical order.
    const ALL: [Self; VALUES_PER_ATTRIBUTE];

    /// Position of this value in [`Attribute::ALL`].
    fn index(self) -> usize;

    /// Inverse of [`Attribute::index`]. Wraps modulo 3.
    fn from_index(index: usize) -> Self {
        Self::ALL[index % VALUES_PER_ATTRIBUTE]
    }

    /// The value that completes a set with `self` and `other`.
    ///
    /// Equal inputs give the same value back; distinct inputs give the third one.
    fn complete(self, other: Self) -> Self {
        if self == other {
            self
        } else {
            // 0 + 1 + 2 == 3
            Self::from_index(3 - self.index() - other.index())
        }
    }
}

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, [$a:ident, $b:ident, $c:ident]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $a,
            $b,
            $c,
        }

        impl Attribute for $name {
            const NAME: &'static str = $label;
            const ALL: [Self; VALUES_PER_ATTRIBUTE] = [$name::$a, $name::$b, $name::$c];

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}

attribute_enum!(
    /// Shape drawn on the card.
    Shape, "shape", [Square, Circle, Diamond]
);

attribute_enum!(
    /// How many shapes are drawn (one to three).
    Amount, "amount", [One, Two, Three]
);

attribute_enum!(
    /// How the shapes are filled.
    Fill, "fill", [Outline, Half, Solid]
);

attribute_enum!(
    /// Color of the shapes.
    Color, "color", [Red, Green, Blue]
);

impl Amount {
    /// Number of shapes on the card.
    #[must_use]
    pub const fn count(self) -> usize {
        self as usize + 1
    }
}

impl Color {
    /// 8-bit RGB value used when drawing.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Color::Red => [255, 0, 0],
            Color::Green => [0, 255, 0],
            Color::Blue => [0, 0, 255],
        }
    }
}

impl Fill {
    /// Opacity of the shape, 0-255.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        match self {
            Fill::Half => 128,
            Fill::Outline | Fill::Solid => 255,
        }
    }

    /// Outline shapes are stroked, everything else is filled.
    #[must_use]
    pub const fn is_outline(self) -> bool {
        matches!(self, Fill::Outline)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Diamond => "diamond",
        })
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Amount::One => "one",
            Amount::Two => "two",
            Amount::Three => "three",
        })
    }
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Fill::Outline => "outlined",
            Fill::Half => "shaded",
            Fill::Solid => "solid",
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        })
    }
}
