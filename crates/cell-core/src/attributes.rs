//! Attribute enumerations and their field decoders.

use crate::error::{CellError, Result};
use crate::reader::{between, TokenReader};

/// Declares a field-less enum stored in the stream as an integer code.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $what:literal {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every value, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Whether `code` names a value of this enumeration.
            pub fn verify(code: i32) -> bool {
                Self::from_code(code).is_some()
            }

            /// Read one code field and decode it.
            pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
                let code = reader.read_int_with($what, Self::verify)?;
                Self::from_code(code).ok_or_else(|| {
                    CellError::parsing(reader.line_number(), format!("invalid {} {code}", $what))
                })
            }
        }
    };
}

/// An RGB triple with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

coded_enum! {
    /// The sixteen-entry cell color palette.
    pub enum CellColor as "color" {
        Black = 0,
        Red = 1,
        Green = 2,
        Yellow = 3,
        Blue = 4,
        Magenta = 5,
        Cyan = 6,
        White = 7,
        LightGray = 8,
        DarkGray = 9,
        Brown = 10,
        LightBlue = 11,
        Purple = 12,
        Orange = 13,
        LightGreen = 14,
        LightYellow = 15,
    }
}

impl CellColor {
    pub fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0.0, 0.0, 0.0),
            Self::Red => Rgb::new(1.0, 0.0, 0.0),
            Self::Green => Rgb::new(0.0, 1.0, 0.0),
            Self::Yellow => Rgb::new(1.0, 1.0, 0.0),
            Self::Blue => Rgb::new(0.0, 0.0, 1.0),
            Self::Magenta => Rgb::new(1.0, 0.0, 1.0),
            Self::Cyan => Rgb::new(0.0, 1.0, 1.0),
            Self::White => Rgb::new(1.0, 1.0, 1.0),
            Self::LightGray => Rgb::new(0.75, 0.75, 0.75),
            Self::DarkGray => Rgb::new(0.4, 0.4, 0.4),
            Self::Brown => Rgb::new(0.6, 0.4, 0.2),
            Self::LightBlue => Rgb::new(0.5, 0.75, 1.0),
            Self::Purple => Rgb::new(0.5, 0.0, 0.5),
            Self::Orange => Rgb::new(1.0, 0.5, 0.0),
            Self::LightGreen => Rgb::new(0.5, 1.0, 0.5),
            Self::LightYellow => Rgb::new(1.0, 1.0, 0.6),
        }
    }
}

coded_enum! {
    pub enum LineStyle as "line style" {
        Solid = 0,
        Dashed = 1,
        Dotted = 2,
        Halftone = 3,
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::Solid
    }
}

coded_enum! {
    /// How a cell's faces are drawn.
    pub enum DisplayStyle as "display style" {
        Wireframe = 0,
        Solid = 1,
        Transparent1 = 2,
        Transparent2 = 3,
        Transparent3 = 4,
        Transparent4 = 5,
        Transparent5 = 6,
        Transparent6 = 7,
        Transparent7 = 8,
        Transparent8 = 9,
        Transparent9 = 10,
        Transparent10 = 11,
        Transparent11 = 12,
        Transparent12 = 13,
        Transparent13 = 14,
        Transparent14 = 15,
        Transparent15 = 16,
    }
}

impl DisplayStyle {
    /// Opacity in `0.0..=1.0`. Wireframe and solid are fully opaque; each
    /// transparency level removes another sixteenth.
    pub fn opacity(self) -> f64 {
        match self {
            Self::Wireframe | Self::Solid => 1.0,
            other => 1.0 - f64::from(other.code() - 1) / 16.0,
        }
    }

    pub fn is_wireframe(self) -> bool {
        self == Self::Wireframe
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::Solid
    }
}

coded_enum! {
    pub enum JointType as "joint type" {
        /// Only a terminal control frame, no motion.
        TcfOnly = 0,
        Rotational = 1,
        Translational = 2,
    }
}

impl Default for JointType {
    fn default() -> Self {
        Self::Rotational
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

coded_enum! {
    /// Order in which the three axis rotations of a transformation apply.
    pub enum RotationOrder as "rotation order" {
        Xyz = 0,
        Xzy = 1,
        Yxz = 2,
        Yzx = 3,
        Zxy = 4,
        Zyx = 5,
    }
}

impl RotationOrder {
    pub fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            Self::Xyz => [X, Y, Z],
            Self::Xzy => [X, Z, Y],
            Self::Yxz => [Y, X, Z],
            Self::Yzx => [Y, Z, X],
            Self::Zxy => [Z, X, Y],
            Self::Zyx => [Z, Y, X],
        }
    }
}

impl Default for RotationOrder {
    fn default() -> Self {
        Self::Xyz
    }
}

/// Line width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineWidth(u8);

impl LineWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(width: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&width).then_some(Self(width))
    }

    pub fn pixels(self) -> u8 {
        self.0
    }

    pub fn verify(width: i32) -> bool {
        between(i32::from(Self::MIN), i32::from(Self::MAX))(width)
    }

    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let width = reader.read_int_with("line width", Self::verify)?;
        Ok(Self(width as u8))
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self(Self::MIN)
    }
}
