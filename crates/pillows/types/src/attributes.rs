use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Declares a categorical axis enum with stable numeric codes.
///
/// Codes are the on-wire representation, in serde as well as in export
/// records, and must never be reordered.
macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident : $axis:expr => { $($variant:ident = $code:literal => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            /// Every category in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable numeric code.
            pub fn code(self) -> u8 {
                self as u8
            }

            /// Human-readable label.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_code(code: u8) -> Result<Self, TypeError> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(TypeError::UnknownCode { axis: $axis, code }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(category: $name) -> u8 {
                category.code()
            }
        }

        impl TryFrom<u8> for $name {
            type Error = TypeError;

            fn try_from(code: u8) -> Result<Self, TypeError> {
                $name::from_code(code)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

category! {
    /// Mouth expression.
    Mouth: Axis::Mouth => {
        Happy = 0 => "Happy",
        Confused = 1 => "Confused",
        Sleepy = 2 => "Sleepy",
        ExtremelyHappy = 3 => "Extremely Happy",
        Neutral = 4 => "Neutral",
        Yawning = 5 => "Yawning",
        Satisfied = 6 => "Satisfied",
        Surprised = 7 => "Surprised",
    }
}

category! {
    /// Eye expression.
    Eyes: Axis::Eyes => {
        Happy = 0 => "Happy",
        Confused = 1 => "Confused",
        Sleepy = 2 => "Sleepy",
        Closed = 3 => "Closed",
        HalfAwake = 4 => "Half-awake",
        Suspicious = 5 => "Suspicious",
        Reflective = 6 => "Reflective",
        Winking = 7 => "Winking",
    }
}

category! {
    /// Fabric print.
    Pattern: Axis::Pattern => {
        XmasTrees = 0 => "X'mas Trees",
        Leaves = 1 => "Leaves",
        Fishes = 2 => "Fishes",
        Cats = 3 => "Cats",
        Owls = 4 => "Owls",
        GeometricShapes = 5 => "Geometric Shapes",
        Giraffes = 6 => "Giraffes",
        Bears = 7 => "Bears",
    }
}

category! {
    /// Rarity tier, ordered from most to least common.
    ///
    /// The base axis: it decides which gated axes a pillow may carry.
    Rarity: Axis::Rarity => {
        Common = 0 => "Common",
        Uncommon = 1 => "Uncommon",
        Rare = 2 => "Rare",
        Epic = 3 => "Epic",
        Legendary = 4 => "Legendary",
    }
}

category! {
    /// Pillow silhouette.
    Shape: Axis::Shape => {
        Square = 0 => "Square",
        Circle = 1 => "Circle",
        Triangle = 2 => "Triangle",
    }
}

category! {
    /// Pompom decoration. Gated: `Rare` and above.
    Pompom: Axis::Pompom => {
        None = 0 => "None",
        Type1 = 1 => "Type 1",
        Type2 = 2 => "Type 2",
        Type3 = 3 => "Type 3",
    }
}

category! {
    /// Embroidered animal. Gated: `Epic` and above.
    Animal: Axis::Animal => {
        None = 0 => "None",
        Cat = 1 => "Cat",
        Dog = 2 => "Dog",
        Bird = 3 => "Bird",
        Panda = 4 => "Panda",
        Zebra = 5 => "Zebra",
    }
}

impl Rarity {
    /// Whether this tier may (and always does) carry a pompom.
    pub fn unlocks_pompom(self) -> bool {
        self >= Rarity::Rare
    }

    /// Whether this tier may (and always does) carry an animal.
    pub fn unlocks_animal(self) -> bool {
        self >= Rarity::Epic
    }
}

impl Pompom {
    pub fn is_none(self) -> bool {
        self == Pompom::None
    }
}

impl Animal {
    pub fn is_none(self) -> bool {
        self == Animal::None
    }
}

/// One attribute dimension.
///
/// The discriminant doubles as the lane a derivation reads from the per-item
/// digest, so it is part of the derivation format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Mouth = 0,
    Eyes = 1,
    Pattern = 2,
    Rarity = 3,
    Shape = 4,
    Pompom = 5,
    Animal = 6,
}

impl Axis {
    pub const ALL: [Axis; 7] = [
        Axis::Mouth,
        Axis::Eyes,
        Axis::Pattern,
        Axis::Rarity,
        Axis::Shape,
        Axis::Pompom,
        Axis::Animal,
    ];

    /// Lane index into the per-item digest.
    pub fn lane(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Mouth => "mouth",
            Axis::Eyes => "eyes",
            Axis::Pattern => "pattern",
            Axis::Rarity => "rarity",
            Axis::Shape => "shape",
            Axis::Pompom => "pompom",
            Axis::Animal => "animal",
        }
    }

    /// Number of categories on this axis, including `None` for gated axes.
    pub fn cardinality(self) -> usize {
        match self {
            Axis::Mouth => Mouth::ALL.len(),
            Axis::Eyes => Eyes::ALL.len(),
            Axis::Pattern => Pattern::ALL.len(),
            Axis::Rarity => Rarity::ALL.len(),
            Axis::Shape => Shape::ALL.len(),
            Axis::Pompom => Pompom::ALL.len(),
            Axis::Animal => Animal::ALL.len(),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The full trait set of a single pillow.
///
/// Computed from `(seed, index)`, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    pub mouth: Mouth,
    pub eyes: Eyes,
    pub pattern: Pattern,
    pub rarity: Rarity,
    pub shape: Shape,
    pub pompom: Pompom,
    pub animal: Animal,
}

impl AttributeSet {
    /// Numeric code of one axis.
    pub fn code(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Mouth => self.mouth.code(),
            Axis::Eyes => self.eyes.code(),
            Axis::Pattern => self.pattern.code(),
            Axis::Rarity => self.rarity.code(),
            Axis::Shape => self.shape.code(),
            Axis::Pompom => self.pompom.code(),
            Axis::Animal => self.animal.code(),
        }
    }

    /// Codes of all seven axes in [`Axis::ALL`] order.
    pub fn codes(&self) -> [u8; 7] {
        Axis::ALL.map(|axis| self.code(axis))
    }

    /// Rebuild a set from codes in [`Axis::ALL`] order.
    pub fn from_codes(codes: [u8; 7]) -> Result<Self, TypeError> {
        Ok(Self {
            mouth: Mouth::from_code(codes[0])?,
            eyes: Eyes::from_code(codes[1])?,
            pattern: Pattern::from_code(codes[2])?,
            rarity: Rarity::from_code(codes[3])?,
            shape: Shape::from_code(codes[4])?,
            pompom: Pompom::from_code(codes[5])?,
            animal: Animal::from_code(codes[6])?,
        })
    }
}

impl std::fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} | mouth={} eyes={} pattern={}",
            self.rarity, self.shape, self.mouth, self.eyes, self.pattern
        )?;
        if !self.pompom.is_none() {
            write!(f, " pompom={}", self.pompom)?;
        }
        if !self.animal.is_none() {
            write!(f, " animal={}", self.animal)?;
        }
        Ok(())
    }
}
