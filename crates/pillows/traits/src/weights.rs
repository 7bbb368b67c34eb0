use pillows_types::{Animal, Eyes, Mouth, Pattern, Pompom, Rarity, Shape};

/// Version of [`WEIGHTS_V1`]. Bump on any change to any table.
pub const WEIGHT_TABLE_VERSION: u32 = 1;

/// Integer weights for the categories of one axis.
///
/// A category with weight `w` in a table of total `T` is picked with
/// probability `w / T`.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable<T: 'static> {
    entries: &'static [(T, u32)],
    total: u64,
}

impl<T: Copy + PartialEq + 'static> WeightTable<T> {
    /// Build a table. Empty tables and zero weights fail const evaluation.
    pub const fn new(entries: &'static [(T, u32)]) -> Self {
        assert!(!entries.is_empty(), "weight table must not be empty");
        let mut total = 0u64;
        let mut i = 0;
        while i < entries.len() {
            assert!(entries[i].1 > 0, "weights must be positive");
            total += entries[i].1 as u64;
            i += 1;
        }
        Self { entries, total }
    }

    pub fn entries(&self) -> &'static [(T, u32)] {
        self.entries
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Weight of `category`, zero if the table never yields it.
    pub fn weight_of(&self, category: T) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, w)| *w)
            .unwrap_or(0)
    }

    pub fn probability(&self, category: T) -> f64 {
        self.weight_of(category) as f64 / self.total as f64
    }

    /// Map a uniformly distributed lane onto a category.
    ///
    /// The lane is reduced modulo the total weight and the first category
    /// whose cumulative bound exceeds the result wins. With 64-bit lanes and
    /// totals of a few hundred the modulo bias is below 2^-55.
    pub fn pick(&self, lane: u64) -> T {
        let point = lane % self.total;
        let mut bound = 0u64;
        for &(category, weight) in self.entries {
            bound += weight as u64;
            if point < bound {
                return category;
            }
        }
        // bound == total after the loop, so point < bound always matched.
        self.entries[self.entries.len() - 1].0
    }
}

/// Every weight table the engine reads, as one versioned unit.
///
/// Gated axes have one table per unlocking tier. Those tables never contain
/// `None`: a tier that unlocks an axis always fills it.
#[derive(Debug, Clone, Copy)]
pub struct WeightSet {
    pub version: u32,
    pub mouth: WeightTable<Mouth>,
    pub eyes: WeightTable<Eyes>,
    pub pattern: WeightTable<Pattern>,
    pub rarity: WeightTable<Rarity>,
    pub shape: WeightTable<Shape>,
    pub pompom_rare: WeightTable<Pompom>,
    pub pompom_epic: WeightTable<Pompom>,
    pub pompom_legendary: WeightTable<Pompom>,
    pub animal_epic: WeightTable<Animal>,
    pub animal_legendary: WeightTable<Animal>,
}

impl WeightSet {
    /// Pompom table for a tier, `None` when the tier has no pompom.
    pub fn pompom_for(&self, rarity: Rarity) -> Option<&WeightTable<Pompom>> {
        match rarity {
            Rarity::Common | Rarity::Uncommon => None,
            Rarity::Rare => Some(&self.pompom_rare),
            Rarity::Epic => Some(&self.pompom_epic),
            Rarity::Legendary => Some(&self.pompom_legendary),
        }
    }

    /// Animal table for a tier, `None` when the tier has no animal.
    pub fn animal_for(&self, rarity: Rarity) -> Option<&WeightTable<Animal>> {
        match rarity {
            Rarity::Common | Rarity::Uncommon | Rarity::Rare => None,
            Rarity::Epic => Some(&self.animal_epic),
            Rarity::Legendary => Some(&self.animal_legendary),
        }
    }
}

/// Version 1 weights.
pub static WEIGHTS_V1: WeightSet = WeightSet {
    version: WEIGHT_TABLE_VERSION,
    mouth: WeightTable::new(&[
        (Mouth::Happy, 20),
        (Mouth::Confused, 12),
        (Mouth::Sleepy, 16),
        (Mouth::ExtremelyHappy, 8),
        (Mouth::Neutral, 14),
        (Mouth::Yawning, 12),
        (Mouth::Satisfied, 10),
        (Mouth::Surprised, 8),
    ]),
    eyes: WeightTable::new(&[
        (Eyes::Happy, 18),
        (Eyes::Confused, 12),
        (Eyes::Sleepy, 18),
        (Eyes::Closed, 14),
        (Eyes::HalfAwake, 12),
        (Eyes::Suspicious, 8),
        (Eyes::Reflective, 10),
        (Eyes::Winking, 8),
    ]),
    pattern: WeightTable::new(&[
        (Pattern::XmasTrees, 10),
        (Pattern::Leaves, 16),
        (Pattern::Fishes, 14),
        (Pattern::Cats, 14),
        (Pattern::Owls, 12),
        (Pattern::GeometricShapes, 16),
        (Pattern::Giraffes, 8),
        (Pattern::Bears, 10),
    ]),
    rarity: WeightTable::new(&[
        (Rarity::Common, 50),
        (Rarity::Uncommon, 25),
        (Rarity::Rare, 15),
        (Rarity::Epic, 7),
        (Rarity::Legendary, 3),
    ]),
    shape: WeightTable::new(&[
        (Shape::Square, 45),
        (Shape::Circle, 35),
        (Shape::Triangle, 20),
    ]),
    pompom_rare: WeightTable::new(&[
        (Pompom::Type1, 60),
        (Pompom::Type2, 30),
        (Pompom::Type3, 10),
    ]),
    pompom_epic: WeightTable::new(&[
        (Pompom::Type1, 40),
        (Pompom::Type2, 35),
        (Pompom::Type3, 25),
    ]),
    pompom_legendary: WeightTable::new(&[
        (Pompom::Type1, 20),
        (Pompom::Type2, 30),
        (Pompom::Type3, 50),
    ]),
    animal_epic: WeightTable::new(&[
        (Animal::Cat, 30),
        (Animal::Dog, 25),
        (Animal::Bird, 20),
        (Animal::Panda, 15),
        (Animal::Zebra, 10),
    ]),
    animal_legendary: WeightTable::new(&[
        (Animal::Cat, 10),
        (Animal::Dog, 15),
        (Animal::Bird, 20),
        (Animal::Panda, 25),
        (Animal::Zebra, 30),
    ]),
};
