use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

/// One registered city card. Built once during setup and never mutated,
/// so `density` stays consistent with `population` and `area`.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub region: String,
    pub code: String,
    pub city_name: String,
    pub population: u64,
    pub area: f64,
    pub gdp: f64,
    pub landmarks: u32,
    density: f64,
}

impl Card {
    pub const REGION_MAX_CHARS: usize = 50;
    pub const CODE_MAX_CHARS: usize = 10;
    pub const CITY_NAME_MAX_CHARS: usize = 100;

    pub fn new(
        region: impl Into<String>,
        code: impl Into<String>,
        city_name: impl Into<String>,
        population: u64,
        area: f64,
        gdp: f64,
        landmarks: u32,
    ) -> Self {
        // A non-positive area leaves the density undefined; it reads as zero.
        let density = if area > 0.0 {
            population as f64 / area
        } else {
            0.0
        };
        Self {
            region: truncate_chars(region.into(), Self::REGION_MAX_CHARS),
            code: truncate_chars(code.into(), Self::CODE_MAX_CHARS),
            city_name: truncate_chars(city_name.into(), Self::CITY_NAME_MAX_CHARS),
            population,
            area,
            gdp,
            landmarks,
            density,
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }
}

fn truncate_chars(mut s: String, max_chars: usize) -> String {
    if let Some((i, _)) = s.char_indices().nth(max_chars) {
        s.truncate(i);
    }
    s
}

/// Whether winning an attribute means having the higher or the lower value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Polarity {
    HigherWins,
    LowerWins,
}

/// The five comparable attributes. Discriminants match the menu ordinals.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Attribute {
    Population = 1,
    Area = 2,
    Gdp = 3,
    Landmarks = 4,
    Density = 5,
}

impl Attribute {
    pub fn from_choice(choice: u8) -> Option<Self> {
        Self::iter().find(|attribute| *attribute as u8 == choice)
    }

    pub fn value(self, card: &Card) -> f64 {
        match self {
            Self::Population => card.population as f64,
            Self::Area => card.area,
            Self::Gdp => card.gdp,
            Self::Landmarks => card.landmarks as f64,
            Self::Density => card.density(),
        }
    }

    /// Density is the one attribute where the smaller value wins.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Density => Polarity::LowerWins,
            _ => Polarity::HigherWins,
        }
    }

    /// Menu entry label, with units; `Display` gives the bare name.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Population => "População",
            Self::Area => "Área (km²)",
            Self::Gdp => "PIB (milhões)",
            Self::Landmarks => "Pontos Turísticos",
            Self::Density => "Densidade Populacional (hab/km²)",
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let v = match self {
            Self::Population => "População",
            Self::Area => "Área",
            Self::Gdp => "PIB",
            Self::Landmarks => "Pontos Turísticos",
            Self::Density => "Densidade Populacional",
        };
        write!(f, "{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_card() -> Card {
        Card::new("SP", "SP01", "São Paulo", 1000, 10.0, 699.28, 15)
    }

    #[test]
    fn test_density_from_population_and_area() {
        let card = sample_card();
        assert_eq!(card.density(), 100.0);
    }

    #[test_case(0.0)]
    #[test_case(-3.5)]
    fn test_non_positive_area_gives_zero_density(area: f64) {
        let card = Card::new("SP", "SP01", "São Paulo", 1000, area, 0.0, 0);
        assert_eq!(card.density(), 0.0);
    }

    #[test]
    fn test_text_fields_are_truncated() {
        let long_code = "X".repeat(Card::CODE_MAX_CHARS + 5);
        let card = Card::new("SP", long_code, "São Paulo", 0, 1.0, 0.0, 0);
        assert_eq!(card.code.chars().count(), Card::CODE_MAX_CHARS);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Multi-byte chars must not be split mid-codepoint.
        let accented = "á".repeat(Card::CODE_MAX_CHARS + 1);
        let card = Card::new("SP", accented, "São Paulo", 0, 1.0, 0.0, 0);
        assert_eq!(card.code.chars().count(), Card::CODE_MAX_CHARS);
    }

    #[test_case(1 => Some(Attribute::Population))]
    #[test_case(3 => Some(Attribute::Gdp))]
    #[test_case(5 => Some(Attribute::Density))]
    #[test_case(0 => None)]
    #[test_case(6 => None)]
    fn test_from_choice(choice: u8) -> Option<Attribute> {
        Attribute::from_choice(choice)
    }

    #[test_case(Attribute::Population => Polarity::HigherWins)]
    #[test_case(Attribute::Area => Polarity::HigherWins)]
    #[test_case(Attribute::Gdp => Polarity::HigherWins)]
    #[test_case(Attribute::Landmarks => Polarity::HigherWins)]
    #[test_case(Attribute::Density => Polarity::LowerWins)]
    fn test_polarity(attribute: Attribute) -> Polarity {
        attribute.polarity()
    }

    #[test_case(Attribute::Population => 1000.0)]
    #[test_case(Attribute::Area => 10.0)]
    #[test_case(Attribute::Gdp => 699.28)]
    #[test_case(Attribute::Landmarks => 15.0)]
    #[test_case(Attribute::Density => 100.0)]
    fn test_value_extraction(attribute: Attribute) -> f64 {
        attribute.value(&sample_card())
    }

    #[test]
    fn test_menu_ordinals_cover_one_to_five() {
        let ordinals: Vec<u8> = Attribute::iter().map(|a| a as u8).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    }
}
