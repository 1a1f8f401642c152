use crate::cards::{Attribute, Card, Polarity};

/// Result of comparing one attribute between the two cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    /// The same outcome as seen with the cards swapped.
    pub fn flipped(self) -> Self {
        match self {
            Self::FirstWins => Self::SecondWins,
            Self::SecondWins => Self::FirstWins,
            Self::Tie => Self::Tie,
        }
    }

    /// Points awarded to (first, second): one to the winner, none on a tie.
    pub fn points(self) -> (u8, u8) {
        match self {
            Self::FirstWins => (1, 0),
            Self::SecondWins => (0, 1),
            Self::Tie => (0, 0),
        }
    }
}

/// Compares one attribute between two cards. Ties require exact float
/// equality; near-equal values still produce a winner.
pub fn compare_attribute(first: &Card, second: &Card, attribute: Attribute) -> Outcome {
    let v1 = attribute.value(first);
    let v2 = attribute.value(second);
    let (if_greater, if_less) = match attribute.polarity() {
        Polarity::HigherWins => (Outcome::FirstWins, Outcome::SecondWins),
        Polarity::LowerWins => (Outcome::SecondWins, Outcome::FirstWins),
    };
    if v1 > v2 {
        if_greater
    } else if v1 < v2 {
        if_less
    } else {
        Outcome::Tie
    }
}

/// Point totals of a dual comparison: one point per attribute won.
pub fn dual_points(first: &Card, second: &Card, a: Attribute, b: Attribute) -> (u8, u8) {
    let (a1, a2) = compare_attribute(first, second, a).points();
    let (b1, b2) = compare_attribute(first, second, b).points();
    (a1 + b1, a2 + b2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    // density 100
    fn card_a() -> Card {
        Card::new("SP", "SP01", "São Paulo", 1000, 10.0, 500.0, 12)
    }

    // density 50
    fn card_b() -> Card {
        Card::new("RJ", "RJ02", "Rio de Janeiro", 500, 10.0, 300.0, 9)
    }

    #[test_case(Attribute::Population => Outcome::FirstWins; "larger population wins")]
    #[test_case(Attribute::Area => Outcome::Tie; "equal area ties")]
    #[test_case(Attribute::Gdp => Outcome::FirstWins; "larger gdp wins")]
    #[test_case(Attribute::Landmarks => Outcome::FirstWins; "more landmarks wins")]
    #[test_case(Attribute::Density => Outcome::SecondWins; "smaller density wins")]
    fn test_compare_attribute(attribute: Attribute) -> Outcome {
        compare_attribute(&card_a(), &card_b(), attribute)
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let (a, b) = (card_a(), card_b());
        for attribute in Attribute::iter() {
            assert_eq!(
                compare_attribute(&a, &b, attribute),
                compare_attribute(&b, &a, attribute).flipped(),
            );
        }
    }

    #[test]
    fn test_exact_equality_ties_near_equality_does_not() {
        let a = Card::new("SP", "A", "Alpha", 0, 1.0, 100.0, 0);
        let tied = Card::new("RJ", "B", "Beta", 0, 1.0, 100.0, 0);
        let close = Card::new("RJ", "B", "Beta", 0, 1.0, 100.0001, 0);
        assert_eq!(compare_attribute(&a, &tied, Attribute::Gdp), Outcome::Tie);
        assert_eq!(
            compare_attribute(&a, &close, Attribute::Gdp),
            Outcome::SecondWins
        );
    }

    #[test_case(Outcome::FirstWins => (1, 0))]
    #[test_case(Outcome::SecondWins => (0, 1))]
    #[test_case(Outcome::Tie => (0, 0))]
    fn test_points(outcome: Outcome) -> (u8, u8) {
        outcome.points()
    }

    #[test]
    fn test_dual_points_split() {
        // A wins population, B wins density: one point each.
        let points = dual_points(&card_a(), &card_b(), Attribute::Population, Attribute::Density);
        assert_eq!(points, (1, 1));
    }

    #[test]
    fn test_dual_points_sweep() {
        let points = dual_points(&card_a(), &card_b(), Attribute::Population, Attribute::Gdp);
        assert_eq!(points, (2, 0));
    }

    #[test]
    fn test_dual_points_double_tie() {
        let a = card_a();
        let points = dual_points(&a, &a.clone(), Attribute::Population, Attribute::Area);
        assert_eq!(points, (0, 0));
    }

    #[test]
    fn test_dual_points_never_exceed_two() {
        let (a, b) = (card_a(), card_b());
        for first in Attribute::iter() {
            for second in Attribute::iter().filter(|s| *s != first) {
                let (p1, p2) = dual_points(&a, &b, first, second);
                assert!(p1 + p2 <= 2);
            }
        }
    }
}
