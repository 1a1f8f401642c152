/// Top-level session stages. A session registers the cards in `Setup`,
/// then stays in `MenuLoop` until the player quits.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    #[default]
    Setup,
    MenuLoop,
    Exit,
}

/// A recognized main-menu entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuChoice {
    SingleComparison,
    DualComparison,
    Quit,
}

impl MenuChoice {
    pub fn from_input(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::SingleComparison),
            2 => Some(Self::DualComparison),
            3 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Pure transition function for the session. `choice` is `None` during
/// setup and for unrecognized menu input, which leaves the stage alone.
pub fn next_stage(stage: Stage, choice: Option<MenuChoice>) -> Stage {
    match stage {
        Stage::Setup => Stage::MenuLoop,
        Stage::MenuLoop => match choice {
            Some(MenuChoice::Quit) => Stage::Exit,
            _ => Stage::MenuLoop,
        },
        Stage::Exit => Stage::Exit,
    }
}
