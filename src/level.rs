use crate::entity::Coin;
use crate::geometry::Rect;

pub const FIELD_WIDTH: u32 = 800;
pub const FIELD_HEIGHT: u32 = 400;

/// A hand-authored stage. Coins are stored as anchor positions so every
/// attempt builds its own uncollected set.
#[derive(Debug)]
pub struct LevelDef {
    pub platforms: &'static [Rect],
    pub coins: &'static [(f64, f64)],
}

impl LevelDef {
    pub fn spawn_coins(&self) -> Vec<Coin> {
        self.coins.iter().map(|&(x, y)| Coin::new(x, y)).collect()
    }
}

pub static LEVELS: &[LevelDef] = &[
    LevelDef {
        platforms: &[
            Rect::new(0.0, 360.0, 800.0, 40.0),
            Rect::new(200.0, 280.0, 200.0, 20.0),
        ],
        coins: &[(100.0, 320.0), (250.0, 240.0), (500.0, 320.0)],
    },
    LevelDef {
        platforms: &[
            Rect::new(0.0, 360.0, 800.0, 40.0),
            Rect::new(150.0, 300.0, 150.0, 20.0),
            Rect::new(350.0, 250.0, 150.0, 20.0),
            Rect::new(550.0, 200.0, 150.0, 20.0),
        ],
        coins: &[(170.0, 260.0), (370.0, 210.0), (570.0, 160.0)],
    },
];
