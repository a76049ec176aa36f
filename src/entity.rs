use crate::geometry::Rect;

pub const COIN_SIZE: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vx: f64,
    pub vy: f64,
    pub on_ground: bool,
}

impl Player {
    /// A motionless, airborne player with its top-left corner at `(x, y)`.
    pub fn spawn(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            collected: false,
        }
    }

    /// Marks the coin collected if `player` overlaps it. Returns true only on
    /// the pickup itself; a collected coin stays collected.
    pub fn try_collect(&mut self, player: &Rect) -> bool {
        if self.collected || !player.intersects(&self.rect) {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Returns how many coins were newly collected by `player` this sweep.
pub fn collect_coins(player: &Rect, coins: &mut [Coin]) -> usize {
    coins
        .iter_mut()
        .map(|coin| coin.try_collect(player))
        .filter(|&fresh| fresh)
        .count()
}
