use crate::entity::Player;
use crate::geometry::Rect;
use crate::input::InputState;

/// Tuning constants for one simulation step. Units are pixels and pixels per
/// frame; there is no delta time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub run_speed: f64,
    pub jump_impulse: f64,
    pub gravity: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub spawn_x: f64,
    pub spawn_y: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            run_speed: 2.0,
            jump_impulse: 6.0,
            gravity: 0.3,
            player_width: 30.0,
            player_height: 40.0,
            spawn_x: 20.0,
            spawn_y: 300.0,
        }
    }
}

impl PhysicsParams {
    pub fn spawn_player(&self) -> Player {
        Player::spawn(
            self.spawn_x,
            self.spawn_y,
            self.player_width,
            self.player_height,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    Landed,
    HeadBump,
    BlockedRight,
    BlockedLeft,
}

/// Advances `player` by one frame and resolves overlaps against `platforms`.
///
/// Overlaps are resolved one platform at a time in list order, each against the
/// player's already-resolved state, so simultaneous overlaps can settle
/// differently depending on platform order. Fast movement can also carry the
/// player clean through a thin platform between two frames.
pub fn step_player(
    player: &mut Player,
    input: &InputState,
    platforms: &[Rect],
    params: &PhysicsParams,
) {
    player.vx = input.horizontal() * params.run_speed;

    if input.jump && player.on_ground {
        player.vy = -params.jump_impulse;
        player.on_ground = false;
    }

    player.vy += params.gravity;
    player.rect.x += player.vx;
    player.rect.y += player.vy;

    player.on_ground = false;
    for platform in platforms {
        if !player.rect.intersects(platform) {
            continue;
        }
        if let Some(contact) = resolve_overlap(player, platform) {
            log::trace!("{:?} against platform at ({}, {})", contact, platform.x, platform.y);
        }
    }
}

/// Pushes an overlapping player out of `platform` along a single axis.
///
/// Landing and right blocking compare the edge position before this frame's
/// displacement (current edge minus velocity) with the platform edge. Head
/// bumps and left blocking compare the current edge with a 1px tolerance.
pub fn resolve_overlap(player: &mut Player, platform: &Rect) -> Option<Contact> {
    let rect = &mut player.rect;

    if player.vy > 0.0 && rect.bottom() - player.vy <= platform.y {
        rect.y = platform.y - rect.height;
        player.vy = 0.0;
        player.on_ground = true;
        Some(Contact::Landed)
    } else if player.vy < 0.0 && rect.y >= platform.bottom() - 1.0 {
        rect.y = platform.bottom();
        player.vy = 0.0;
        Some(Contact::HeadBump)
    } else if player.vx > 0.0 && rect.right() - player.vx <= platform.x {
        rect.x = platform.x - rect.width;
        Some(Contact::BlockedRight)
    } else if player.vx < 0.0 && rect.x >= platform.right() - 1.0 {
        rect.x = platform.right();
        Some(Contact::BlockedLeft)
    } else {
        None
    }
}
