// Hand-authored tiles. 0 is transparent (or the universal background color),
// 1-3 select a color from the tile's palette.

use crate::common::Pixels;

// Player ship, 16x16 in four quadrants.
pub const PLAYER_TOP_LEFT: Pixels = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 1, 1, 2, 2, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
];

pub const PLAYER_TOP_RIGHT: Pixels = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 1, 1, 2, 2, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
];

pub const PLAYER_BOTTOM_LEFT: Pixels = [
    [0, 1, 1, 0, 0, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const PLAYER_BOTTOM_RIGHT: Pixels = [
    [0, 1, 1, 0, 0, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const PLAYER_BULLET: Pixels = [
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const ENEMY1: Pixels = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [1, 2, 1, 3, 3, 1, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 3, 3, 2, 2, 1],
    [1, 1, 2, 2, 2, 2, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
];

// Diamond drone.
pub const ENEMY2: Pixels = [
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [1, 2, 3, 1, 1, 3, 2, 1],
    [1, 2, 3, 1, 1, 3, 2, 1],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

// Heavy fighter.
pub const ENEMY3: Pixels = [
    [1, 1, 0, 0, 0, 0, 1, 1],
    [1, 2, 1, 1, 1, 1, 2, 1],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [1, 2, 2, 3, 3, 2, 2, 1],
    [0, 1, 2, 2, 2, 2, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [1, 1, 0, 1, 1, 0, 1, 1],
];

pub const ENEMY_BULLET: Pixels = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const POWERUP_WEAPON: Pixels = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [1, 3, 2, 3, 3, 2, 3, 1],
    [1, 3, 2, 3, 3, 2, 3, 1],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
];

pub const POWERUP_SHIELD: Pixels = [
    [0, 1, 1, 1, 1, 1, 1, 0],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

pub const POWERUP_LIFE: Pixels = [
    [0, 1, 1, 0, 0, 1, 1, 0],
    [1, 2, 2, 1, 1, 2, 2, 1],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

// Explosion animation, in playback order.
pub const EXPLOSION1: Pixels = [
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

pub const EXPLOSION2: Pixels = [
    [1, 0, 0, 1, 1, 0, 0, 1],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [1, 2, 3, 2, 2, 3, 2, 1],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 1, 1, 2, 2, 1, 1, 0],
    [1, 0, 0, 1, 1, 0, 0, 1],
];

pub const EXPLOSION3: Pixels = [
    [1, 0, 0, 0, 0, 0, 0, 1],
    [0, 1, 0, 1, 1, 0, 1, 0],
    [0, 0, 2, 0, 0, 2, 0, 0],
    [0, 1, 0, 3, 3, 0, 1, 0],
    [0, 1, 0, 3, 3, 0, 1, 0],
    [0, 0, 2, 0, 0, 2, 0, 0],
    [0, 1, 0, 1, 1, 0, 1, 0],
    [1, 0, 0, 0, 0, 0, 0, 1],
];

pub const EXPLOSION4: Pixels = [
    [1, 0, 0, 0, 0, 0, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0, 1],
];

// Boss, 16x16 in four quadrants.
pub const BOSS_TOP_LEFT: Pixels = [
    [0, 0, 1, 1, 1, 0, 0, 0],
    [0, 1, 2, 2, 2, 1, 0, 0],
    [1, 2, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 3, 3, 3, 2, 2],
    [1, 2, 3, 3, 0, 0, 3, 2],
    [1, 2, 3, 3, 0, 0, 3, 2],
    [1, 2, 2, 3, 3, 3, 3, 2],
    [1, 2, 2, 2, 2, 2, 2, 3],
];

pub const BOSS_TOP_RIGHT: Pixels = [
    [0, 0, 0, 1, 1, 1, 0, 0],
    [0, 0, 1, 2, 2, 2, 1, 0],
    [1, 1, 2, 3, 3, 2, 2, 1],
    [2, 2, 3, 3, 3, 3, 2, 1],
    [2, 3, 0, 0, 3, 3, 2, 1],
    [2, 3, 0, 0, 3, 3, 2, 1],
    [2, 3, 3, 3, 3, 2, 2, 1],
    [3, 2, 2, 2, 2, 2, 2, 1],
];

pub const BOSS_BOTTOM_LEFT: Pixels = [
    [0, 1, 2, 2, 2, 2, 3, 3],
    [0, 1, 2, 2, 1, 1, 1, 1],
    [0, 0, 1, 2, 1, 0, 1, 1],
    [0, 0, 1, 2, 1, 0, 1, 2],
    [0, 1, 2, 1, 0, 0, 1, 2],
    [0, 1, 1, 0, 0, 0, 1, 3],
    [0, 0, 0, 0, 0, 0, 1, 3],
    [0, 0, 0, 0, 0, 0, 0, 1],
];

pub const BOSS_BOTTOM_RIGHT: Pixels = [
    [3, 3, 2, 2, 2, 2, 1, 0],
    [1, 1, 1, 1, 2, 2, 1, 0],
    [1, 1, 0, 1, 2, 1, 0, 0],
    [2, 1, 0, 1, 2, 1, 0, 0],
    [2, 1, 0, 0, 1, 2, 1, 0],
    [3, 1, 0, 0, 0, 1, 1, 0],
    [3, 1, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0, 0],
];

pub const PARTICLE: Pixels = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const STARS: Pixels = [
    [0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0],
];

pub const STARS_SPARSE: Pixels = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 2, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

// Score digits 0-9, decoded with `glyph::parse_glyph`.
pub const DIGIT_GLYPHS: [&str; 10] = [
    r"
    ..3333..
    .33..33.
    .33..33.
    .33..33.
    .33..33.
    .33..33.
    ..3333..
    ",
    r"
    ...33
    ...33
    ...33
    ...33
    ...33
    ...33
    ...33
    ",
    r"
    ..3333..
    .33..33.
    .....33.
    ....33..
    ...33...
    ..33....
    .333333.
    ",
    r"
    ..3333..
    .33..33.
    .....33.
    ...333..
    .....33.
    .33..33.
    ..3333..
    ",
    r"
    ....333.
    ...3333.
    ..33.33.
    .33..33.
    .333333.
    .....33.
    .....33.
    ",
    r"
    .333333.
    .33.....
    .33333..
    .....33.
    .....33.
    .33..33.
    ..3333..
    ",
    r"
    ..3333..
    .33.....
    .33.....
    .33333..
    .33..33.
    .33..33.
    ..3333..
    ",
    r"
    .333333.
    .....33.
    ....33..
    ...33...
    ...33...
    ...33...
    ...33...
    ",
    r"
    ..3333..
    .33..33.
    .33..33.
    ..3333..
    .33..33.
    .33..33.
    ..3333..
    ",
    r"
    ..3333..
    .33..33.
    .33..33.
    ..33333.
    .....33.
    .....33.
    ..3333..
    ",
];
