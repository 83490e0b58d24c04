mod catalog;
mod r#move;
mod move_category;

pub use catalog::{
    MEGA_MOVE_POWER,
    MEGA_MOVE_USES,
    MoveCatalog,
    STAT_MOVE_MULTIPLIER,
};
pub use move_category::MoveCategory;
pub use r#move::{
    Move,
    MoveKind,
    MoveUses,
    StatEffect,
};
