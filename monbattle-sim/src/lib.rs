mod choice;
mod shell;

pub use choice::{
    InvalidChoiceError,
    MoveChoice,
    TypeChoice,
};
pub use shell::Shell;
