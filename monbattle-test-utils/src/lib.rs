mod log_assert;
mod rng;
mod setup;
mod test_battle_builder;
mod test_combatant_builder;

pub use log_assert::{
    assert_logs_since_start_eq,
    assert_new_logs_eq,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_logging;
pub use test_battle_builder::TestBattleBuilder;
pub use test_combatant_builder::TestCombatantBuilder;
