use monbattle::{
    BattleError,
    Combatant,
    ElementalType,
    Move,
    StatTable,
};

/// Builds combatants with fixed stats and moves, so tests do not depend on RNG for setup.
///
/// Stats default to 180 HP, 50 attack, 50 defense and 40 speed.
pub struct TestCombatantBuilder {
    name: String,
    typ: ElementalType,
    stats: StatTable,
    moves: Vec<Move>,
}

impl TestCombatantBuilder {
    pub fn new<S>(name: S, typ: ElementalType) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            typ,
            stats: StatTable {
                hp: 180,
                atk: 50,
                def: 50,
                spe: 40,
            },
            moves: Vec::new(),
        }
    }

    pub fn with_stats(mut self, stats: StatTable) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.stats.hp = hp;
        self
    }

    pub fn with_atk(mut self, atk: u32) -> Self {
        self.stats.atk = atk;
        self
    }

    pub fn with_def(mut self, def: u32) -> Self {
        self.stats.def = def;
        self
    }

    pub fn with_spe(mut self, spe: u32) -> Self {
        self.stats.spe = spe;
        self
    }

    pub fn with_move(mut self, mov: Move) -> Self {
        self.moves.push(mov);
        self
    }

    pub fn with_moves<I>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        self.moves.extend(moves);
        self
    }

    pub fn build(self) -> Result<Combatant, BattleError> {
        Combatant::new(self.name, self.typ, self.stats, self.moves)
    }
}
