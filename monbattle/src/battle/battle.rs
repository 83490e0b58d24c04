use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::{
        BattleEngineOptions,
        DamageCalculation,
        MoveDamage,
        calculate_damage,
    },
    error::BattleError,
    log::{
        Event,
        EventLog,
    },
    mons::{
        Combatant,
        StatTarget,
        TypeEffectiveness,
    },
    moves::{
        MoveCategory,
        MoveKind,
    },
    rng::PseudoRandomNumberGenerator,
};

/// One of the two sides of a battle.
///
/// Side A is the first combatant the battle was created with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Side {
    #[string = "a"]
    A,
    #[string = "b"]
    B,
}

impl Side {
    /// The opposing side.
    pub fn other(&self) -> Side {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// The state of a [`Battle`].
///
/// A turn is resolved entirely inside [`Battle::execute_turn`], so a battle is only ever observed
/// waiting on a move or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleState {
    /// Waiting on the combatant of the given side to select a move.
    AwaitingMove(Side),
    /// A combatant fainted.
    Finished { winner: Side },
}

/// A stat reduction applied by a stat move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub target: StatTarget,
    pub from: u32,
    pub to: u32,
}

/// The outcome of a single turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    /// The turn number, starting at 1.
    pub turn: u64,
    pub attacker: Side,
    pub defender: Side,
    pub move_name: String,
    pub category: MoveCategory,
    /// Damage dealt to the defender. Always 0 for stat moves.
    pub damage_dealt: u32,
    pub defender_remaining_health: u32,
    /// Did the defender faint? If so, the battle is finished.
    pub fainted: bool,
    /// Effectiveness of the move against the defender, for damaging moves.
    pub effectiveness: Option<TypeEffectiveness>,
    /// The stat reduction applied to the defender, for stat moves.
    pub stat_change: Option<StatChange>,
    /// Every factor of the damage calculation, for damaging moves.
    pub calculation: Option<DamageCalculation>,
}

/// A battle between two combatants.
///
/// The battle owns both combatants and the random number generator shared by every random
/// decision. It never performs I/O: the caller supplies one move selection per turn through
/// [`Battle::execute_turn`] and renders the returned [`TurnResult`] (or the event log) however it
/// likes.
pub struct Battle {
    combatants: [Combatant; 2],
    state: BattleState,
    turn: u64,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    options: BattleEngineOptions,
    log: EventLog,
}

impl Battle {
    /// Creates a new battle between two combatants, with a random number generator created from
    /// the engine options.
    pub fn new(a: Combatant, b: Combatant, options: BattleEngineOptions) -> Self {
        let prng = (options.rng_factory)(options.seed);
        Self::with_prng(a, b, prng, options)
    }

    /// Creates a new battle that continues to use an existing random number generator.
    ///
    /// The faster combatant moves first. Ties favor side A.
    pub fn with_prng(
        a: Combatant,
        b: Combatant,
        prng: Box<dyn PseudoRandomNumberGenerator>,
        options: BattleEngineOptions,
    ) -> Self {
        let first = if b.stats().spe > a.stats().spe {
            Side::B
        } else {
            Side::A
        };
        let mut battle = Self {
            combatants: [a, b],
            state: BattleState::AwaitingMove(first),
            turn: 0,
            prng,
            options,
            log: EventLog::new(),
        };
        battle.log_start(first);
        battle
    }

    fn log_start(&mut self, first: Side) {
        for side in [Side::A, Side::B] {
            let mon = &self.combatants[side.index()];
            let event = crate::log_event!(
                "mon",
                ("side", side),
                ("name", mon.name()),
                ("type", mon.typ()),
                ("health", mon.max_health()),
            );
            self.log.push(event);
        }
        self.log
            .push(crate::log_event!("battlestart", ("first", first)));
        log::info!(
            "battle started between {} and {} (seed {})",
            self.combatants[0].name(),
            self.combatants[1].name(),
            self.prng.initial_seed()
        );
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// The side that selects the next move, if the battle is still going.
    pub fn active(&self) -> Option<Side> {
        match self.state {
            BattleState::AwaitingMove(side) => Some(side),
            BattleState::Finished { .. } => None,
        }
    }

    pub fn active_combatant(&self) -> Option<&Combatant> {
        self.active().map(|side| self.combatant(side))
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatants(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            BattleState::Finished { winner } => Some(winner),
            BattleState::AwaitingMove(_) => None,
        }
    }

    pub fn ended(&self) -> bool {
        self.winner().is_some()
    }

    /// The number of turns executed so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn options(&self) -> &BattleEngineOptions {
        &self.options
    }

    /// The random number generator shared by every random decision in the battle.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Does the battle have new logs since the last call to [`Self::new_log_entries`]?
    pub fn has_new_logs(&self) -> bool {
        self.log.has_new_messages()
    }

    /// Returns new battle logs since the last call to this method.
    pub fn new_log_entries(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    /// Returns all battle logs.
    pub fn full_log(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    /// Executes one turn: the active combatant uses the move in the given slot (zero-based) on
    /// the other combatant.
    ///
    /// A rejected selection leaves the battle untouched, so the caller can simply ask again.
    pub fn execute_turn(&mut self, slot: usize) -> Result<TurnResult, BattleError> {
        let attacker = match self.state {
            BattleState::AwaitingMove(side) => side,
            BattleState::Finished { .. } => return Err(BattleError::BattleFinished),
        };
        let defender = attacker.other();

        let [a, b] = &mut self.combatants;
        let (attacker_mon, defender_mon) = match attacker {
            Side::A => (a, b),
            Side::B => (b, a),
        };

        let mov = attacker_mon.move_slot_mut(slot)?;
        mov.consume_use()?;
        let mov = mov.clone();

        self.turn += 1;
        let mut events = vec![
            crate::log_event!("turn", ("turn", self.turn)),
            crate::log_event!(
                "move",
                ("mon", attacker_mon.name()),
                ("name", mov.name()),
                ("target", defender_mon.name()),
            ),
        ];

        let mut result = TurnResult {
            turn: self.turn,
            attacker,
            defender,
            move_name: mov.name().to_owned(),
            category: mov.category(),
            damage_dealt: 0,
            defender_remaining_health: defender_mon.health(),
            fainted: false,
            effectiveness: None,
            stat_change: None,
            calculation: None,
        };

        match mov.kind() {
            MoveKind::Stat { effect } => {
                let (from, to) = defender_mon.reduce_stat(effect.target, effect.multiplier);
                events.push(crate::log_event!(
                    "unboost",
                    ("mon", defender_mon.name()),
                    ("stat", effect.target),
                    ("from", from),
                    ("to", to),
                ));
                result.stat_change = Some(StatChange {
                    target: effect.target,
                    from,
                    to,
                });
            }
            MoveKind::Damage { .. } | MoveKind::Mega { .. } => {
                let damage = calculate_damage(
                    attacker_mon,
                    defender_mon,
                    &mov,
                    self.prng.as_mut(),
                    self.options.randomize_damage,
                );
                if let MoveDamage::Damage(calculation) = damage {
                    if self.options.log_damage_calculation {
                        events.push(damage_calculation_event(&calculation));
                    }
                    match calculation.effectiveness {
                        TypeEffectiveness::Strong => events.push(crate::log_event!(
                            "supereffective",
                            ("mon", defender_mon.name()),
                        )),
                        TypeEffectiveness::Weak => events.push(crate::log_event!(
                            "resisted",
                            ("mon", defender_mon.name()),
                        )),
                        TypeEffectiveness::Normal => (),
                    }
                    let health = defender_mon.apply_damage(calculation.damage);
                    events.push(crate::log_event!(
                        "damage",
                        ("mon", defender_mon.name()),
                        (
                            "health",
                            format!("{health}/{}", defender_mon.max_health())
                        ),
                    ));
                    result.damage_dealt = calculation.damage;
                    result.defender_remaining_health = health;
                    result.effectiveness = Some(calculation.effectiveness);
                    result.calculation = Some(calculation);
                }
            }
        }

        if defender_mon.fainted() {
            result.fainted = true;
            events.push(crate::log_event!("faint", ("mon", defender_mon.name())));
            events.push(crate::log_event!(
                "win",
                ("side", attacker),
                ("mon", attacker_mon.name()),
            ));
            log::info!(
                "{} fainted, {} wins after {} turns",
                defender_mon.name(),
                attacker_mon.name(),
                self.turn
            );
            self.state = BattleState::Finished { winner: attacker };
        } else {
            // Turn ownership flips regardless of the move's category.
            self.state = BattleState::AwaitingMove(defender);
        }

        for event in events {
            self.log.push(event);
        }
        Ok(result)
    }
}

fn damage_calculation_event(calculation: &DamageCalculation) -> Event {
    crate::log_event!(
        "damagecalc",
        ("base", format!("{:.2}", calculation.base)),
        ("type", calculation.type_multiplier),
        ("random", format!("{:.3}", calculation.random_multiplier)),
        ("ratio", format!("{:.3}", calculation.attack_defense_ratio)),
        ("power", format!("{:.2}", calculation.power_factor)),
        ("damage", calculation.damage),
    )
}

#[cfg(test)]
mod battle_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use crate::{
        battle::{
            Battle,
            BattleEngineOptions,
            BattleState,
            RandomizeDamage,
            Side,
            StatChange,
        },
        common::Fraction,
        error::BattleError,
        mons::{
            Combatant,
            ElementalType,
            StatTable,
            StatTarget,
            TypeEffectiveness,
        },
        moves::{
            Move,
            MoveUses,
        },
    };

    fn stats(spe: u32) -> StatTable {
        StatTable {
            hp: 180,
            atk: 50,
            def: 50,
            spe,
        }
    }

    fn moves(typ: ElementalType, mega: &str) -> Vec<Move> {
        vec![
            Move::damage("Own", typ, 50),
            Move::damage("Tackle", ElementalType::Normal, 50),
            Move::stat("Leer", StatTarget::Def, Fraction::new(4, 5)).unwrap(),
            Move::mega(mega, typ, 85, 1).unwrap(),
        ]
    }

    fn options() -> BattleEngineOptions {
        BattleEngineOptions {
            seed: Some(0),
            randomize_damage: RandomizeDamage::Max,
            ..Default::default()
        }
    }

    fn battle(a_speed: u32, b_speed: u32) -> Battle {
        let a = Combatant::new(
            "Squirt",
            ElementalType::Water,
            stats(a_speed),
            moves(ElementalType::Water, "Tidal Crash"),
        )
        .unwrap();
        let b = Combatant::new(
            "Cinder",
            ElementalType::Fire,
            stats(b_speed),
            moves(ElementalType::Fire, "Inferno Burst"),
        )
        .unwrap();
        Battle::new(a, b, options())
    }

    #[test]
    fn faster_combatant_moves_first() {
        assert_eq!(battle(60, 30).state(), BattleState::AwaitingMove(Side::A));
        assert_eq!(battle(30, 60).state(), BattleState::AwaitingMove(Side::B));
    }

    #[test]
    fn speed_tie_favors_side_a() {
        let battle = battle(45, 45);
        assert_eq!(battle.active(), Some(Side::A));
        assert_eq!(battle.active_combatant().map(|mon| mon.name()), Some("Squirt"));
    }

    #[test]
    fn stat_move_then_attack() {
        let mut battle = battle(30, 60);

        let result = battle.execute_turn(2).unwrap();
        assert_eq!(result.attacker, Side::B);
        assert_eq!(result.damage_dealt, 0);
        assert!(!result.fainted);
        assert_eq!(
            result.stat_change,
            Some(StatChange {
                target: StatTarget::Def,
                from: 50,
                to: 40,
            })
        );
        assert_eq!(battle.combatant(Side::A).stats().def, 40);
        assert_eq!(battle.combatant(Side::A).base_stats().def, 50);
        assert_eq!(battle.combatant(Side::A).health(), 180);
        assert_eq!(battle.active(), Some(Side::A));

        // 27 * 50 / 50 = 27
        let result = battle.execute_turn(1).unwrap();
        assert_eq!(result.attacker, Side::A);
        assert_eq!(result.damage_dealt, 27);
        assert_eq!(result.defender_remaining_health, 153);
        assert_eq!(result.effectiveness, Some(TypeEffectiveness::Normal));
        assert_eq!(battle.active(), Some(Side::B));
        assert_eq!(battle.turn(), 2);
    }

    #[test]
    fn second_mega_use_is_rejected_without_changes() {
        let mut battle = battle(60, 30);
        let result = battle.execute_turn(3).unwrap();
        // 27 * 1.5 * 1.7 = 68.85
        assert_eq!(result.damage_dealt, 68);
        assert_eq!(result.effectiveness, Some(TypeEffectiveness::Strong));
        battle.execute_turn(1).unwrap();

        let health = battle.combatant(Side::B).health();
        assert_eq!(
            battle.execute_turn(3),
            Err(BattleError::MoveDepleted {
                name: "Tidal Crash".to_owned(),
            })
        );
        assert_eq!(battle.active(), Some(Side::A));
        assert_eq!(battle.turn(), 2);
        assert_eq!(battle.combatant(Side::B).health(), health);
        assert_eq!(
            battle.combatant(Side::A).moves()[3].uses(),
            MoveUses::Limited {
                limit: 1,
                remaining: 0,
            }
        );
    }

    #[test]
    fn rejects_invalid_slot() {
        let mut battle = battle(60, 30);
        assert_matches!(
            battle.execute_turn(4),
            Err(BattleError::InvalidMoveSelection {
                slot: 4,
                available: 4,
            })
        );
        assert_eq!(battle.turn(), 0);
        assert_eq!(battle.active(), Some(Side::A));
    }

    #[test]
    fn turn_ownership_alternates() {
        let mut battle = battle(60, 30);
        let mut expected = Side::A;
        for _ in 0..5 {
            assert_eq!(battle.active(), Some(expected));
            let result = battle.execute_turn(0).unwrap();
            assert_eq!(result.attacker, expected);
            assert_eq!(result.defender, expected.other());
            expected = expected.other();
        }
    }

    #[test]
    fn finishes_within_bounded_turns() {
        let mut battle = battle(60, 30);
        let mut turns = 0;
        while !battle.ended() {
            battle.execute_turn(1).unwrap();
            turns += 1;
            assert!(turns <= 20);
        }
        assert_eq!(battle.winner(), Some(Side::A));
        assert_eq!(battle.combatant(Side::B).health(), 0);
        assert_eq!(battle.execute_turn(0), Err(BattleError::BattleFinished));
        assert_eq!(battle.active_combatant(), None);
    }

    #[test]
    fn logs_turn_events() {
        let mut battle = battle(60, 30);
        assert_eq!(
            battle.new_log_entries().collect::<Vec<_>>(),
            vec![
                "mon|side:a|name:Squirt|type:water|health:180",
                "mon|side:b|name:Cinder|type:fire|health:180",
                "battlestart|first:a",
            ]
        );
        battle.execute_turn(3).unwrap();
        battle.execute_turn(2).unwrap();
        assert_eq!(
            battle.new_log_entries().collect::<Vec<_>>(),
            vec![
                "turn|turn:1",
                "move|mon:Squirt|name:Tidal Crash|target:Cinder",
                "supereffective|mon:Cinder",
                "damage|mon:Cinder|health:112/180",
                "turn|turn:2",
                "move|mon:Cinder|name:Leer|target:Squirt",
                "unboost|mon:Squirt|stat:def|from:50|to:40",
            ]
        );
        assert!(!battle.has_new_logs());
    }
}
