#[cfg(test)]
mod classic_catalog_test {
    use assert_matches::assert_matches;
    use monbattle::{
        BattleError,
        ElementalType,
        MoveCatalog,
        MoveCategory,
    };
    use monbattle_test_utils::TestBattleBuilder;

    #[test]
    fn combatants_only_receive_damage_moves() {
        let mut battle = TestBattleBuilder::new()
            .with_seed(55)
            .with_move_catalog(MoveCatalog::classic())
            .with_generated_combatant("Cinder", ElementalType::Fire)
            .with_generated_combatant("Sprout", ElementalType::Grass)
            .build()
            .unwrap();
        for mon in battle.combatants() {
            assert_eq!(mon.moves().len(), 2);
            assert_eq!(mon.moves()[0].typ(), mon.typ());
            assert_eq!(mon.moves()[1].typ(), ElementalType::Normal);
            assert!(
                mon.moves()
                    .iter()
                    .all(|mov| mov.category() == MoveCategory::Damage)
            );
        }

        assert_matches!(
            battle.execute_turn(2),
            Err(BattleError::InvalidMoveSelection {
                slot: 2,
                available: 2,
            })
        );
        assert_eq!(battle.turn(), 0);
    }

    #[test]
    fn classic_battle_finishes() {
        for seed in 0..20 {
            let mut battle = TestBattleBuilder::new()
                .with_seed(seed)
                .with_move_catalog(MoveCatalog::classic())
                .with_generated_combatant("Squirt", ElementalType::Water)
                .with_generated_combatant("Cinder", ElementalType::Fire)
                .build()
                .unwrap();
            while !battle.ended() {
                battle.execute_turn(battle.turn() as usize % 2).unwrap();
                assert!(battle.turn() <= 100);
            }
            let winner = battle.winner().unwrap();
            assert!(battle.combatant(winner).health() > 0);
            assert_eq!(battle.combatant(winner.other()).health(), 0);
        }
    }
}
