#[cfg(test)]
mod shell_test {
    use monbattle::{
        BattleEngineOptions,
        MoveCatalog,
    };
    use monbattle_sim::Shell;

    fn options(seed: u64) -> BattleEngineOptions {
        BattleEngineOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn script(lines: &[&str], attacks: usize) -> String {
        let mut input = lines.join("\n");
        input.push('\n');
        input.push_str(&"1\n".repeat(attacks));
        input
    }

    fn run(input: &str, options: BattleEngineOptions, show_calculation: bool) -> String {
        let mut output = Vec::new();
        Shell::new(input.as_bytes(), &mut output)
            .with_show_calculation(show_calculation)
            .run(options)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plays_full_battle_and_reprompts_on_invalid_input() {
        let input = script(
            &[
                "",
                "Squirt",
                "7",
                "water",
                "Cinder",
                "2",
                "0",
                "9",
                "4",
                "4",
                "4",
            ],
            200,
        );
        let output = run(&input, options(7), false);

        assert!(output.starts_with("Welcome to Mon Battle Simulator!"));
        assert!(output.contains("Choose type: 1. Water 2. Fire 3. Grass"));
        assert!(output.contains(
            "combatant name cannot be empty\nEnter name for Player 1's mon: Choose type:"
        ));
        assert_eq!(output.matches("Choose type:").count(), 2);
        assert!(output.contains("invalid type selection: 7"));
        assert!(output.contains("Squirt's Stats: Type: water"));
        assert!(output.contains("Cinder's Stats: Type: fire"));
        assert!(output.contains("Uses: unlimited"));
        assert!(output.contains("Uses: 1/1"));
        assert!(output.contains("invalid choice: 0"));
        assert!(output.contains("invalid move selection: slot 8 (combatant has 4 moves)"));
        assert!(output.contains("It's super effective!"));
        assert!(output.contains("It's not very effective..."));
        assert!(
            output.contains("Tidal Crash has no uses remaining")
                || output.contains("Inferno Burst has no uses remaining")
        );
        assert!(output.contains("Uses: 0/1"));
        assert!(output.contains("fainted!"));
        assert!(output.trim_end().ends_with("wins the battle!"));
        assert!(!output.contains("Damage Calculation:"));
    }

    #[test]
    fn shows_damage_calculation() {
        let input = script(&["Sprout", "3", "Squirt", "1"], 200);
        let output = run(&input, options(11), true);
        assert!(output.contains("Damage Calculation:"));
        assert!(output.contains("Base Damage: "));
        assert!(output.contains("Random Factor: "));
        assert!(output.contains("Move Power Factor: "));
        assert!(output.contains("wins the battle!"));
    }

    #[test]
    fn classic_catalog_offers_two_moves() {
        let input = script(&["Sprout", "grass", "Cinder", "fire"], 200);
        let output = run(
            &input,
            BattleEngineOptions {
                move_catalog: MoveCatalog::classic(),
                ..options(3)
            },
            false,
        );
        assert!(output.contains("Choose move (1-2): "));
        assert!(!output.contains("Choose move (1-4): "));
        assert!(output.contains("wins the battle!"));
    }

    #[test]
    fn stat_moves_are_narrated() {
        let input = script(&["Sprout", "3", "Squirt", "1", "3", "3"], 200);
        let output = run(&input, options(5), false);
        assert!(output.contains(" fell from "));
    }

    #[test]
    fn fails_when_input_closes() {
        let mut output = Vec::new();
        let result = Shell::new("Squirt\n1\n".as_bytes(), &mut output).run(options(1));
        assert!(result.is_err_and(|err| err.to_string().contains("input closed")));
    }
}
