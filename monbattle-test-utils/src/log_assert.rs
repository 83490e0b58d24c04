use monbattle::Battle;

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.new_log_entries().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts that logs since the start of the battle are equal to the given logs.
#[track_caller]
pub fn assert_logs_since_start_eq(battle: &Battle, want: &[&str]) {
    let got = battle.full_log().collect::<Vec<&str>>();
    let start_log_index = got
        .iter()
        .position(|log| log.starts_with("battlestart"))
        .map(|index| index + 1)
        .unwrap_or(got.len());
    pretty_assertions::assert_eq!(&got[start_log_index..], want)
}
