use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{simulate_match, NullDisplay};

#[test]
fn test_sim_totals_add_up() {
    let mut rng = SmallRng::seed_from_u64(7);
    let report = simulate_match(&mut rng, 200, NullDisplay).unwrap();
    assert_eq!(report.rounds, 200);
    assert_eq!(
        report.summary.x_wins + report.summary.o_wins + report.ties,
        200
    );
    // with 200 random rounds both sides win at least once
    assert!(report.summary.x_wins > 0);
    assert!(report.summary.o_wins > 0);
    assert!(report.summary.most_recent_winner.is_some());
}

#[test]
fn test_sim_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let r1 = simulate_match(&mut rng1, 50, NullDisplay).unwrap();
    let r2 = simulate_match(&mut rng2, 50, NullDisplay).unwrap();
    assert_eq!(r1, r2);
}

#[test]
fn test_sim_zero_rounds() {
    let mut rng = SmallRng::seed_from_u64(1);
    let report = simulate_match(&mut rng, 0, NullDisplay).unwrap();
    assert_eq!(report.rounds, 0);
    assert_eq!(report.ties, 0);
    assert_eq!(report.summary.x_wins, 0);
    assert_eq!(report.summary.most_recent_winner, None);
}

#[cfg(feature = "std")]
#[test]
fn test_sim_report_json() {
    let mut rng = SmallRng::seed_from_u64(3);
    let report = simulate_match(&mut rng, 10, NullDisplay).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["rounds"], 10);
    assert!(json["summary"]["x_wins"].is_u64());
}
