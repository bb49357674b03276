use teleporter_cli::{coins, vault};
use teleporter_models::{coins::Coin, vault::Direction};

use Coin::{Blue, Concave, Corroded, Red, Shiny};

#[test]
fn coins_report_the_balancing_order() {
    let mut out = Vec::new();

    let order = coins::run(&mut out).expect("should complete");

    assert_eq!(order, Some(vec![Blue, Red, Shiny, Concave, Corroded]));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Correct order: blue, red, shiny, concave, corroded\n(9 + 2*5^2 + 7^3 - 3 = 399)\n"
    );
}

#[test]
fn vault_reports_the_shortest_walk() {
    let mut out = Vec::new();

    let path = vault::run(&mut out).expect("should complete");

    assert_eq!(path.as_ref().map(Vec::len), Some(12));
    assert!(matches!(
        path.as_deref(),
        Some([Direction::North, .., Direction::East])
    ));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Path: north, east, east, north, west, south, east, east, west, north, north, east\n\
         Expression: 22 + 4 - 11 * 4 - 18 - 11 - 1 = 30\n"
    );
}
