//! ASCII map of the colony with a "you are here" marker.

const LAYOUT: &[&str] = &[
    "                                    +----------------------+",
    "                                    | Residential District |",
    "                                    +----------+-----------+",
    "                                               |",
    "+------------------------+     +---------------+------+     +-----------------+",
    "| Memorial Pond          |-----|  Central Plaza      |-----| Colony Market   |",
    "+------------------------+     +-------+--------------+     +-----------------+",
    "                                       |",
    "                   +-------------------+-------------------+",
    "                   |                                       |",
    "         +---------+------------+                +---------+------------+",
    "         | Communications Tower |                | Sec. Checkpoint(Res) |",
    "         +----------------------+                +----------------------+",
    "                                                         |",
    "                                               +---------+------------+",
    "                                               | Sec. Checkpoint(Ind) |",
    "                                               +----------------------+",
    "                                                         |",
    "+------------------------+     +-------------------------+      +-----------------+",
    "| Deposit Station        |-----|    Industrial Plaza     |------| Refinery        |",
    "+------------------------+     +-------------------------+      +-----------------+",
    "                                             |",
    "                                    +--------+---------+",
    "                                    |  Mine Entrance  |",
    "                                    +-----------------+",
];

/// Where a marker goes: below layout line `row`, starting at `column`,
/// centered over `width` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    row: usize,
    column: usize,
    width: usize,
}

const fn marker(row: usize, column: usize, width: usize) -> Marker {
    Marker { row, column, width }
}

fn marker_for(location: &str) -> Option<Marker> {
    Some(match location {
        "Your Quarters" | "Residential Corridor" | "Residential Entrance" => marker(2, 36, 24),
        "Central Plaza" => marker(6, 31, 23),
        "Colony Market" => marker(6, 60, 19),
        "Memorial Pond" => marker(6, 0, 26),
        "Communications Tower Entrance" => marker(12, 9, 24),
        "Security Checkpoint (Residential)" | "Residential Checkpoint Gate" => {
            marker(12, 49, 24)
        }
        "Security Checkpoint (Industrial)" | "Industrial Checkpoint Gate" => marker(16, 47, 24),
        "Industrial Plaza" => marker(20, 31, 27),
        "Refinery" => marker(20, 65, 19),
        "Deposit Station" => marker(20, 0, 26),
        "Mine Entrance" => marker(24, 36, 19),
        _ => return None,
    })
}

/// Map lines with `indicator` placed under `location`, or `None` for a
/// place the map does not show.
pub fn render(location: &str, indicator: &str) -> Option<Vec<String>> {
    let Marker { row, column, width } = marker_for(location)?;
    let mut lines: Vec<String> = LAYOUT.iter().map(|line| (*line).to_string()).collect();
    let marker_line = format!("{}{indicator:^width$}", " ".repeat(column));
    lines.insert(row + 1, marker_line);
    Some(lines)
}

/// The map without a marker.
pub fn plain() -> Vec<String> {
    LAYOUT.iter().map(|line| (*line).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_sits_under_the_location() {
        let lines = render("Central Plaza", ">>> YOU ARE HERE <<<").unwrap();
        assert_eq!(lines.len(), LAYOUT.len() + 1);
        assert!(lines[7].contains(">>> YOU ARE HERE <<<"));
        assert!(lines[5].contains("Central Plaza"));
    }

    #[test]
    fn airlocks_share_their_checkpoint_marker() {
        assert_eq!(
            marker_for("Residential Checkpoint Gate"),
            marker_for("Security Checkpoint (Residential)")
        );
    }

    #[test]
    fn every_colony_location_is_on_the_map() {
        let (world, _) =
            colony_fiction::build_colony(&colony_core::Catalog::standard(), 50).unwrap();
        for name in world.names() {
            assert!(render(name, "x").is_some(), "{name} missing from the map");
        }
    }

    #[test]
    fn unknown_place_has_no_marker() {
        assert!(render("Mars", "x").is_none());
        assert_eq!(plain().len(), LAYOUT.len());
    }
}
