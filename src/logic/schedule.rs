//! Round-robin fixture generation (Berger circle method).

use crate::models::{GameMatch, Team, TournamentError};
use log::debug;

/// Fewest teams a round-robin can be drawn for.
pub const MIN_TEAMS: usize = 2;

/// A position on the circle: a real team, or the bye that pads an odd field.
#[derive(Clone, Copy, Debug)]
enum Slot<'a> {
    Team(&'a Team),
    Bye,
}

/// Generate the full calendar for `teams` in the given draw order.
///
/// 1. Pad an odd field with a bye slot; `n` is the padded count.
/// 2. Play `n - 1` rounds of `n / 2` pairings: position `i` meets position `n - 1 - i`.
///    A pairing with the bye produces no match.
/// 3. Position 0 is fixed; the remaining positions rotate one step per round.
/// 4. Home side alternates with round parity so home games even out.
/// 5. With `double_round`, every first-leg match gets a mirrored return match in round
///    `first_leg_rounds + k`, where `k` is the first-leg round.
///
/// Matches start 0-0, `Scheduled`, with each side holding its team's full roster and no
/// tournament id. Duplicate teams are not filtered.
pub fn generate_schedule(
    teams: &[Team],
    double_round: bool,
) -> Result<Vec<GameMatch>, TournamentError> {
    if teams.len() < MIN_TEAMS {
        return Err(TournamentError::NotEnoughTeams {
            required: MIN_TEAMS,
            found: teams.len(),
        });
    }

    let mut slots: Vec<Slot> = teams.iter().map(Slot::Team).collect();
    if slots.len() % 2 == 1 {
        slots.push(Slot::Bye);
    }
    let n = slots.len();
    let rounds = n - 1;
    let per_round = n / 2;

    let mut first_leg = Vec::with_capacity(rounds * per_round);
    for r in 0..rounds {
        for i in 0..per_round {
            let pairing = (slots[rotated_slot(i, r, n)], slots[rotated_slot(n - 1 - i, r, n)]);
            let (Slot::Team(a), Slot::Team(b)) = pairing else {
                continue;
            };
            let (home, away) = if r % 2 == 0 { (a, b) } else { (b, a) };
            first_leg.push(GameMatch::scheduled(None, r as u32 + 1, home, away));
        }
    }

    let matches = if double_round {
        let first_leg_rounds = rounds as u32;
        let second_leg: Vec<GameMatch> = first_leg
            .iter()
            .map(|m| m.mirrored(first_leg_rounds + m.round))
            .collect();
        let mut all = first_leg;
        all.extend(second_leg);
        all
    } else {
        first_leg
    };

    debug!(
        "Generated {} matches over {} rounds for {} teams (double round: {})",
        matches.len(),
        if double_round { rounds * 2 } else { rounds },
        teams.len(),
        double_round
    );
    Ok(matches)
}

/// Index into the initial slot list of the entry sitting at `position` after `round` rotations.
///
/// Position 0 never moves. Each rotation moves the last position into position 1 and shifts
/// the rest of the tail up by one, so the tail of `n - 1` entries turns like a ring.
fn rotated_slot(position: usize, round: usize, n: usize) -> usize {
    if position == 0 {
        return 0;
    }
    let tail = n - 1;
    1 + (position - 1 + tail - round % tail) % tail
}

#[cfg(test)]
mod tests {
    use super::rotated_slot;

    /// Rotate like a list would: remove the last entry and insert it at index 1.
    fn rotate_list(list: &mut Vec<usize>) {
        if let Some(last) = list.pop() {
            list.insert(1, last);
        }
    }

    #[test]
    fn index_rotation_matches_list_rotation() {
        for n in [2usize, 4, 6, 8] {
            let mut list: Vec<usize> = (0..n).collect();
            for round in 0..(n - 1) {
                let by_index: Vec<usize> = (0..n).map(|p| rotated_slot(p, round, n)).collect();
                assert_eq!(by_index, list, "n = {n}, round = {round}");
                rotate_list(&mut list);
            }
        }
    }

    #[test]
    fn anchor_never_moves() {
        assert!((0..5).all(|r| rotated_slot(0, r, 6) == 0));
    }
}
