use crate::types::Team;

use super::RuleViolation;

/// Approved players per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Roster {
    pub a: i64,
    pub b: i64,
}

impl Roster {
    pub fn total(&self) -> i64 {
        self.a + self.b
    }

    pub fn count(&self, team: Team) -> i64 {
        match team {
            Team::A => self.a,
            Team::B => self.b,
        }
    }

    /// Per-side capacity; odd totals give each side the larger half
    pub fn side_capacity(max_players: i32) -> i64 {
        (i64::from(max_players) + 1) / 2
    }

    /// Pick a side for a newly approved player.
    ///
    /// An explicit request must fit on that side or the approval fails with
    /// `TeamFull`. Without one the smaller side is chosen, A on ties.
    pub fn assign(&self, requested: Option<Team>, max_players: i32) -> Result<Team, RuleViolation> {
        if self.total() >= i64::from(max_players) {
            return Err(RuleViolation::MatchFull);
        }

        let capacity = Self::side_capacity(max_players);
        let team = requested.unwrap_or(if self.b < self.a { Team::B } else { Team::A });

        if self.count(team) >= capacity {
            return Err(RuleViolation::TeamFull(team));
        }
        Ok(team)
    }

    /// Validate moving an approved player from `current` to `target`
    pub fn switch(&self, current: Option<Team>, target: Team, max_players: i32) -> Result<(), RuleViolation> {
        if current == Some(target) {
            return Ok(());
        }
        if self.count(target) >= Self::side_capacity(max_players) {
            return Err(RuleViolation::TeamFull(target));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_smaller_side_with_a_on_ties() {
        assert_eq!(Roster { a: 0, b: 0 }.assign(None, 10), Ok(Team::A));
        assert_eq!(Roster { a: 1, b: 0 }.assign(None, 10), Ok(Team::B));
        assert_eq!(Roster { a: 1, b: 2 }.assign(None, 10), Ok(Team::A));
    }

    #[test]
    fn honours_requested_side_until_it_is_full() {
        assert_eq!(Roster { a: 3, b: 0 }.assign(Some(Team::A), 10), Ok(Team::A));
        assert_eq!(
            Roster { a: 5, b: 0 }.assign(Some(Team::A), 10),
            Err(RuleViolation::TeamFull(Team::A))
        );
    }

    #[test]
    fn full_match_rejects_everyone() {
        assert_eq!(Roster { a: 2, b: 2 }.assign(None, 4), Err(RuleViolation::MatchFull));
        assert_eq!(Roster { a: 2, b: 2 }.assign(Some(Team::B), 4), Err(RuleViolation::MatchFull));
    }

    #[test]
    fn odd_capacity_rounds_up_per_side() {
        assert_eq!(Roster::side_capacity(5), 3);
        assert_eq!(Roster { a: 3, b: 1 }.assign(None, 5), Ok(Team::B));
    }

    #[test]
    fn switching_checks_target_side() {
        let roster = Roster { a: 2, b: 1 };
        assert_eq!(roster.switch(Some(Team::A), Team::A, 4), Ok(()));
        assert_eq!(roster.switch(Some(Team::B), Team::A, 4), Err(RuleViolation::TeamFull(Team::A)));
        assert_eq!(roster.switch(Some(Team::A), Team::B, 4), Ok(()));
    }
}
