//! Dice-based combat resolution.
//!
//! Two models coexist: neutral garrisons are worn down one attacker roll
//! at a time, while battles between the two players compare a single
//! aggregate roll per side. Every die that hits the table is an
//! observable log event.

use crate::board::GameLog;
use crate::dice::Dice;

/// A roll of this value or higher fells one neutral defender.
const NEUTRAL_HIT: u8 = 3;

/// The outcome of one resolved combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatReport {
    /// Whether the attacker took the territory.
    pub success: bool,
    /// Attackers left standing. The aggregate model can report zero or a
    /// negative count when the defenders outnumber the attackers; callers
    /// clamp at zero when garrisoning the conquest.
    pub surviving_attackers: i32,
    /// Attackers removed from the source garrison.
    pub units_lost: u32,
}

/// Resolves an assault on a neutral garrison, one attacker at a time.
///
/// Each attacker rolls one die: 3 or higher fells a defender, lower kills
/// the attacker. Combat ends the moment the garrison is spent. Loss
/// accounting is asymmetric: on success every attacker that rolled before
/// the finishing blow counts as lost, while on failure only the attackers
/// whose own roll missed do.
pub fn resolve_neutral_assault(
    attacking: u32,
    defending: u32,
    dice: &mut impl Dice,
    log: &mut GameLog,
) -> CombatReport {
    let mut defeated = 0u32;
    let mut fallen = 0u32;

    for i in 0..attacking {
        let roll = dice.roll();
        if roll >= NEUTRAL_HIT {
            defeated += 1;
            log.push(format!("Attacker {} rolls a {}: a defender falls", i + 1, roll));
        } else {
            fallen += 1;
            log.push(format!("Attacker {} rolls a {} and is cut down", i + 1, roll));
        }
        if defeated >= defending {
            return CombatReport {
                success: true,
                surviving_attackers: (attacking - i) as i32,
                units_lost: i,
            };
        }
    }

    CombatReport {
        success: false,
        surviving_attackers: 0,
        units_lost: fallen,
    }
}

/// Resolves a pitched battle between the two players as one aggregate roll
/// per side: the sum of one die per attacking unit against the sum of one
/// die per defending unit. Ties defend.
///
/// A win destroys every defender and assumes attacker losses equal to the
/// defender count, so the surviving count goes non-positive whenever the
/// defenders outnumbered the attackers.
pub fn resolve_pitched_battle(
    attacking: u32,
    defending: u32,
    dice: &mut impl Dice,
    log: &mut GameLog,
) -> CombatReport {
    let attack_roll: u32 = (0..attacking).map(|_| u32::from(dice.roll())).sum();
    let defense_roll: u32 = (0..defending).map(|_| u32::from(dice.roll())).sum();
    log.push(format!(
        "Battle is joined: {} against {}",
        attack_roll, defense_roll
    ));

    if attack_roll > defense_roll {
        CombatReport {
            success: true,
            surviving_attackers: attacking as i32 - defending as i32,
            units_lost: defending,
        }
    } else {
        CombatReport {
            success: false,
            surviving_attackers: 0,
            units_lost: attacking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn assault(attacking: u32, defending: u32, rolls: &[u8]) -> (CombatReport, GameLog) {
        let mut dice = ScriptedDice::new(rolls);
        let mut log = GameLog::default();
        let report = resolve_neutral_assault(attacking, defending, &mut dice, &mut log);
        (report, log)
    }

    fn battle(attacking: u32, defending: u32, rolls: &[u8]) -> CombatReport {
        let mut dice = ScriptedDice::new(rolls);
        let mut log = GameLog::default();
        resolve_pitched_battle(attacking, defending, &mut dice, &mut log)
    }

    #[test]
    fn assault_ends_the_moment_the_garrison_is_spent() {
        // Five attackers, two defenders: rolls 4 and 5 finish the fight
        // before the third attacker ever rolls.
        let (report, log) = assault(5, 2, &[4, 5, 1]);
        assert!(report.success);
        assert_eq!(report.surviving_attackers, 4);
        assert_eq!(report.units_lost, 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn assault_with_every_roll_low_loses_everyone() {
        let (report, log) = assault(4, 2, &[1, 2, 2, 1]);
        assert!(!report.success);
        assert_eq!(report.surviving_attackers, 0);
        assert_eq!(report.units_lost, 4);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn failed_assault_counts_only_missed_rolls_as_losses() {
        // Two hits out of three are not enough against five defenders, and
        // the two attackers who hit are not tallied as lost.
        let (report, _) = assault(3, 5, &[4, 2, 5]);
        assert!(!report.success);
        assert_eq!(report.surviving_attackers, 0);
        assert_eq!(report.units_lost, 1);
    }

    #[test]
    fn assault_with_every_roll_high_never_loses_more_than_it_sent() {
        for attacking in 1..=6u32 {
            for defending in 1..=attacking {
                let rolls = vec![6u8; attacking as usize];
                let (report, _) = assault(attacking, defending, &rolls);
                assert!(report.success);
                assert!(
                    report.surviving_attackers as u32 + report.units_lost <= attacking,
                    "{} vs {} leaked units",
                    attacking,
                    defending
                );
            }
        }
    }

    #[test]
    fn assault_won_on_the_first_roll_loses_no_one() {
        let (report, _) = assault(3, 1, &[6]);
        assert!(report.success);
        assert_eq!(report.surviving_attackers, 3);
        assert_eq!(report.units_lost, 0);
    }

    #[test]
    fn assault_logs_every_roll() {
        let (_, log) = assault(3, 5, &[4, 2, 5]);
        assert_eq!(
            log.entries(),
            &[
                "Attacker 1 rolls a 4: a defender falls",
                "Attacker 2 rolls a 2 and is cut down",
                "Attacker 3 rolls a 5: a defender falls",
            ]
        );
    }

    #[test]
    fn battle_is_decided_by_the_sums() {
        // 3 vs 3: attack 10 against defense 12.
        let report = battle(3, 3, &[4, 2, 4, 5, 3, 4]);
        assert!(!report.success);
        assert_eq!(report.units_lost, 3);
        assert_eq!(report.surviving_attackers, 0);
    }

    #[test]
    fn battle_tie_goes_to_the_defender() {
        let report = battle(2, 2, &[3, 4, 3, 4]);
        assert!(!report.success);
        assert_eq!(report.units_lost, 2);
    }

    #[test]
    fn battle_win_assumes_losses_equal_to_the_defenders() {
        let report = battle(4, 2, &[6, 6, 5, 5, 1, 2]);
        assert!(report.success);
        assert_eq!(report.surviving_attackers, 2);
        assert_eq!(report.units_lost, 2);
    }

    #[test]
    fn battle_win_against_superior_numbers_reports_negative_survivors() {
        // 2 vs 3: attack 12 beats defense 5; survivors go negative.
        let report = battle(2, 3, &[6, 6, 1, 2, 2]);
        assert!(report.success);
        assert_eq!(report.surviving_attackers, -1);
        assert_eq!(report.units_lost, 3);
    }

    #[test]
    fn battle_against_an_empty_garrison_always_wins() {
        let report = battle(2, 0, &[1, 1]);
        assert!(report.success);
        assert_eq!(report.surviving_attackers, 2);
        assert_eq!(report.units_lost, 0);
    }

    #[test]
    fn battle_is_deterministic_under_fixed_dice() {
        let a = battle(3, 3, &[4, 2, 4, 5, 3, 4]);
        let b = battle(3, 3, &[4, 2, 4, 5, 3, 4]);
        assert_eq!(a, b);
    }
}
