//! Speed estimation and remote-work scoring.
//!
//! The scoring tables are piecewise step functions with hard cliffs: 499
//! and 500 Mbps estimated speed differ by 5 points. The thresholds are
//! calibrated strictly (full speed credit needs 500 Mbps and up) and must
//! not be smoothed into a continuous curve.

/// Representative weight for the gigabit tier, capped below the nominal
/// 1000 Mbps so universal gigabit coverage reads as 500.
const GIGABIT_WEIGHT: f64 = 500.0;

/// Household-weighted "typical ceiling" speed for a county, in Mbps,
/// rounded to the nearest multiple of 5.
///
/// Each input is the fraction of households with access to *at least*
/// that tier, so the share stuck at a tier is the difference from the
/// next tier up. Households with no 10/1 service weigh in at 5 Mbps.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn max_available_speed(s10: f64, s25: f64, s100: f64, s250: f64, s1000: f64) -> u32 {
    let tier10 = (s10 - s25).max(0.0);
    let tier25 = (s25 - s100).max(0.0);
    let tier100 = (s100 - s250).max(0.0);
    let tier250 = (s250 - s1000).max(0.0);
    let no_service = (1.0 - s10).max(0.0);

    let weighted = no_service * 5.0
        + tier10 * 10.0
        + tier25 * 25.0
        + tier100 * 100.0
        + tier250 * 250.0
        + s1000 * GIGABIT_WEIGHT;

    // Round to the nearest 5 Mbps for cleaner display values.
    ((weighted / 5.0).round() * 5.0) as u32
}

/// Realistic subscription estimate: 65% of the maximum available speed,
/// rounded. Most households do not purchase the top tier.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn estimated_speed(max_available: u32) -> u32 {
    (f64::from(max_available) * 0.65).round() as u32
}

/// Composite remote-work score in 0-100.
///
/// Speed contributes up to 50 points, cost of living up to 30 (lower is
/// better), and rural designation up to 20; non-rural counties get a
/// reduced 5-point baseline. The total is capped at 100.
#[must_use]
pub fn remote_work_score(estimated_speed: u32, cost_of_living_index: u32, rural: bool) -> u32 {
    let mut score = 0;

    if estimated_speed >= 500 {
        score += 50;
    } else if estimated_speed >= 300 {
        score += 45;
    } else if estimated_speed >= 200 {
        score += 40;
    } else if estimated_speed >= 100 {
        score += 30;
    } else if estimated_speed >= 50 {
        score += 20;
    } else if estimated_speed >= 25 {
        score += 10;
    }

    if cost_of_living_index <= 82 {
        score += 30;
    } else if cost_of_living_index <= 90 {
        score += 25;
    } else if cost_of_living_index <= 98 {
        score += 20;
    } else if cost_of_living_index <= 110 {
        score += 10;
    } else {
        score += 5;
    }

    if rural {
        score += 20;
    } else {
        score += 5;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_tiers_worked_example() {
        // tier10 = 0.2*10, tier25 = 0.5*25, tier100 = 0.25*100,
        // tier250 = 0.05*250, tier1000 = 0 -> weighted = 52 -> 50
        assert_eq!(max_available_speed(1.0, 0.8, 0.3, 0.05, 0.0), 50);
        assert_eq!(estimated_speed(50), 33);
    }

    #[test]
    fn max_speed_is_multiple_of_five() {
        let tuples = [
            (1.0, 1.0, 1.0, 1.0, 1.0),
            (1.0, 0.9, 0.7, 0.4, 0.1),
            (0.6, 0.5, 0.2, 0.0, 0.0),
            (0.0, 0.0, 0.0, 0.0, 0.0),
            (1.0, 0.8, 0.3, 0.05, 0.0),
            (0.97, 0.93, 0.81, 0.33, 0.02),
        ];
        for (s10, s25, s100, s250, s1000) in tuples {
            let speed = max_available_speed(s10, s25, s100, s250, s1000);
            assert_eq!(speed % 5, 0, "{speed} not a multiple of 5");
        }
    }

    #[test]
    fn universal_gigabit_reads_as_five_hundred() {
        assert_eq!(max_available_speed(1.0, 1.0, 1.0, 1.0, 1.0), 500);
    }

    #[test]
    fn no_service_floor() {
        assert_eq!(max_available_speed(0.0, 0.0, 0.0, 0.0, 0.0), 5);
    }

    #[test]
    fn estimated_speed_rounds() {
        assert_eq!(estimated_speed(100), 65);
        assert_eq!(estimated_speed(50), 33);
        assert_eq!(estimated_speed(0), 0);
        assert_eq!(estimated_speed(500), 325);
    }

    #[test]
    fn speed_points_boundaries() {
        let at = |speed| remote_work_score(speed, 200, false);
        // COL > 110 contributes 5, non-rural contributes 5.
        assert_eq!(at(500), 50 + 5 + 5);
        assert_eq!(at(499), 45 + 5 + 5);
        assert_eq!(at(300), 45 + 5 + 5);
        assert_eq!(at(299), 40 + 5 + 5);
        assert_eq!(at(200), 40 + 5 + 5);
        assert_eq!(at(199), 30 + 5 + 5);
        assert_eq!(at(100), 30 + 5 + 5);
        assert_eq!(at(99), 20 + 5 + 5);
        assert_eq!(at(50), 20 + 5 + 5);
        assert_eq!(at(49), 10 + 5 + 5);
        assert_eq!(at(25), 10 + 5 + 5);
        assert_eq!(at(24), 5 + 5);
    }

    #[test]
    fn cost_of_living_points_boundaries() {
        let at = |col| remote_work_score(0, col, false);
        assert_eq!(at(82), 30 + 5);
        assert_eq!(at(83), 25 + 5);
        assert_eq!(at(90), 25 + 5);
        assert_eq!(at(91), 20 + 5);
        assert_eq!(at(98), 20 + 5);
        assert_eq!(at(99), 10 + 5);
        assert_eq!(at(110), 10 + 5);
        assert_eq!(at(111), 5 + 5);
    }

    #[test]
    fn rural_bonus() {
        assert_eq!(remote_work_score(0, 200, true), 5 + 20);
        assert_eq!(remote_work_score(0, 200, false), 5 + 5);
    }

    #[test]
    fn perfect_county_caps_at_one_hundred() {
        // Rural, COL 80, 550 Mbps estimated: 50 + 30 + 20 = 100.
        assert_eq!(remote_work_score(550, 80, true), 100);
    }

    #[test]
    fn score_stays_in_range() {
        for speed in [0, 24, 25, 49, 50, 99, 100, 199, 200, 299, 300, 499, 500, 2000] {
            for col in [0, 82, 83, 90, 98, 110, 111, 250] {
                for rural in [false, true] {
                    let score = remote_work_score(speed, col, rural);
                    assert!(score <= 100, "score {score} out of range");
                }
            }
        }
    }
}
