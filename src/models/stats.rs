use serde::Serialize;

/// Rounds to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / total` as a percentage, 0 when there is nothing to divide by.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinLossDraw {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl WinLossDraw {
    pub fn total(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.draws)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: u64,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl From<WinLossDraw> for PerformanceRecord {
    fn from(value: WinLossDraw) -> Self {
        let games = value.total();
        Self {
            wins: value.wins,
            losses: value.losses,
            draws: value.draws,
            games,
            win_rate: percentage(value.wins.into(), games),
            draw_rate: percentage(value.draws.into(), games),
            loss_rate: percentage(value.losses.into(), games),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TimeControlPerformance {
    pub bullet: PerformanceRecord,
    pub rapid: PerformanceRecord,
    pub blitz: PerformanceRecord,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningStat {
    pub name: String,
    pub games: u32,
    pub win_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_record(record: &WinLossDraw) -> Self {
        if record.wins > record.losses {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// `+n` when wins lead, `-n` otherwise (an even record renders as `-0`).
pub fn performance_label(record: &WinLossDraw) -> String {
    if record.wins > record.losses {
        format!("+{}", record.wins - record.losses)
    } else {
        format!("-{}", record.losses - record.wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_zero_rates() {
        let record: PerformanceRecord = WinLossDraw::default().into();
        assert_eq!(record.games, 0);
        assert_eq!(record.win_rate, 0.0);
        assert_eq!(record.draw_rate, 0.0);
        assert_eq!(record.loss_rate, 0.0);
    }

    #[test]
    fn rates_are_rounded_percentages() {
        let record: PerformanceRecord = WinLossDraw {
            wins: 1,
            losses: 1,
            draws: 1,
        }
        .into();
        assert_eq!(record.games, 3);
        assert_eq!(record.win_rate, 33.33);
        assert_eq!(record.draw_rate, 33.33);
        assert_eq!(record.loss_rate, 33.33);

        let record: PerformanceRecord = WinLossDraw {
            wins: 2,
            losses: 0,
            draws: 1,
        }
        .into();
        assert_eq!(record.win_rate, 66.67);
        assert_eq!(record.loss_rate, 0.0);
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let record: PerformanceRecord = WinLossDraw {
            wins: u32::MAX,
            losses: u32::MAX,
            draws: 2,
        }
        .into();
        assert_eq!(record.games, 2 * u64::from(u32::MAX) + 2);
        assert_eq!(record.win_rate, 50.0);
        assert_eq!(record.loss_rate, 50.0);
        assert_eq!(record.draw_rate, 0.0);
    }

    #[test]
    fn rates_stay_within_bounds() {
        for wins in 0..6 {
            for losses in 0..6 {
                for draws in 0..6 {
                    let record: PerformanceRecord = WinLossDraw {
                        wins,
                        losses,
                        draws,
                    }
                    .into();
                    assert_eq!(record.games, u64::from(wins + losses + draws));
                    for rate in [record.win_rate, record.draw_rate, record.loss_rate] {
                        assert!((0.0..=100.0).contains(&rate));
                    }
                }
            }
        }
    }

    #[test]
    fn trend_and_label() {
        let ahead = WinLossDraw {
            wins: 7,
            losses: 3,
            draws: 0,
        };
        let even = WinLossDraw {
            wins: 2,
            losses: 2,
            draws: 5,
        };
        let behind = WinLossDraw {
            wins: 1,
            losses: 4,
            draws: 0,
        };
        assert_eq!(Trend::from_record(&ahead), Trend::Up);
        assert_eq!(Trend::from_record(&even), Trend::Down);
        assert_eq!(performance_label(&ahead), "+4");
        assert_eq!(performance_label(&even), "-0");
        assert_eq!(performance_label(&behind), "-3");
    }
}
