use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maps game dates onto decision weeks. Week 1 starts on `season_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonCalendar {
    pub season_start: NaiveDate,
}

impl SeasonCalendar {
    pub fn new(season_start: NaiveDate) -> Self {
        SeasonCalendar { season_start }
    }

    /// Dates before the season start all map to week 0.
    pub fn week_of(&self, date: NaiveDate) -> u32 {
        let days = date.signed_duration_since(self.season_start).num_days();
        if days < 0 {
            return 0;
        }
        (days / 7) as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> SeasonCalendar {
        SeasonCalendar::new(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap())
    }

    #[test]
    fn test_week_of() {
        let calendar = calendar();

        assert_eq!(calendar.week_of(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()), 1);
        assert_eq!(calendar.week_of(NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()), 1);
        assert_eq!(calendar.week_of(NaiveDate::from_ymd_opt(2025, 8, 11).unwrap()), 2);
        assert_eq!(calendar.week_of(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()), 0);
    }

    #[test]
    fn test_week_of_later_in_season() {
        let calendar = calendar();

        assert_eq!(calendar.week_of(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()), 5);
        assert_eq!(calendar.week_of(NaiveDate::from_ymd_opt(2025, 9, 7).unwrap()), 5);
    }
}
