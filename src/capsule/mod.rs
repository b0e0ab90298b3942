//! Time capsule scheduling and date-driven entry queries.
//!
//! A time capsule seals a journal entry until a target date. Capsule status
//! is never stored: every query takes the current date as a parameter and
//! recomputes it, so results never drift from the caller's notion of "today".
//!
//! The same module answers the anniversary question ("what did I write on
//! this day in earlier years?"), which is the other calendar-driven view of a
//! user's entries.

use crate::errors::ScheduleError;
use crate::journal_core::JournalEntry;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Whether a capsule can be opened on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapsuleStatus {
    /// The target date is still in the future.
    Sealed,
    /// The target date has been reached.
    Due,
}

/// A deferred-delivery wrapper around a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCapsule {
    /// Identity of the capsule.
    pub id: Uuid,
    /// The wrapped entry. Lookup only; the capsule does not own the entry.
    pub entry_id: Uuid,
    /// The calendar date on which the capsule opens.
    pub target_date: NaiveDate,
    /// When the capsule was created.
    pub created_at: DateTime<Utc>,
}

impl TimeCapsule {
    /// Computes the capsule's status relative to `current_date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use journal_life::capsule::{CapsuleStatus, TimeCapsule};
    /// use chrono::{NaiveDate, TimeZone, Utc};
    /// use uuid::Uuid;
    ///
    /// let capsule = TimeCapsule {
    ///     id: Uuid::new_v4(),
    ///     entry_id: Uuid::new_v4(),
    ///     target_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    /// };
    ///
    /// let before = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    /// let on = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// assert_eq!(capsule.status_on(before), CapsuleStatus::Sealed);
    /// assert_eq!(capsule.status_on(on), CapsuleStatus::Due);
    /// ```
    pub fn status_on(&self, current_date: NaiveDate) -> CapsuleStatus {
        if self.is_due_on(current_date) {
            CapsuleStatus::Due
        } else {
            CapsuleStatus::Sealed
        }
    }

    /// True once `current_date` has reached the target date.
    pub fn is_due_on(&self, current_date: NaiveDate) -> bool {
        self.target_date <= current_date
    }

    /// Days remaining until the capsule opens; zero or negative once due.
    pub fn days_until_open(&self, current_date: NaiveDate) -> i64 {
        self.target_date
            .signed_duration_since(current_date)
            .num_days()
    }
}

/// Seals `entry` in a new time capsule that opens on `target_date`.
///
/// `now` becomes the capsule's creation time. The target may be today but
/// never earlier than the day the entry was written or the day the capsule is
/// created.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidSchedule` if `target_date` precedes the
/// entry's creation date or the date of `now`.
pub fn create_capsule(
    entry: &JournalEntry,
    target_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<TimeCapsule, ScheduleError> {
    let earliest = entry.created_on().max(now.date_naive());

    if target_date < earliest {
        debug!(
            "Rejected capsule for entry {}: target {} before {}",
            entry.id, target_date, earliest
        );
        return Err(ScheduleError::InvalidSchedule {
            target_date,
            earliest,
        });
    }

    let capsule = TimeCapsule {
        id: Uuid::new_v4(),
        entry_id: entry.id,
        target_date,
        created_at: now,
    };

    info!(
        "Created time capsule {} for entry {} opening on {}",
        capsule.id, entry.id, target_date
    );
    Ok(capsule)
}

/// Returns every capsule whose target date has been reached, in input order.
pub fn check_due_capsules(capsules: &[TimeCapsule], current_date: NaiveDate) -> Vec<TimeCapsule> {
    let due: Vec<TimeCapsule> = capsules
        .iter()
        .filter(|capsule| capsule.is_due_on(current_date))
        .cloned()
        .collect();

    debug!(
        "{} of {} capsules due on {}",
        due.len(),
        capsules.len(),
        current_date
    );
    due
}

/// Returns capsules opening after `current_date` but within `days_ahead` days.
///
/// The window is `(current_date, current_date + days_ahead]`, so capsules that
/// are already due never appear here. Results are sorted by target date, then
/// by id. A negative window yields nothing.
pub fn get_upcoming_capsules(
    capsules: &[TimeCapsule],
    current_date: NaiveDate,
    days_ahead: i64,
) -> Vec<TimeCapsule> {
    if days_ahead < 0 {
        return Vec::new();
    }
    // Beyond the representable calendar every later date is in range.
    let horizon = Duration::try_days(days_ahead)
        .and_then(|window| current_date.checked_add_signed(window))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<TimeCapsule> = capsules
        .iter()
        .filter(|capsule| capsule.target_date > current_date && capsule.target_date <= horizon)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.target_date.cmp(&b.target_date).then(a.id.cmp(&b.id)));

    debug!(
        "{} capsules opening between {} and {}",
        upcoming.len(),
        current_date,
        horizon
    );
    upcoming
}

/// Returns entries written on this month and day in earlier years.
///
/// Entries from `current_date`'s own year or from later years are excluded.
/// The result is ordered oldest first. An entry written on 29 February only
/// matches 29 February.
///
/// # Examples
///
/// ```
/// use journal_life::capsule::get_anniversary_entries;
/// use journal_life::journal_core::JournalEntry;
/// use chrono::{Datelike, NaiveDate, TimeZone, Utc};
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let written = |y| {
///     JournalEntry::new(owner, "", vec![], Utc.with_ymd_and_hms(y, 5, 10, 8, 0, 0).unwrap())
/// };
/// let entries = vec![written(2023), written(2024), written(2022)];
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// let years: Vec<i32> = get_anniversary_entries(&entries, today)
///     .iter()
///     .map(|e| e.created_on().year())
///     .collect();
/// assert_eq!(years, vec![2022, 2023]);
/// ```
pub fn get_anniversary_entries(
    entries: &[JournalEntry],
    current_date: NaiveDate,
) -> Vec<JournalEntry> {
    let mut anniversaries: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| {
            let written = entry.created_on();
            written.month() == current_date.month()
                && written.day() == current_date.day()
                && written.year() < current_date.year()
        })
        .cloned()
        .collect();
    anniversaries.sort_by_key(|entry| entry.created_at);

    debug!(
        "Found {} anniversary entries for {}",
        anniversaries.len(),
        current_date
    );
    anniversaries
}

/// Whole years between the entry's creation year and `current_date`'s year.
pub fn years_since(entry: &JournalEntry, current_date: NaiveDate) -> i32 {
    current_date.year() - entry.created_on().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry_on(y: i32, m: u32, d: u32) -> JournalEntry {
        JournalEntry::new(
            Uuid::new_v4(),
            format!("{}-{}-{}", y, m, d),
            vec![],
            Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap(),
        )
    }

    fn capsule_for(target: NaiveDate) -> TimeCapsule {
        TimeCapsule {
            id: Uuid::new_v4(),
            entry_id: Uuid::new_v4(),
            target_date: target,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_create_capsule_before_entry_date_fails() {
        let entry = entry_on(2024, 1, 1);
        let now = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();

        let result = create_capsule(&entry, date(2023, 12, 31), now);

        assert_eq!(
            result,
            Err(ScheduleError::InvalidSchedule {
                target_date: date(2023, 12, 31),
                earliest: date(2024, 1, 1),
            })
        );
    }

    #[test]
    fn test_create_capsule_before_now_fails() {
        let entry = entry_on(2024, 1, 1);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        let result = create_capsule(&entry, date(2024, 2, 1), now);

        assert!(matches!(
            result,
            Err(ScheduleError::InvalidSchedule { earliest, .. }) if earliest == date(2024, 3, 1)
        ));
    }

    #[test]
    fn test_create_capsule_on_entry_date_succeeds() {
        let entry = entry_on(2024, 1, 1);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();

        let capsule = create_capsule(&entry, date(2024, 1, 1), now).unwrap();

        assert_eq!(capsule.entry_id, entry.id);
        assert_eq!(capsule.target_date, date(2024, 1, 1));
        assert_eq!(capsule.created_at, now);
        assert_eq!(capsule.status_on(date(2024, 1, 1)), CapsuleStatus::Due);
    }

    #[test]
    fn test_status_is_recomputed() {
        let capsule = capsule_for(date(2024, 6, 1));
        assert_eq!(capsule.status_on(date(2024, 5, 31)), CapsuleStatus::Sealed);
        assert_eq!(capsule.status_on(date(2024, 6, 1)), CapsuleStatus::Due);
        assert_eq!(capsule.status_on(date(2024, 5, 31)), CapsuleStatus::Sealed);
        assert_eq!(capsule.days_until_open(date(2024, 5, 25)), 7);
        assert_eq!(capsule.days_until_open(date(2024, 6, 3)), -2);
    }

    #[test]
    fn test_check_due_capsules_keeps_input_order() {
        let today = date(2024, 5, 10);
        let capsules = vec![
            capsule_for(date(2024, 5, 10)),
            capsule_for(date(2024, 5, 11)),
            capsule_for(date(2023, 1, 1)),
            capsule_for(date(2024, 5, 9)),
        ];

        let due = check_due_capsules(&capsules, today);

        assert_eq!(
            due,
            vec![
                capsules[0].clone(),
                capsules[2].clone(),
                capsules[3].clone()
            ]
        );
    }

    #[test]
    fn test_upcoming_scenario_three_ten_zero_days() {
        let today = date(2024, 5, 10);
        let capsules = vec![
            capsule_for(today + Duration::days(3)),
            capsule_for(today + Duration::days(10)),
            capsule_for(today),
        ];

        let upcoming = get_upcoming_capsules(&capsules, today, 7);

        assert_eq!(upcoming, vec![capsules[0].clone()]);
    }

    #[test]
    fn test_upcoming_window_is_inclusive_and_sorted() {
        let today = date(2024, 5, 10);
        let mut same_day_a = capsule_for(today + Duration::days(2));
        let mut same_day_b = capsule_for(today + Duration::days(2));
        same_day_a.id = Uuid::from_u128(2);
        same_day_b.id = Uuid::from_u128(1);
        let edge = capsule_for(today + Duration::days(7));
        let capsules = vec![edge.clone(), same_day_a.clone(), same_day_b.clone()];

        let upcoming = get_upcoming_capsules(&capsules, today, 7);

        assert_eq!(upcoming, vec![same_day_b, same_day_a, edge]);
    }

    #[test]
    fn test_due_and_upcoming_do_not_overlap() {
        let today = date(2024, 5, 10);
        let capsules: Vec<TimeCapsule> = (-3..=10)
            .map(|offset| capsule_for(today + Duration::days(offset)))
            .collect();

        let due = check_due_capsules(&capsules, today);
        let upcoming = get_upcoming_capsules(&capsules, today, 7);

        assert_eq!(due.len(), 4);
        assert_eq!(upcoming.len(), 7);
        assert!(due.iter().all(|c| !upcoming.contains(c)));
        assert!(due.iter().any(|c| c.target_date == today));
    }

    #[test]
    fn test_upcoming_with_zero_or_negative_window_is_empty() {
        let today = date(2024, 5, 10);
        let capsules = vec![capsule_for(today + Duration::days(1))];
        assert!(get_upcoming_capsules(&capsules, today, 0).is_empty());
        assert!(get_upcoming_capsules(&capsules, today, -5).is_empty());
    }

    #[test]
    fn test_upcoming_with_huge_window_does_not_overflow() {
        let today = date(2024, 5, 10);
        let capsules = vec![capsule_for(date(9999, 1, 1))];
        assert_eq!(get_upcoming_capsules(&capsules, today, i64::MAX).len(), 1);
    }

    #[test]
    fn test_anniversaries_exclude_same_year_and_sort_oldest_first() {
        let entries = vec![
            entry_on(2023, 5, 10),
            entry_on(2024, 5, 10),
            entry_on(2022, 5, 10),
            entry_on(2022, 5, 11),
        ];

        let result = get_anniversary_entries(&entries, date(2024, 5, 10));

        let dates: Vec<NaiveDate> = result.iter().map(JournalEntry::created_on).collect();
        assert_eq!(dates, vec![date(2022, 5, 10), date(2023, 5, 10)]);
    }

    #[test]
    fn test_anniversaries_skip_entries_from_later_years() {
        let entries = vec![entry_on(2025, 5, 10), entry_on(2021, 5, 10)];
        let today = date(2024, 5, 10);

        let result = get_anniversary_entries(&entries, today);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].created_on(), date(2021, 5, 10));
        assert_eq!(years_since(&result[0], today), 3);
    }

    #[test]
    fn test_leap_day_entries_only_match_leap_day() {
        let entries = vec![entry_on(2020, 2, 29)];
        assert!(get_anniversary_entries(&entries, date(2023, 2, 28)).is_empty());
        assert!(get_anniversary_entries(&entries, date(2023, 3, 1)).is_empty());
        assert_eq!(get_anniversary_entries(&entries, date(2024, 2, 29)).len(), 1);
    }

    #[test]
    fn test_queries_on_empty_inputs() {
        let today = date(2024, 5, 10);
        assert!(check_due_capsules(&[], today).is_empty());
        assert!(get_upcoming_capsules(&[], today, 7).is_empty());
        assert!(get_anniversary_entries(&[], today).is_empty());
    }

    #[test]
    fn test_years_since() {
        let entry = entry_on(2019, 5, 10);
        assert_eq!(years_since(&entry, date(2024, 5, 10)), 5);
    }
}
