use crate::models::{CompletedTask, LeaderboardEntry, TimeFilter};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

pub fn rank(tasks: &[CompletedTask], filter: TimeFilter) -> Vec<LeaderboardEntry> {
    rank_at(tasks, filter, Local::now().naive_local())
}

/// One point per record inside the window, grouped by username, descending
/// by score. Equal scores order alphabetically by username. Records with an
/// unparsable date are skipped.
pub fn rank_at(
    tasks: &[CompletedTask],
    filter: TimeFilter,
    now: NaiveDateTime,
) -> Vec<LeaderboardEntry> {
    let mut scores: BTreeMap<&str, u64> = BTreeMap::new();
    for task in tasks {
        let Ok(date) = DateTime::parse_from_rfc3339(&task.date) else {
            continue;
        };
        if in_window(date.naive_local(), filter, now) {
            *scores.entry(task.username.as_str()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<LeaderboardEntry> = scores
        .into_iter()
        .map(|(username, score)| LeaderboardEntry {
            username: username.to_string(),
            score,
        })
        .collect();
    // entries arrive alphabetical from the map; the stable sort keeps that
    // order within equal scores
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

fn in_window(date: NaiveDateTime, filter: TimeFilter, now: NaiveDateTime) -> bool {
    match filter {
        TimeFilter::Day => date.date() == now.date(),
        TimeFilter::Week => date.date() >= week_start(now.date()),
        TimeFilter::Month => {
            date.year() == now.year() && date.month() == now.month()
        }
        TimeFilter::Year => date.year() == now.year(),
    }
}

/// The week starts on Sunday.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(username: &str, date: &str) -> CompletedTask {
        CompletedTask {
            id: format!("record-{username}-{date}"),
            task_id: "c1".to_string(),
            category_id: "creative".to_string(),
            task_title: "Paint a picture".to_string(),
            category_title: "Creative Corner".to_string(),
            date: date.to_string(),
            image_url: "data:image/png;base64,aGk=".to_string(),
            username: username.to_string(),
        }
    }

    fn at(date: &str) -> NaiveDateTime {
        date.parse().expect("bad test datetime")
    }

    #[test]
    fn day_filter_uses_the_calendar_date() {
        let tasks = vec![
            completed("ana", "2024-03-15T23:59:59+00:00"),
            completed("ana", "2024-03-14T23:59:59+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Day, at("2024-03-15T10:00:00"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].score, 1);
    }

    #[test]
    fn week_starts_on_the_most_recent_sunday() {
        // 2024-03-20 is a Wednesday; the week began Sunday 2024-03-17
        let tasks = vec![
            completed("ana", "2024-03-17T00:00:00+00:00"),
            completed("ana", "2024-03-16T23:59:59+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Week, at("2024-03-20T12:00:00"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].score, 1);
    }

    #[test]
    fn month_filter_needs_matching_month_and_year() {
        let tasks = vec![
            completed("ana", "2024-03-01T08:00:00+00:00"),
            completed("ana", "2024-02-29T08:00:00+00:00"),
            completed("ana", "2023-03-10T08:00:00+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Month, at("2024-03-15T10:00:00"));
        assert_eq!(entries[0].score, 1);
    }

    #[test]
    fn year_filter_counts_the_whole_year() {
        let tasks = vec![
            completed("ana", "2024-01-01T00:00:00+00:00"),
            completed("ana", "2024-12-31T23:00:00+00:00"),
            completed("ana", "2023-12-31T23:00:00+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Year, at("2024-06-15T10:00:00"));
        assert_eq!(entries[0].score, 2);
    }

    #[test]
    fn scores_count_one_point_per_record() {
        let tasks = vec![
            completed("a", "2024-03-15T08:00:00+00:00"),
            completed("a", "2024-03-15T09:00:00+00:00"),
            completed("a", "2024-03-15T10:00:00+00:00"),
            completed("b", "2024-03-15T11:00:00+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Day, at("2024-03-15T12:00:00"));
        assert_eq!(
            entries,
            vec![
                LeaderboardEntry {
                    username: "a".to_string(),
                    score: 3
                },
                LeaderboardEntry {
                    username: "b".to_string(),
                    score: 1
                },
            ]
        );
    }

    #[test]
    fn ties_order_alphabetically() {
        let tasks = vec![
            completed("zoe", "2024-03-15T08:00:00+00:00"),
            completed("ana", "2024-03-15T09:00:00+00:00"),
            completed("mia", "2024-03-15T10:00:00+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Day, at("2024-03-15T12:00:00"));
        let names: Vec<&str> = entries.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, ["ana", "mia", "zoe"]);
    }

    #[test]
    fn unparsable_dates_are_skipped() {
        let tasks = vec![
            completed("ana", "not a date"),
            completed("ana", "2024-03-15T08:00:00+00:00"),
        ];
        let entries = rank_at(&tasks, TimeFilter::Year, at("2024-03-15T12:00:00"));
        assert_eq!(entries[0].score, 1);
    }

    #[test]
    fn empty_window_ranks_nobody() {
        let tasks = vec![completed("ana", "2024-03-01T08:00:00+00:00")];
        let entries = rank_at(&tasks, TimeFilter::Day, at("2024-03-15T12:00:00"));
        assert!(entries.is_empty());
    }
}
