use timelog::Core;
use timelog::errors::AppError;

fn summarize(lines: &[&str]) -> Vec<String> {
    Core::summarize(lines, Some(10)).expect("summarize")
}

#[test]
fn test_accumulate_days() {
    let log = summarize(&[
        "Start: 10.12.2018 07:00",
        "End: 10.12.2018 16:30",
        "Start: 11.12.2018 07:00",
        "End: 11.12.2018 15:30",
    ]);

    assert_eq!(
        log,
        vec![
            "2018-12-10 Beginn: 07:00 Ende: 16:30 Dauer: 9.5h",
            "2018-12-11 Beginn: 07:00 Ende: 15:30 Dauer: 8.5h",
        ]
    );
}

#[test]
fn test_between_days_regression() {
    let log = summarize(&["Start: 28.12.2018 23:00", "End: 29.12.2018 02:00"]);

    assert_eq!(
        log,
        vec![
            "2018-12-28 Beginn: 23:00 Ende: 23:59 Dauer: 1.0h",
            "2018-12-29 Beginn: 00:00 Ende: 02:00 Dauer: 2.0h",
        ]
    );
}

#[test]
fn test_no_start_lines_gives_empty_report() {
    assert!(summarize(&[]).is_empty());
    assert!(summarize(&["End: 10.12.2018 16:30", "End: 11.12.2018 15:30"]).is_empty());
    assert!(summarize(&["nothing to see", ""]).is_empty());
}

#[test]
fn test_open_shift_runs_until_end_of_day() {
    let log = summarize(&["Start: 10.12.2018 07:00"]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 07:00 Ende: 23:59 Dauer: 17.0h"]);

    // an end before the start does not close it
    let log = summarize(&["Start: 10.12.2018 07:00", "End: 10.12.2018 06:00"]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 00:00 Ende: 23:59 Dauer: 23.0h"]);
}

#[test]
fn test_two_shifts_on_one_day() {
    let log = summarize(&[
        "Start: 10.12.2018 07:00",
        "End: 10.12.2018 11:00",
        "Start: 10.12.2018 12:00",
        "End: 10.12.2018 16:00",
    ]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 07:00 Ende: 16:00 Dauer: 8.0h"]);
}

#[test]
fn test_each_start_takes_the_next_later_end() {
    // both starts pair with the 10:00 end
    let log = summarize(&[
        "Start: 10.12.2018 07:00",
        "Start: 10.12.2018 08:00",
        "End: 10.12.2018 10:00",
    ]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 07:00 Ende: 10:00 Dauer: 5.0h"]);
}

#[test]
fn test_carry_over_into_day_with_new_start() {
    let log = summarize(&[
        "Start: 10.12.2018 22:00",
        "End: 11.12.2018 06:00",
        "Start: 11.12.2018 08:00",
        "End: 11.12.2018 12:00",
    ]);
    assert_eq!(
        log,
        vec![
            "2018-12-10 Beginn: 22:00 Ende: 23:59 Dauer: 2.0h",
            "2018-12-11 Beginn: 00:00 Ende: 12:00 Dauer: 10.0h",
        ]
    );
}

#[test]
fn test_only_first_end_of_day_is_carried_over() {
    // 04:00 would be a second overnight end on the same morning; it is ignored
    let log = summarize(&[
        "Start: 10.12.2018 22:00",
        "End: 11.12.2018 02:00",
        "End: 11.12.2018 04:00",
        "Start: 11.12.2018 05:00",
        "End: 11.12.2018 09:00",
    ]);
    assert_eq!(
        log,
        vec![
            "2018-12-10 Beginn: 22:00 Ende: 23:59 Dauer: 2.0h",
            "2018-12-11 Beginn: 00:00 Ende: 09:00 Dauer: 6.0h",
        ]
    );
}

#[test]
fn test_overnight_end_is_only_filed_after_last_start_day() {
    // 29.12. has no start and is not the day after the last start (30.12.)
    let log = summarize(&[
        "Start: 28.12.2018 23:00",
        "End: 29.12.2018 02:00",
        "Start: 30.12.2018 08:00",
        "End: 30.12.2018 12:00",
    ]);
    assert_eq!(
        log,
        vec![
            "2018-12-28 Beginn: 23:00 Ende: 23:59 Dauer: 1.0h",
            "2018-12-30 Beginn: 08:00 Ende: 12:00 Dauer: 4.0h",
        ]
    );
}

#[test]
fn test_overnight_across_year_end() {
    let log = summarize(&["Start: 31.12.2018 22:00", "End: 1.1.2019 6:00"]);
    assert_eq!(
        log,
        vec![
            "2018-12-31 Beginn: 22:00 Ende: 23:59 Dauer: 2.0h",
            "2019-01-01 Beginn: 00:00 Ende: 06:00 Dauer: 6.0h",
        ]
    );
}

#[test]
fn test_limit_keeps_earliest_days() {
    let lines: Vec<String> = (1..=5)
        .rev()
        .flat_map(|d| {
            [
                format!("Start: {d}.12.2018 08:00"),
                format!("End: {d}.12.2018 12:00"),
            ]
        })
        .collect();

    let log = Core::summarize(&lines, Some(2)).expect("summarize");
    assert_eq!(
        log,
        vec![
            "2018-12-01 Beginn: 08:00 Ende: 12:00 Dauer: 4.0h",
            "2018-12-02 Beginn: 08:00 Ende: 12:00 Dauer: 4.0h",
        ]
    );

    assert_eq!(Core::summarize(&lines, None).expect("summarize").len(), 5);
    assert!(Core::summarize(&lines, Some(0)).expect("summarize").is_empty());
}

#[test]
fn test_unparseable_lines_are_ignored() {
    let noisy = summarize(&[
        "Random: garbage",
        "Start: 10.12.2018 07:00",
        "Start: 10.12.2018 08:00 (late)",
        "",
        "End: 10.12.2018 16:30",
        "End 11.12.2018 15:30",
    ]);
    let clean = summarize(&["Start: 10.12.2018 07:00", "End: 10.12.2018 16:30"]);
    assert_eq!(noisy, clean);
}

#[test]
fn test_duplicate_lines_count_once() {
    let log = summarize(&[
        "Start: 10.12.2018 07:00",
        "End: 10.12.2018 16:30",
        "Start: 10.12.2018 07:00",
        "End: 10.12.2018 16:30",
    ]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 07:00 Ende: 16:30 Dauer: 9.5h"]);
}

#[test]
fn test_line_order_does_not_matter() {
    let ordered = [
        "Start: 10.12.2018 22:00",
        "End: 11.12.2018 06:00",
        "Start: 11.12.2018 08:00",
        "End: 11.12.2018 12:00",
        "Start: 12.12.2018 23:30",
        "End: 13.12.2018 01:15",
    ];
    let shuffled = [ordered[5], ordered[2], ordered[0], ordered[4], ordered[3], ordered[1]];

    let a = summarize(&ordered);
    let b = summarize(&shuffled);
    assert_eq!(a, b);
    assert_eq!(a.len(), 4);

    let mut reversed = ordered;
    reversed.reverse();
    assert_eq!(summarize(&reversed), a);
}

#[test]
fn test_summarize_is_idempotent() {
    let lines = ["Start: 28.12.2018 23:00", "End: 29.12.2018 02:00"];
    assert_eq!(summarize(&lines), summarize(&lines));
}

#[test]
fn test_hours_round_half_up() {
    let log = summarize(&["Start: 10.12.2018 07:00", "End: 10.12.2018 07:15"]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 07:00 Ende: 07:15 Dauer: 0.3h"]);

    let log = summarize(&["Start: 10.12.2018 07:00", "End: 10.12.2018 07:02"]);
    assert_eq!(log, vec!["2018-12-10 Beginn: 07:00 Ende: 07:02 Dauer: 0.0h"]);
}

#[test]
fn test_invalid_timestamp_aborts_without_output() {
    let err = Core::summarize(["Start: 10.12.2018 07:00", "End: 32.12.2018 16:30"], None)
        .unwrap_err();

    match err {
        AppError::InvalidTimestamp { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "End: 32.12.2018 16:30");
        }
        other => panic!("unexpected error: {other}"),
    }
}
