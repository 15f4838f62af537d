use wtimeline::core::clock::{TimePart, apply_part, from_display, parse_hhmm, parse_int, to_display};
use wtimeline::errors::AppError;
use wtimeline::models::Period;

#[test]
fn test_every_minute_of_the_day_round_trips() {
    for m in 0..1440 {
        let d = to_display(m);
        let back = from_display(&d.hour, &d.minute, d.period).expect("valid display");
        assert_eq!(back, m, "minute {m} displayed as {d}");
    }
}

#[test]
fn test_every_twelve_hour_input_round_trips() {
    for h in 1..=12 {
        for mi in 0..60 {
            for p in [Period::Am, Period::Pm] {
                let minutes = from_display(&h.to_string(), &format!("{mi:02}"), p).unwrap();
                let d = to_display(minutes);
                assert_eq!(d.hour, h.to_string());
                assert_eq!(d.minute, format!("{mi:02}"));
                assert_eq!(d.period, p);
            }
        }
    }
}

#[test]
fn test_display_of_known_times() {
    assert_eq!(to_display(0).to_string(), "12:00 AM");
    assert_eq!(to_display(540).to_string(), "9:00 AM");
    assert_eq!(to_display(570).to_string(), "9:30 AM");
    assert_eq!(to_display(720).to_string(), "12:00 PM");
    assert_eq!(to_display(805).to_string(), "1:25 PM");
    assert_eq!(to_display(1439).to_string(), "11:59 PM");
}

#[test]
fn test_hour_zero_and_twelve_both_show_as_twelve() {
    assert_eq!(from_display("12", "00", Period::Am).unwrap(), 0);
    assert_eq!(from_display("0", "00", Period::Am).unwrap(), 0);
    assert_eq!(to_display(0).hour, "12");
    assert_eq!(from_display("12", "30", Period::Pm).unwrap(), 750);
}

#[test]
fn test_past_midnight_wraps_in_display_only() {
    // 25:10 → shown as 1:10 AM
    let d = to_display(25 * 60 + 10);
    assert_eq!(d.to_string(), "1:10 AM");

    // 23:30 + 60 min
    assert_eq!(to_display(1410 + 60).to_string(), "12:30 AM");
}

#[test]
fn test_lenient_integer_parsing() {
    assert_eq!(parse_int("09").unwrap(), 9);
    assert_eq!(parse_int(" 45").unwrap(), 45);
    assert_eq!(parse_int("12abc").unwrap(), 12);
    assert_eq!(parse_int("-5").unwrap(), -5);
    assert!(matches!(parse_int("abc"), Err(AppError::InvalidNumber(_))));
    assert!(matches!(parse_int(""), Err(AppError::InvalidNumber(_))));
}

#[test]
fn test_oversized_numbers_are_rejected() {
    assert_eq!(parse_int("1000000").unwrap(), 1_000_000);
    assert_eq!(parse_int("-1000000").unwrap(), -1_000_000);
    assert!(matches!(parse_int("1000001"), Err(AppError::InvalidNumber(_))));
    assert!(matches!(
        parse_int("9223372036854775807"),
        Err(AppError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_int("99999999999999999999999"),
        Err(AppError::InvalidNumber(_))
    ));
    assert!(matches!(
        apply_part(540, TimePart::Minute, "9223372036854775807"),
        Err(AppError::InvalidNumber(_))
    ));
}

#[test]
fn test_negative_hour_keeps_its_sign() {
    assert_eq!(from_display("-1", "00", Period::Am).unwrap(), -60);
    assert_eq!(from_display("-1", "00", Period::Pm).unwrap(), 660);
    assert_eq!(to_display(-60).to_string(), "11:00 PM");
}

#[test]
fn test_editing_one_field_keeps_the_others() {
    // 9:00 AM
    assert_eq!(apply_part(540, TimePart::Hour, "10").unwrap(), 600);
    assert_eq!(apply_part(540, TimePart::Minute, "45").unwrap(), 585);
    assert_eq!(apply_part(540, TimePart::Period, "PM").unwrap(), 1260);
    assert_eq!(apply_part(1260, TimePart::Period, "am").unwrap(), 540);
    assert!(matches!(
        apply_part(540, TimePart::Period, "noon"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn test_parse_24h_config_time() {
    assert_eq!(parse_hhmm("09:00").unwrap(), 540);
    assert_eq!(parse_hhmm("17:45").unwrap(), 1065);
    assert!(parse_hhmm("9am").is_err());
}
