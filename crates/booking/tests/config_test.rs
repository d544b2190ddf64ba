use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use slotbook_booking::config::BookingConfig;
use slotbook_core::TimeOfDay;
use tracing::Level;

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<BookingConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    BookingConfig::from_lookup(|key| vars.get(key).cloned())
}

fn t(value: &str) -> TimeOfDay {
    value.parse().unwrap()
}

#[test]
fn test_defaults_without_variables() {
    let config = config_from(&[]).expect("Failed to load default config");

    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.slot_interval_minutes, 30);
    assert_eq!(config.reference_month_start, None);
    assert_eq!(config.default_opening_time, t("08:00"));
    assert_eq!(config.default_closing_time, t("18:00"));
    assert!(config.midnight_as_twelve);
}

#[test]
fn test_overrides_from_variables() {
    let config = config_from(&[
        ("LOG_LEVEL", "debug"),
        ("SLOTBOOK_SLOT_INTERVAL_MINUTES", "15"),
        ("SLOTBOOK_REFERENCE_MONTH_START", "2025-03-01"),
        ("SLOTBOOK_DEFAULT_OPENING_TIME", "09:30"),
        ("SLOTBOOK_DEFAULT_CLOSING_TIME", "17:00"),
        ("SLOTBOOK_MIDNIGHT_AS_TWELVE", "false"),
    ])
    .expect("Failed to load config");

    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.slot_interval_minutes, 15);
    assert_eq!(
        config.reference_month_start,
        NaiveDate::from_ymd_opt(2025, 3, 1)
    );
    assert_eq!(config.default_opening_time, t("09:30"));
    assert_eq!(config.default_closing_time, t("17:00"));
    assert!(!config.midnight_as_twelve);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = config_from(&[("LOG_LEVEL", "verbose")]).unwrap();

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        ("SLOTBOOK_SLOT_INTERVAL_MINUTES", "thirty"),
        ("SLOTBOOK_SLOT_INTERVAL_MINUTES", "0"),
        ("SLOTBOOK_SLOT_INTERVAL_MINUTES", "-15"),
        ("SLOTBOOK_REFERENCE_MONTH_START", "03/01/2025"),
        ("SLOTBOOK_DEFAULT_OPENING_TIME", "8am"),
        ("SLOTBOOK_DEFAULT_CLOSING_TIME", "24:00"),
        ("SLOTBOOK_MIDNIGHT_AS_TWELVE", "sometimes"),
    ];

    for (key, value) in cases {
        let err = config_from(&[(key, value)]).unwrap_err();
        assert!(
            format!("{err:#}").contains(key),
            "{key}={value} gave unexpected error: {err:#}"
        );
    }
}

#[test]
fn test_default_working_hours_cover_every_day() {
    let config = config_from(&[("SLOTBOOK_DEFAULT_OPENING_TIME", "10:00")]).unwrap();
    let hours = config.default_working_hours();

    assert_eq!(hours.len(), 7);
    assert_eq!(hours[0].day_of_week, Weekday::Mon);
    assert_eq!(hours[6].day_of_week, Weekday::Sun);
    assert!(hours.iter().all(|day| day.is_open()
        && day.opens == t("10:00")
        && day.closes == t("18:00")
        && day.week_index.is_none()));
}

#[test]
fn test_slot_label_follows_midnight_setting() {
    let twelve = BookingConfig::default();
    let plain = BookingConfig {
        midnight_as_twelve: false,
        ..BookingConfig::default()
    };

    assert_eq!(twelve.slot_label(t("00:30")), "12:30");
    assert_eq!(plain.slot_label(t("00:30")), "00:30");
    assert_eq!(twelve.slot_label(t("13:30")), "13:30");
}
