// libs/appointment-cell/tests/conflict_test.rs
use assert_matches::assert_matches;
use uuid::Uuid;

use appointment_cell::models::{Appointment, AppointmentError, AppointmentStatus, AppointmentType};
use appointment_cell::services::AppointmentConflictChecker;
use shared_config::AppConfig;
use shared_models::TimeWindow;
use shared_utils::test_utils::{date, init_test_tracing, window};

#[test]
fn test_overlapping_appointment_is_detected() {
    init_test_tracing();
    let checker = AppointmentConflictChecker::new();
    let doctor_id = Uuid::new_v4();
    let day = date(2024, 3, 11);
    let existing = vec![window((9, 0), (9, 30)), window((10, 0), (10, 30))];

    assert!(checker.has_conflict(doctor_id, day, &window((9, 15), (9, 45)), &existing));
    assert!(!checker.has_conflict(doctor_id, day, &window((9, 31), (9, 59)), &existing));
}

#[test]
fn test_touching_appointments_count_as_conflict() {
    let checker = AppointmentConflictChecker::new();
    let existing = vec![window((9, 0), (12, 0))];

    assert!(checker.has_conflict(Uuid::new_v4(), date(2024, 3, 11), &window((12, 0), (14, 0)), &existing));
    assert!(checker.has_conflict(Uuid::new_v4(), date(2024, 3, 11), &window((8, 0), (9, 0)), &existing));
}

#[test]
fn test_find_conflicts_lists_all_overlaps() {
    let checker = AppointmentConflictChecker::new();
    let existing = vec![
        window((8, 0), (8, 30)),
        window((9, 0), (9, 30)),
        window((9, 30), (10, 0)),
        window((11, 0), (11, 30)),
    ];

    let conflicts = checker.find_conflicts(&window((9, 10), (10, 15)), &existing);

    assert_eq!(conflicts, vec![window((9, 0), (9, 30)), window((9, 30), (10, 0))]);
}

#[test]
fn test_check_applies_configured_buffer() {
    let config = AppConfig {
        appointment_buffer_minutes: 15,
        ..AppConfig::default()
    };
    let checker = AppointmentConflictChecker::from_config(&config);
    let existing = vec![window((9, 0), (9, 30))];

    let report = checker.check(Uuid::new_v4(), date(2024, 3, 11), &window((9, 45), (10, 15)), &existing);
    assert!(report.has_conflict);
    assert_eq!(report.conflicting_windows, existing);

    let plain = AppointmentConflictChecker::new();
    let report = plain.check(Uuid::new_v4(), date(2024, 3, 11), &window((9, 45), (10, 15)), &existing);
    assert!(!report.has_conflict);
    assert!(report.conflicting_windows.is_empty());
}

#[test]
fn test_ensure_available_rejects_conflict() {
    let checker = AppointmentConflictChecker::new();
    let doctor_id = Uuid::new_v4();
    let day = date(2024, 3, 11);
    let existing = vec![window((14, 0), (15, 0))];

    assert_matches!(
        checker.ensure_available(doctor_id, day, &window((14, 30), (15, 30)), &existing),
        Err(AppointmentError::ConflictDetected { conflicts: 1, .. })
    );
    assert!(checker.ensure_available(doctor_id, day, &window((15, 1), (15, 30)), &existing).is_ok());
}

fn booking(doctor_id: Uuid, day: chrono::NaiveDate, slot: TimeWindow, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        doctor_id,
        date: day,
        window: slot,
        appointment_type: AppointmentType::Consultation,
        priority: None,
        referral_id: None,
        status,
    }
}

#[test]
fn test_booked_windows_skip_inactive_and_other_days() {
    let checker = AppointmentConflictChecker::new();
    let doctor_id = Uuid::new_v4();
    let day = date(2024, 3, 11);
    let appointments = vec![
        booking(doctor_id, day, window((9, 0), (9, 30)), AppointmentStatus::Confirmed),
        booking(doctor_id, day, window((10, 0), (10, 30)), AppointmentStatus::Cancelled),
        booking(doctor_id, day, window((11, 0), (11, 30)), AppointmentStatus::Pending),
        booking(doctor_id, day, window((12, 0), (12, 30)), AppointmentStatus::NoShow),
        booking(doctor_id, date(2024, 3, 12), window((13, 0), (13, 30)), AppointmentStatus::Confirmed),
        booking(Uuid::new_v4(), day, window((14, 0), (14, 30)), AppointmentStatus::Confirmed),
    ];

    let booked = checker.booked_windows(doctor_id, day, &appointments);

    assert_eq!(booked, vec![window((9, 0), (9, 30)), window((11, 0), (11, 30))]);
    // the cancelled 10:00 slot is free again
    assert!(!checker.has_conflict(doctor_id, day, &window((10, 0), (10, 30)), &booked));
}
