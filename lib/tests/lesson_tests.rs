mod common;

use chrono::{FixedOffset, NaiveDate, Utc};
use lms_transform::dto::{LessonScheduleCreateDto, LessonUpsertDto};
use lms_transform::form_data::{LessonScheduleUpsertFormData, LessonUpsertFormData};
use lms_transform::{Lesson, LessonSchedule, Relation, Timestamp};
use serde_json::json;

use common::{bytes, lesson_json, student_json, utc};

fn lesson(value: serde_json::Value) -> Lesson {
    Lesson::from_slice(&bytes(&value)).unwrap()
}

#[test]
fn test_lesson_transform_keeps_recognized_fields() {
    common::init_tracing();
    let lesson = lesson(lesson_json());

    assert_eq!(lesson.base.id, 12);
    assert_eq!(lesson.base.created_at, Some(utc(2024, 2, 1, 8, 0)));
    assert_eq!(lesson.title.as_deref(), Some("Fractions"));
    assert_eq!(lesson.duration_seconds, Some(3725));
    assert!(lesson.completions.is_none());
    assert!(!lesson.is_completed());

    let json = serde_json::to_value(&lesson).unwrap();
    assert!(json.get("internalNotes").is_none());
    assert_eq!(json["createdAt"], json!("2024-02-01T08:00:00.000Z"));
    assert!(json.get("completions").is_none());
}

#[test]
fn test_lesson_schedule_students_are_mapped_recursively() {
    let lesson = lesson(lesson_json());
    let schedule = lesson.single_schedule().unwrap();

    assert_eq!(schedule.start_date, Some(utc(2024, 3, 10, 9, 30)));

    let students = schedule.students.as_slice();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, 101);
    assert_eq!(students[0].email.as_deref(), Some("student101@school.test"));
    assert_eq!(students[0].full_name(), "Dela Cruz, Juan S.");
}

#[test]
fn test_lesson_transform_is_idempotent() {
    let raw = bytes(&lesson_json());

    assert_eq!(Lesson::from_slice(&raw).unwrap(), Lesson::from_slice(&raw).unwrap());
}

#[test]
fn test_completion_presence_marks_lesson_completed() {
    let mut raw = lesson_json();
    raw["completions"] = json!([{ "id": 1, "student": { "id": 101, "firstName": "Juan" } }]);

    let lesson = lesson(raw);

    assert!(lesson.is_completed());
    assert_eq!(lesson.completions.unwrap()[0].student.unwrap().id, 101);
}

#[test]
fn test_empty_optional_lists_are_absent() {
    let mut raw = lesson_json();
    raw["schedules"] = json!([]);
    raw["completions"] = json!([]);

    let lesson = lesson(raw);

    assert!(lesson.schedules.is_none());
    assert!(lesson.completions.is_none());
    assert!(!lesson.is_completed());
}

#[test]
fn test_schedule_students_empty_vs_absent() {
    let schedule = |students: Option<serde_json::Value>| {
        let mut raw = json!({ "id": 40, "startDate": "2024-03-10T09:30:00Z" });
        if let Some(students) = students {
            raw["students"] = students;
        }
        LessonSchedule::from(
            serde_json::from_value::<lms_transform::raw_data::RawLessonSchedule>(raw).unwrap(),
        )
    };

    let absent = schedule(None);
    assert_eq!(absent.students, Relation::NotRequested);
    assert!(serde_json::to_value(&absent).unwrap().get("students").is_none());

    let empty = schedule(Some(json!([])));
    assert_eq!(empty.students, Relation::RequestedEmpty);
    assert!(serde_json::to_value(&empty).unwrap()["students"].is_null());

    let null = schedule(Some(json!(null)));
    assert_eq!(null.students, Relation::RequestedEmpty);

    let populated = schedule(Some(json!([student_json(7)])));
    assert!(populated.students.is_populated());
}

#[test]
fn test_lesson_form_data_splits_single_schedule() {
    let form = LessonUpsertFormData::from_lesson(&lesson(lesson_json()), &Utc);

    assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2024, 3, 10));
    assert_eq!(form.start_time.as_deref(), Some("09:30 AM"));
    assert_eq!(form.student_ids, Some(vec![101, 102]));
    assert_eq!(form.duration.as_deref(), Some("01:02:05"));
    assert_eq!(form.description, None);
    assert_eq!(form.excerpt.as_deref(), Some("Halves and quarters"));
}

#[test]
fn test_lesson_form_data_ignores_multiple_schedules() {
    let mut raw = lesson_json();
    raw["schedules"] = json!([
        { "id": 40, "startDate": "2024-03-10T09:30:00Z" },
        { "id": 41, "startDate": "2024-03-11T09:30:00Z" }
    ]);

    let form = LessonUpsertFormData::from_lesson(&lesson(raw), &Utc);

    assert_eq!(form.start_date, None);
    assert_eq!(form.start_time, None);
    assert_eq!(form.student_ids, None);
}

#[test]
fn test_single_schedule_scenario_end_to_end() {
    let lesson = lesson(json!({
        "id": 1,
        "schedules": [{ "id": 2, "startDate": "2024-03-10T09:30:00Z", "students": [] }]
    }));

    let form = LessonUpsertFormData::from_lesson(&lesson, &Utc);
    assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2024, 3, 10));
    assert_eq!(form.start_time.as_deref(), Some("09:30 AM"));
    assert_eq!(form.student_ids, Some(vec![]));

    let dto = LessonUpsertDto::from_form_data(form, &Utc);
    assert_eq!(dto.start_date, utc(2024, 3, 10, 9, 30));
    assert_eq!(dto.student_ids, None);

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["startDate"], json!("2024-03-10T09:30:00.000Z"));
    assert!(json["studentIds"].is_null());
    assert!(json.get("title").is_none());
}

#[test]
fn test_round_trip_restores_start_time_in_any_zone() {
    let lesson = lesson(lesson_json());
    let zones = [
        FixedOffset::east_opt(8 * 3600).unwrap(),
        FixedOffset::west_opt(5 * 3600).unwrap(),
        FixedOffset::east_opt(0).unwrap(),
    ];

    for tz in zones {
        let form = LessonUpsertFormData::from_lesson(&lesson, &tz);
        let dto = LessonUpsertDto::from_form_data(form, &tz);

        assert_eq!(dto.start_date, utc(2024, 3, 10, 9, 30), "offset {tz}");
        assert_eq!(dto.student_ids, Some(vec![101, 102]));
        assert_eq!(dto.duration_seconds, Some(3725));
    }
}

#[test]
fn test_dto_requires_both_date_and_time() {
    let form = LessonUpsertFormData {
        start_date: NaiveDate::from_ymd_opt(2024, 3, 10),
        start_time: None,
        student_ids: Some(vec![1, 2]),
        ..LessonUpsertFormData::default()
    };

    let dto = LessonUpsertDto::from_form_data(form, &Utc);

    assert_eq!(dto.start_date, Timestamp::Invalid);
    assert_eq!(dto.student_ids, Some(vec![1, 2]));
    assert!(serde_json::to_value(&dto).unwrap()["startDate"].is_null());
}

#[test]
fn test_form_data_deserializes_from_editor_payload() {
    let form: LessonUpsertFormData = serde_json::from_value(json!({
        "title": "Fractions",
        "duration": "00:45:00",
        "startDate": "2024-03-10T16:00:00.000Z",
        "startTime": "02:15 PM",
        "studentIds": []
    }))
    .unwrap();

    let dto = LessonUpsertDto::from_form_data(form, &Utc);

    assert_eq!(dto.duration_seconds, Some(2700));
    assert_eq!(dto.start_date, utc(2024, 3, 10, 14, 15));
    assert_eq!(dto.student_ids, None);
}

#[test]
fn test_lesson_schedule_form_and_create_dto() {
    let raw = json!({
        "id": 40,
        "startDate": "2024-03-10T09:30:00Z",
        "students": [],
        "lesson": { "id": 12, "title": "Fractions" }
    });
    let schedule = LessonSchedule::from(
        serde_json::from_value::<lms_transform::raw_data::RawLessonSchedule>(raw).unwrap(),
    );

    let form = LessonScheduleUpsertFormData::from_schedule(&schedule, &Utc);
    assert_eq!(form.lesson_id, 12);
    assert_eq!(form.student_ids, None);

    let dto = LessonScheduleCreateDto::from_form_data(form, &Utc);
    assert_eq!(
        serde_json::to_value(&dto).unwrap(),
        json!({
            "lessonId": 12,
            "startDate": "2024-03-10T09:30:00.000Z",
            "studentIds": null
        })
    );
}
