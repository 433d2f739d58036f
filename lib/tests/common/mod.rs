#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use lms_transform::Timestamp;
use serde_json::{json, Value};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Timestamp::Valid(Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap())
}

pub fn student_json(id: u64) -> Value {
    json!({
        "id": id,
        "firstName": "Juan",
        "lastName": "Dela Cruz",
        "middleName": "santos",
        "birthDate": "2010-05-20T00:00:00.000Z",
        "phoneNumber": "09170001111",
        "gender": "male",
        "teacherId": "tch-001",
        "user": {
            "email": format!("student{id}@school.test"),
            "publicId": format!("STU-{id:04}"),
            "approvalStatus": "approved"
        }
    })
}

pub fn lesson_json() -> Value {
    json!({
        "id": 12,
        "createdAt": "2024-02-01T08:00:00.000Z",
        "updatedAt": "2024-02-03T08:00:00.000Z",
        "status": "published",
        "orderNumber": 3,
        "title": "Fractions",
        "slug": "fractions",
        "videoUrl": "https://video.test/fractions",
        "durationSeconds": 3725,
        "description": "",
        "excerpt": "Halves and quarters",
        "internalNotes": "dropped on the way in",
        "schedules": [
            {
                "id": 40,
                "createdAt": "2024-02-01T08:00:00.000Z",
                "updatedAt": "2024-02-01T08:00:00.000Z",
                "startDate": "2024-03-10T09:30:00Z",
                "students": [student_json(101), student_json(102)]
            }
        ]
    })
}

pub fn exam_json() -> Value {
    json!({
        "id": 5,
        "createdAt": "2024-02-01T08:00:00.000Z",
        "updatedAt": "2024-02-01T08:00:00.000Z",
        "status": "draft",
        "orderNumber": 1,
        "title": "Fractions quiz",
        "slug": "fractions-quiz",
        "randomizeQuestions": true,
        "visibleQuestionsCount": 2,
        "pointsPerQuestion": 5,
        "passingPoints": 5,
        "excerpt": "Short quiz",
        "coveredLessons": [
            { "id": 12, "title": "Fractions", "slug": "fractions" },
            { "id": 13 }
        ],
        "questions": [
            {
                "id": 70,
                "orderNumber": 1,
                "text": "What is 1/2 + 1/4?",
                "choices": [
                    { "id": 700, "orderNumber": 1, "text": "3/4", "isCorrect": true },
                    { "id": 701, "orderNumber": 2, "text": "2/6", "isCorrect": false, "isExpression": true }
                ]
            },
            { "id": 71, "orderNumber": 2, "text": "Empty question" }
        ],
        "schedules": [
            {
                "id": 80,
                "startDate": "2024-03-10T09:30:00Z",
                "endDate": "2024-03-10T11:00:00Z",
                "students": [student_json(101)]
            }
        ]
    })
}

pub fn teacher_user_json() -> Value {
    json!({
        "id": 1,
        "createdAt": "2023-12-01T00:00:00.000Z",
        "updatedAt": "2023-12-02T00:00:00.000Z",
        "supabaseUserId": "7b0d3f1c-3f2e-4d8a-9d55-3f0f6f1d2a11",
        "publicId": "TCH-0001",
        "role": "teacher",
        "email": "teacher@school.test",
        "profileImageUrl": "https://img.test/t.png",
        "approvalStatus": "approved",
        "approvalDate": "2023-12-05T10:00:00.000Z",
        "userAccount": {
            "id": 31,
            "firstName": "Maria",
            "lastName": "Santos",
            "birthDate": "1985-07-14T00:00:00.000Z",
            "phoneNumber": "0917-555-0000",
            "gender": "female",
            "educationalBackground": "BSEd Mathematics",
            "emails": ["maria@alt.test"],
            "user": {
                "email": "teacher@school.test",
                "publicId": "TCH-0001",
                "approvalStatus": "approved"
            }
        }
    })
}

pub fn student_user_json() -> Value {
    let mut account = student_json(101);
    account["lessonSchedules"] = json!([{ "id": 40, "startDate": "2024-03-10T09:30:00Z" }]);
    account["examSchedules"] = json!([]);
    account["activityCategoryCompletions"] = json!([{ "id": 900, "score": 8 }]);

    json!({
        "id": 2,
        "role": "student",
        "email": "student101@school.test",
        "approvalStatus": "pending",
        "userAccount": account
    })
}

pub fn activity_json(game_type: &str) -> Value {
    json!({
        "id": 3,
        "status": "published",
        "orderNumber": 2,
        "title": "Fraction race",
        "slug": "fraction-race",
        "game": { "name": "speed-math", "type": game_type },
        "categories": [
            {
                "id": 301,
                "level": "easy",
                "typePoint": { "durationSeconds": 90 },
                "typeTime": { "correctAnswerCount": 10 },
                "completions": [{ "id": 1, "score": 7 }, { "id": 2, "score": 3 }]
            },
            {
                "id": 302,
                "level": "hard",
                "typePoint": { "durationSeconds": 60 },
                "completions": []
            },
            {
                "id": 303,
                "level": "moderate",
                "completions": [{ "id": 3 }]
            }
        ]
    })
}
