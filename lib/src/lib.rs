//! Mapping layer between the learning-management API and its editors.
//!
//! Raw API records ([`raw_data`]) become domain entities ([`data`]), which
//! become editable form shapes ([`form_data`]), which become create/update
//! payloads ([`dto`]). Every transform is a pure function of its input.

pub mod data;
pub mod date;
pub mod dto;
pub mod error;
pub mod form_data;
pub mod raw_data;
pub mod relation;

pub use data::{
    Activity, ActivityCategory, ActivityCategoryCompletion, ActivityCategoryDetail,
    ActivityCategoryLevel, ActivityGame, BaseModel, Exam, ExamCompletion, ExamQuestion,
    ExamQuestionChoice, ExamSchedule, GameType, Id, IdRef, Lesson, LessonCompletion,
    LessonSchedule, RecordStatus, StudentUserAccount, TeacherUserAccount, User,
    UserAccount, UserApprovalStatus, UserGender, UserRole,
};
pub use date::Timestamp;
pub use error::TransformError;
pub use relation::Relation;
