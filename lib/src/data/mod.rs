//! Domain entities built from raw API records.

mod activity;
mod base;
mod exam;
mod lesson;
mod user;

pub use activity::{
    Activity, ActivityCategory, ActivityCategoryCompletion, ActivityCategoryDetail,
    ActivityCategoryLevel, ActivityCategoryTypePoint, ActivityCategoryTypeTime, ActivityGame,
    GameType,
};
pub use base::{BaseModel, Id, IdRef, RecordStatus};
pub use exam::{Exam, ExamCompletion, ExamQuestion, ExamQuestionChoice, ExamSchedule};
pub use lesson::{Lesson, LessonCompletion, LessonSchedule};
pub use user::{
    full_name, StudentUserAccount, TeacherUserAccount, User, UserAccount, UserApprovalStatus,
    UserGender, UserRole,
};
