pub mod catalog;
pub mod course;
pub mod de;
pub mod instructor;
pub mod ratings;
pub mod review;

pub use catalog::{DepartmentCatalog, InstructorClusters, SubjectCatalogIndex};
pub use course::{RawCourseRecord, ReconciledCourse};
pub use instructor::{CourseRef, InstructorRecord};
pub use ratings::{
    CourseCodeEntry, PayloadData, ProfessorNode, ProfessorPayload, RatingConnection, RatingEdge,
    RatingNode, RatingTag,
};
pub use review::{ReviewKind, ReviewRecord};
