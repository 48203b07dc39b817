pub mod resume;

pub use resume::{EducationEntry, ExperienceEntry, ResumeDocument, ResumeHeader};
