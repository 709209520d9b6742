pub use super::member::Entity as Member;
pub use super::post::Entity as Post;
pub use super::post_report::Entity as PostReport;
pub use super::reply::Entity as Reply;
pub use super::study::Entity as Study;
pub use super::study_member::Entity as StudyMember;
pub use super::uploaded_file::Entity as UploadedFile;
pub use super::vote::Entity as Vote;
pub use super::vote_ballot::Entity as VoteBallot;
pub use super::vote_option::Entity as VoteOption;
