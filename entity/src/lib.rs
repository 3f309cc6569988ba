pub mod courses;
pub mod enrollments;
pub mod instructors;
pub mod reviews;
pub mod students;
pub mod transactions;
pub mod users;
