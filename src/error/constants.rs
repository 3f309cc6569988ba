use super::const_error;
#[cfg(test)]
use super::Error;

const_error! {
    #[error("E000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}

const_error! {
    #[error("E001", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}

const_error! {
    #[error("E010", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}

const_error! {
    #[error("E011", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}

const_error! {
    #[error("E012", "missing or malformed fields")]
    #[status(BAD_REQUEST)]
    const JSON_INVALID_FIELDS;
}

const_error! {
    #[error("E013", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}

const_error! {
    #[error("E014", "request body is too large or unreadable")]
    #[status(BAD_REQUEST)]
    const JSON_BODY_UNREADABLE;
}

const_error! {
    #[error("E020", "referenced user does not exist")]
    #[status(BAD_REQUEST)]
    const UNKNOWN_USER;
}

const_error! {
    #[error("E021", "referenced instructor does not exist")]
    #[status(BAD_REQUEST)]
    const UNKNOWN_INSTRUCTOR;
}

const_error! {
    #[error("E022", "referenced course does not exist")]
    #[status(BAD_REQUEST)]
    const UNKNOWN_COURSE;
}

const_error! {
    #[error("E023", "referenced student does not exist")]
    #[status(BAD_REQUEST)]
    const UNKNOWN_STUDENT;
}

const_error! {
    #[error("E030", "not found")]
    #[status(NOT_FOUND)]
    const NOT_FOUND;
}

const_error! {
    #[error("E031", "user not found")]
    #[status(NOT_FOUND)]
    const USER_NOT_FOUND;
}

const_error! {
    #[error("E032", "instructor not found")]
    #[status(NOT_FOUND)]
    const INSTRUCTOR_NOT_FOUND;
}

const_error! {
    #[error("E033", "course not found")]
    #[status(NOT_FOUND)]
    const COURSE_NOT_FOUND;
}

const_error! {
    #[error("E034", "student not found")]
    #[status(NOT_FOUND)]
    const STUDENT_NOT_FOUND;
}

const_error! {
    #[error("E035", "enrollment not found")]
    #[status(NOT_FOUND)]
    const ENROLLMENT_NOT_FOUND;
}

const_error! {
    #[error("E036", "transaction not found")]
    #[status(NOT_FOUND)]
    const TRANSACTION_NOT_FOUND;
}

const_error! {
    #[error("E037", "review not found")]
    #[status(NOT_FOUND)]
    const REVIEW_NOT_FOUND;
}

const_error! {
    #[error("E040", "username is already taken")]
    #[status(CONFLICT)]
    const DUPLICATE_USERNAME;
}

const_error! {
    #[error("E041", "an instructor with this email already exists")]
    #[status(CONFLICT)]
    const DUPLICATE_INSTRUCTOR_EMAIL;
}

const_error! {
    #[error("E042", "user is already linked to a student")]
    #[status(CONFLICT)]
    const STUDENT_ALREADY_EXISTS;
}

const_error! {
    #[error("E043", "student has already reviewed this course")]
    #[status(CONFLICT)]
    const DUPLICATE_REVIEW;
}

#[cfg(test)]
pub(super) const ALL: &[Error<'static>] = &[
    INTERNAL,
    DATABASE_ERROR,
    JSON_SYNTAX_ERROR,
    JSON_CONTENT_TYPE,
    JSON_INVALID_FIELDS,
    JSON_VALIDATE_INVALID,
    JSON_BODY_UNREADABLE,
    UNKNOWN_USER,
    UNKNOWN_INSTRUCTOR,
    UNKNOWN_COURSE,
    UNKNOWN_STUDENT,
    NOT_FOUND,
    USER_NOT_FOUND,
    INSTRUCTOR_NOT_FOUND,
    COURSE_NOT_FOUND,
    STUDENT_NOT_FOUND,
    ENROLLMENT_NOT_FOUND,
    TRANSACTION_NOT_FOUND,
    REVIEW_NOT_FOUND,
    DUPLICATE_USERNAME,
    DUPLICATE_INSTRUCTOR_EMAIL,
    STUDENT_ALREADY_EXISTS,
    DUPLICATE_REVIEW,
];
