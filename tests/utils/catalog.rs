use super::App;
use http::StatusCode;
use serde_json::{json, Value};

#[allow(unused)]
pub fn course_body(instructor: i64) -> Value {
    json!({
        "title": "Flutter from scratch",
        "image": "https://cdn.example.com/flutter.png",
        "description": "Widgets, state and navigation.",
        "free_videos": ["https://videos.example.com/1"],
        "paid_videos": ["https://videos.example.com/2", "https://videos.example.com/3"],
        "price": 49.99,
        "duration": 12.5,
        "level": "Beginner",
        "language": "Dart",
        "instructor": instructor,
    })
}

#[allow(unused)]
impl App {
    async fn create(&self, url: &str, body: Value) -> i64 {
        let res = self.post(url).json(&body).send().await;
        assert_eq!(res.status(), StatusCode::CREATED, "POST {url} {body}");

        let res: Value = res.json().await;
        res["id"].as_i64().expect("created row has no id")
    }

    pub async fn create_user(&self, username: &str) -> i64 {
        self.create(
            "/v1/users",
            json!({
                "username": username,
                "email": format!("{username}@example.com"),
            }),
        )
        .await
    }

    pub async fn create_instructor(&self, email: &str) -> i64 {
        self.create(
            "/v1/instructors",
            json!({
                "name": "Ada Lovelace",
                "bio": "First programmer.",
                "email": email,
            }),
        )
        .await
    }

    pub async fn create_course(&self, instructor: i64) -> i64 {
        self.create("/v1/courses", course_body(instructor)).await
    }

    pub async fn create_student(&self, user: i64) -> i64 {
        self.create(
            "/v1/students",
            json!({
                "user": user,
                "username": format!("student{user}"),
                "email": format!("student{user}@example.com"),
            }),
        )
        .await
    }

    /// Creates a user and the student linked to it.
    pub async fn register_student(&self, username: &str) -> i64 {
        let user = self.create_user(username).await;
        self.create_student(user).await
    }

    pub async fn create_enrollment(&self, student: i64, course: i64) -> i64 {
        self.create(
            "/v1/enrollments",
            json!({
                "student": student,
                "course": course,
            }),
        )
        .await
    }

    pub async fn create_transaction(&self, student: i64, course: i64) -> i64 {
        self.create(
            "/v1/transactions",
            json!({
                "student": student,
                "course": course,
                "amount_paid": "49.99",
            }),
        )
        .await
    }

    pub async fn create_review(&self, student: i64, course: i64) -> i64 {
        self.create(
            "/v1/reviews",
            json!({
                "student": student,
                "course": course,
                "rating": 5,
                "comment": "Clear and well paced.",
            }),
        )
        .await
    }

    pub async fn count(&self, url: &str) -> usize {
        let res = self.get(url).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res: Vec<Value> = res.json().await;
        res.len()
    }
}
