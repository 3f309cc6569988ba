mod utils;

use utils::prelude::*;

struct Catalog {
    course: i64,
    other_course: i64,
    bob: i64,
    eve: i64,
}

async fn setup(app: &App) -> Catalog {
    let instructor = app.create_instructor("ada@example.com").await;

    Catalog {
        course: app.create_course(instructor).await,
        other_course: app.create_course(instructor).await,
        bob: app.register_student("bob").await,
        eve: app.register_student("eve").await,
    }
}

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        let catalog = setup(&app).await;

        let res = app
            .post("/v1/reviews")
            .json(&json!({
                "course": catalog.course,
                "student": catalog.bob,
                "rating": 4,
                "comment": "Good pacing.",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res: Value = res.json().await;
        assert!(res["date_added"].is_string());
        assert_json_include!(
            actual: res,
            expected: json!({
                "course": catalog.course,
                "student": catalog.bob,
                "rating": 4,
                "comment": "Good pacing.",
            })
        );
    }

    #[tokio::test]
    async fn second_review_of_same_course() {
        let app = App::new().await;
        let catalog = setup(&app).await;
        app.create_review(catalog.bob, catalog.course).await;

        let res = app
            .post("/v1/reviews")
            .json(&json!({
                "course": catalog.course,
                "student": catalog.bob,
                "rating": 1,
                "comment": "Changed my mind.",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_REVIEW);
        assert_eq!(app.count("/v1/reviews").await, 1);
    }

    #[tokio::test]
    async fn same_student_other_course() {
        let app = App::new().await;
        let catalog = setup(&app).await;

        app.create_review(catalog.bob, catalog.course).await;
        app.create_review(catalog.bob, catalog.other_course).await;
        app.create_review(catalog.eve, catalog.course).await;

        assert_eq!(app.count("/v1/reviews").await, 3);
    }

    #[tokio::test]
    async fn rating_out_of_range() {
        let app = App::new().await;
        let catalog = setup(&app).await;

        for rating in [0, 6] {
            let res = app
                .post("/v1/reviews")
                .json(&json!({
                    "course": catalog.course,
                    "student": catalog.bob,
                    "rating": rating,
                    "comment": "",
                }))
                .send()
                .await;

            assert_error!(res, error::JSON_VALIDATE_INVALID);
        }
    }

    #[tokio::test]
    async fn unknown_course() {
        let app = App::new().await;
        let catalog = setup(&app).await;

        let res = app
            .post("/v1/reviews")
            .json(&json!({
                "course": 999999,
                "student": catalog.bob,
                "rating": 3,
                "comment": "",
            }))
            .send()
            .await;

        assert_error!(res, error::UNKNOWN_COURSE);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn null_comment() {
        let app = App::new().await;
        let catalog = setup(&app).await;
        let id = app.create_review(catalog.bob, catalog.course).await;

        let res = app
            .patch(&format!("/v1/reviews/{id}"))
            .json(&json!({
                "comment": null,
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_INVALID_FIELDS);

        let res: Value = app.get(&format!("/v1/reviews/{id}")).send().await.json().await;
        assert_eq!(res["student"], catalog.bob);
        assert_eq!(res["comment"], "Clear and well paced.");
    }

    #[tokio::test]
    async fn move_onto_existing_pair() {
        let app = App::new().await;
        let catalog = setup(&app).await;

        app.create_review(catalog.bob, catalog.course).await;
        let id = app.create_review(catalog.eve, catalog.course).await;

        let res = app
            .patch(&format!("/v1/reviews/{id}"))
            .json(&json!({
                "student": catalog.bob,
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_REVIEW);

        let res: Value = app
            .get(&format!("/v1/reviews/{id}"))
            .send()
            .await
            .json()
            .await;
        assert_eq!(res["student"], catalog.eve);
    }

    #[tokio::test]
    async fn move_onto_free_pair() {
        let app = App::new().await;
        let catalog = setup(&app).await;
        let id = app.create_review(catalog.bob, catalog.course).await;

        let res = app
            .patch(&format!("/v1/reviews/{id}"))
            .json(&json!({
                "course": catalog.other_course,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.json::<Value>().await["course"], catalog.other_course);
    }

    #[tokio::test]
    async fn keep_own_pair() {
        let app = App::new().await;
        let catalog = setup(&app).await;
        let id = app.create_review(catalog.bob, catalog.course).await;

        let res = app
            .put(&format!("/v1/reviews/{id}"))
            .json(&json!({
                "course": catalog.course,
                "student": catalog.bob,
                "rating": 2,
                "comment": "Second look.",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.json::<Value>().await["rating"], 2);
    }

    #[tokio::test]
    async fn date_added_is_immutable() {
        let app = App::new().await;
        let catalog = setup(&app).await;
        let id = app.create_review(catalog.bob, catalog.course).await;

        let before: Value = app
            .get(&format!("/v1/reviews/{id}"))
            .send()
            .await
            .json()
            .await;

        let res = app
            .patch(&format!("/v1/reviews/{id}"))
            .json(&json!({
                "comment": "Edited.",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let after: Value = res.json().await;
        assert_eq!(after["comment"], "Edited.");
        assert_eq!(after["date_added"], before["date_added"]);
    }

    #[tokio::test]
    async fn rating_out_of_range() {
        let app = App::new().await;
        let catalog = setup(&app).await;
        let id = app.create_review(catalog.bob, catalog.course).await;

        let res = app
            .patch(&format!("/v1/reviews/{id}"))
            .json(&json!({
                "rating": 9,
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }
}

#[tokio::test]
async fn delete() {
    let app = App::new().await;
    let catalog = setup(&app).await;
    let id = app.create_review(catalog.bob, catalog.course).await;

    let res = app.delete(&format!("/v1/reviews/{id}")).send().await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.delete(&format!("/v1/reviews/{id}")).send().await;
    assert_error!(res, error::REVIEW_NOT_FOUND);

    app.create_review(catalog.bob, catalog.course).await;
}
