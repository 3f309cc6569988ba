mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;

        let res = app
            .post("/v1/users")
            .json(&json!({
                "username": "bob",
                "email": "bob@example.com",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res: Value = res.json().await;
        assert_json_eq!(
            res,
            json!({
                "id": res["id"],
                "username": "bob",
                "email": "bob@example.com",
            })
        );
    }

    #[tokio::test]
    async fn without_email() {
        let app = App::new().await;

        let res = app
            .post("/v1/users")
            .json(&json!({
                "username": "bob",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.json::<Value>().await["email"], Value::Null);
    }

    #[tokio::test]
    async fn duplicate_username() {
        let app = App::new().await;
        app.create_user("bob").await;

        let res = app
            .post("/v1/users")
            .json(&json!({
                "username": "bob",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_USERNAME);
    }

    #[tokio::test]
    async fn invalid_email() {
        let app = App::new().await;

        let res = app
            .post("/v1/users")
            .json(&json!({
                "username": "bob",
                "email": "bob",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn null_username() {
        let app = App::new().await;
        let id = app.create_user("bob").await;

        let res = app
            .patch(&format!("/v1/users/{id}"))
            .json(&json!({
                "username": null,
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_INVALID_FIELDS);

        let res: Value = app.get(&format!("/v1/users/{id}")).send().await.json().await;
        assert_eq!(res["username"], "bob");
    }

    #[tokio::test]
    async fn clear_email() {
        let app = App::new().await;
        let id = app.create_user("bob").await;

        let res = app
            .patch(&format!("/v1/users/{id}"))
            .json(&json!({
                "email": null,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_json_eq!(
            res.json::<Value>().await,
            json!({
                "id": id,
                "username": "bob",
                "email": null,
            })
        );
    }

    #[tokio::test]
    async fn username_taken() {
        let app = App::new().await;
        app.create_user("bob").await;
        let id = app.create_user("eve").await;

        let res = app
            .put(&format!("/v1/users/{id}"))
            .json(&json!({
                "username": "bob",
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_USERNAME);
    }

    #[tokio::test]
    async fn student_fields_are_not_synced() {
        let app = App::new().await;
        let user = app.create_user("bob").await;
        let student = app.create_student(user).await;

        let res = app
            .patch(&format!("/v1/users/{user}"))
            .json(&json!({
                "username": "robert",
                "email": "robert@example.com",
            }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res: Value = app
            .get(&format!("/v1/students/{student}"))
            .send()
            .await
            .json()
            .await;
        assert_eq!(res["username"], format!("student{user}"));
        assert_eq!(res["email"], format!("student{user}@example.com"));
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app.delete("/v1/users/999999").send().await;

        assert_error!(res, error::USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn without_student() {
        let app = App::new().await;
        let id = app.create_user("bob").await;

        let res = app.delete(&format!("/v1/users/{id}")).send().await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        assert_eq!(app.count("/v1/users").await, 0);
    }
}
