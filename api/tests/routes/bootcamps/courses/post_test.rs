#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        bootcamp::Model as BootcampModel, course::Model as CourseModel, user::Model as UserModel,
    };
    use serde_json::json;
    use tower::ServiceExt;

    struct TestData {
        owner: UserModel,
        other_user: UserModel,
        admin: UserModel,
        bootcamp: BootcampModel,
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let owner = UserModel::create(db, "owner", "owner@example.com", "publisher")
            .await
            .unwrap();
        let other_user = UserModel::create(db, "other", "other@example.com", "user")
            .await
            .unwrap();
        let admin = UserModel::create(db, "admin", "admin@example.com", "admin")
            .await
            .unwrap();

        let bootcamp = BootcampModel::create(
            db,
            owner.id,
            "Devworks Bootcamp",
            "Full stack web development",
            None,
        )
        .await
        .unwrap();

        TestData {
            owner,
            other_user,
            admin,
            bootcamp,
        }
    }

    fn course_body() -> serde_json::Value {
        json!({
            "title": "Node Basics",
            "description": "Learn the fundamentals of Node.js",
            "weeks": 8,
            "tuition": 8000,
            "minimum_skill": "beginner"
        })
    }

    #[tokio::test]
    async fn create_course_success_as_owner() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(course_body().to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(json["message"], "Course created successfully");
        assert_eq!(json["data"]["title"], "Node Basics");
        assert_eq!(json["data"]["bootcamp_id"], data.bootcamp.id);
        assert_eq!(json["data"]["user_id"], data.owner.id);
    }

    #[tokio::test]
    async fn create_course_ignores_caller_supplied_ownership_fields() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);
        let mut body = course_body();
        body["bootcamp_id"] = json!(9999);
        body["user_id"] = json!(9999);

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        // Path and token win over anything in the payload
        assert_eq!(json["data"]["bootcamp_id"], data.bootcamp.id);
        assert_eq!(json["data"]["user_id"], data.owner.id);
    }

    #[tokio::test]
    async fn create_course_success_as_admin() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.admin.id, &data.admin.role);

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(course_body().to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_course_unauthorized_no_token() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Content-Type", "application/json")
            .body(Body::from(course_body().to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_course_forbidden_non_owner() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.other_user.id, &data.other_user.role);

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(course_body().to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        // 401 is the wire contract for ownership failures
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Nothing was persisted
        let courses = CourseModel::find_by_bootcamp(app_state.db(), data.bootcamp.id)
            .await
            .unwrap();
        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn create_course_bootcamp_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/bootcamps/999/courses")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(course_body().to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(json["message"], "No bootcamp with id of 999");
    }

    #[tokio::test]
    async fn create_course_invalid_minimum_skill() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);
        let mut body = course_body();
        body["minimum_skill"] = json!("wizard");

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_course_missing_fields() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let uri = format!("/api/v1/bootcamps/{}/courses", data.bootcamp.id);
        let body = json!({ "title": "Missing everything else" });

        let req = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
