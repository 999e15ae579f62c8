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
    use tower::ServiceExt;

    struct TestData {
        owner: UserModel,
        other_user: UserModel,
        admin: UserModel,
        course: CourseModel,
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
        let bootcamp = BootcampModel::create(db, owner.id, "Devworks", "Web dev", None)
            .await
            .unwrap();
        let course = CourseModel::create(
            db,
            bootcamp.id,
            owner.id,
            "Node Basics",
            "Learn the fundamentals of Node.js",
            8,
            8000.0,
            "beginner",
            false,
        )
        .await
        .unwrap();

        TestData {
            owner,
            other_user,
            admin,
            course,
        }
    }

    fn delete_request(course_id: i64, token: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/courses/{}", course_id))
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn delete_course_success_as_owner() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let response = app
            .oneshot(delete_request(data.course.id, &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Course deleted successfully");
        assert_eq!(json["data"], serde_json::json!({}));

        let after = CourseModel::get_by_id(app_state.db(), data.course.id)
            .await
            .unwrap();
        assert!(after.is_none());
    }

    #[tokio::test]
    async fn delete_course_success_as_admin() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.admin.id, &data.admin.role);

        let response = app
            .oneshot(delete_request(data.course.id, &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_course_forbidden_non_owner() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.other_user.id, &data.other_user.role);

        let response = app
            .oneshot(delete_request(data.course.id, &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(
            json["message"],
            format!(
                "User {} is not authorized to delete course {}",
                data.other_user.id, data.course.id
            )
        );

        // Record survives
        let still_there = CourseModel::get_by_id(app_state.db(), data.course.id)
            .await
            .unwrap();
        assert!(still_there.is_some());
    }

    #[tokio::test]
    async fn delete_course_unauthorized_no_token() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/courses/{}", data.course.id))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn delete_course_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let (token, _) = generate_jwt(data.owner.id, &data.owner.role);

        let response = app.oneshot(delete_request(999, &token)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["message"], "No course found with id of 999");
    }
}
