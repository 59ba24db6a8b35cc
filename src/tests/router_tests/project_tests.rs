use crate::errors::ServerError;
use crate::tests::utils::{body_string, header, init_test_db, TestRequest};

#[test]
fn project_page_shows_board_folders() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/project/proj-a").send(&db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Project A - Textures"));
    assert!(body.contains("/Projects/ProjectA/Textures"));
    assert!(body.contains(r#"id="folder-9""#));
    assert!(body.contains(r#"id="folder-12""#));
    assert!(!body.contains(r#"id="folder-1""#));
    assert!(body.contains("Notifications on"));
}

#[test]
fn unknown_board_is_not_found() {
    let (_dir, db) = init_test_db();
    assert!(matches!(TestRequest::get("/project/nope").send_err(&db), ServerError::NotFound));
    assert!(matches!(
        TestRequest::post("/project/nope/notify", "").send_err(&db),
        ServerError::NotFound
    ));
}

#[test]
fn custom_range_shows_date_inputs_and_caption() {
    let (_dir, db) = init_test_db();

    let body = body_string(
        TestRequest::get("/project/proj-a?range=custom&start=2024-01-01&end=2024-01-31")
            .send(&db)
            .unwrap(),
    );
    assert!(body.contains("2024-01-01 to 2024-01-31"));
    assert!(body.contains(r#"name="start""#));

    let body = body_string(TestRequest::get("/project/proj-a?range=all").send(&db).unwrap());
    assert!(body.contains("All time"));
    assert!(!body.contains(r#"name="start""#));
}

#[test]
fn notify_toggle_is_persisted() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::post("/project/proj-a/notify", "").htmx().send(&db).unwrap());
    assert!(body.contains("Notifications off"));

    let body = body_string(TestRequest::get("/project/proj-a").send(&db).unwrap());
    assert!(body.contains("Notifications off"));

    let body = body_string(TestRequest::post("/project/proj-a/notify", "").htmx().send(&db).unwrap());
    assert!(body.contains("Notifications on"));
}

#[test]
fn refresh_all_names_the_board() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::post("/project/proj-a/refresh", "").htmx().send(&db).unwrap());
    assert!(body.contains("Refreshing snapshots of all folders in Project A - Textures..."));

    let resp = TestRequest::post("/project/proj-a/refresh", "").send(&db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/project/proj-a");
}

#[test]
fn sidebar_lists_boards_with_badges() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::get("/project/proj-b").send(&db).unwrap());
    assert!(body.contains(r#"href="/project/proj-a""#));
    assert!(body.contains(r#"<span class="badge">3</span>"#));
    assert!(body.contains("board-link active"));
}
