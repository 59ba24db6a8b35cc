use crate::errors::ServerError;
use crate::tests::utils::{body_string, header, init_test_db, TestRequest};

#[test]
fn board_lists_unassigned_folders() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/folders").send(&db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Folder board"));
    assert!(body.contains(r#"id="folder-1""#));
    assert!(body.contains(r#"id="folder-8""#));
    assert!(!body.contains(r#"id="folder-9""#));
    assert!(body.contains("All time"));
}

#[test]
fn board_search_matches_name_or_path() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::get("/folders?q=clienta").send(&db).unwrap());
    assert!(body.contains(r#"id="folder-4""#));
    assert!(body.contains(r#"id="folder-8""#));
    assert!(!body.contains(r#"id="folder-1""#));

    let body = body_string(TestRequest::get("/folders?q=nothing-here").send(&db).unwrap());
    assert!(body.contains("No matching folders"));
}

#[test]
fn board_caption_follows_dates() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::get("/folders?start=2024-01-01").send(&db).unwrap());
    assert!(body.contains("after 2024-01-01"));

    let body = body_string(
        TestRequest::get("/folders?start=2024-01-01&end=2024-02-01&layout=list")
            .send(&db)
            .unwrap(),
    );
    assert!(body.contains("2024-01-01 to 2024-02-01"));
    assert!(body.contains("folder-grid list"));
}

#[test]
fn collapsed_card_shows_first_three() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/folders/1/card").htmx().send(&db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.contains("particles_cache.abc"));
    assert!(!body.contains("spark_texture.exr"));
    assert!(body.contains("Show 3 more files"));
    assert!(body.contains("+2 added"));
    assert!(body.contains("3 modified"));
    assert!(body.contains("-1 deleted"));
}

#[test]
fn selecting_modified_shows_every_match() {
    let (_dir, db) = init_test_db();

    let body = body_string(
        TestRequest::get("/folders/1/card?filter=mod&expanded=true")
            .htmx()
            .send(&db)
            .unwrap(),
    );
    assert!(body.contains("modified (3)"));
    assert!(body.contains("particles_cache.abc"));
    assert!(!body.contains("spark_texture.exr"));
    assert!(!body.contains("more files"));
    assert!(!body.contains("Collapse"));
    // clicking the active badge goes back to all records
    assert!(body.contains("/folders/1/card?filter=all&amp;expanded=true"));
}

#[test]
fn expanded_card_offers_collapse() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::get("/folders/1/card?expanded=true").send(&db).unwrap());
    assert!(body.contains("spark_texture.exr"));
    assert!(body.contains("Collapse"));
    assert!(body.contains("/folders/1/card?filter=all&amp;expanded=false"));
}

#[test]
fn folder_without_history_shows_zero_state() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::get("/folders/12/card").send(&db).unwrap());
    assert!(body.contains("No matching records"));
    assert!(!body.contains("added"));
}

#[test]
fn card_errors() {
    let (_dir, db) = init_test_db();

    assert!(matches!(TestRequest::get("/folders/999/card").send_err(&db), ServerError::NotFound));
    assert!(matches!(TestRequest::get("/folders/fx/card").send_err(&db), ServerError::NotFound));
    assert!(matches!(
        TestRequest::get("/folders/1/card?filter=renamed").send_err(&db),
        ServerError::BadRequest(_)
    ));
}

#[test]
fn refresh_and_open_reply_with_toasts() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::post("/folders/1/refresh", "").htmx().send(&db).unwrap());
    assert!(body.contains("Refreshing snapshot of fx..."));
    assert!(body.contains("toast"));

    let body = body_string(TestRequest::post("/folders/3/open", "").htmx().send(&db).unwrap());
    assert!(body.contains("Opening City in the file manager"));
}

#[test]
fn plain_form_actions_redirect_back() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::post("/folders/1/refresh", "").send(&db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/folders");
}

#[test]
fn unknown_card_action_is_not_found() {
    let (_dir, db) = init_test_db();
    assert!(matches!(
        TestRequest::post("/folders/1/delete", "").send_err(&db),
        ServerError::NotFound
    ));
}

#[test]
fn snapshot_settings_are_saved() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::post("/snapshots", "disk=d&path=%2FProjects%2FHOUSE&frequency=weekly")
        .htmx()
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Snapshot settings saved"));
}

#[test]
fn bad_snapshot_path_comes_back_as_error_toast() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::post("/snapshots", "disk=d&path=Projects&frequency=daily")
        .htmx()
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("toast-error"));
    assert!(body.contains("folder path must be absolute"));
}

#[test]
fn api_lists_board_folders_as_json() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/api/folders").send(&db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("application/json"));

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let folders = json.as_array().unwrap();
    assert_eq!(folders.len(), 8);
    assert_eq!(folders[0]["name"], "fx");
    assert_eq!(folders[0]["recent_updates"].as_array().unwrap().len(), 6);
    assert_eq!(folders[0]["recent_updates"][0]["kind"], "add");
}
