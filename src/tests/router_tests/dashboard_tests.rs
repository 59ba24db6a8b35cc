use crate::errors::ServerError;
use crate::tests::utils::{body_string, header, init_test_db, TestRequest};
use http::Method;

#[test]
fn root_redirects_to_dashboard() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/").send(&db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");
}

#[test]
fn unknown_get_redirects_other_methods_404() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/no/such/page").send(&db).unwrap();
    assert_eq!(resp.status(), 302);

    let err = TestRequest::get("/dashboard").method(Method::DELETE).send_err(&db);
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn dashboard_shows_disks_and_totals() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/dashboard").send(&db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.contains("C: System"));
    assert!(body.contains("74%"));
    assert!(body.contains("11.50 TB"));
    assert!(body.contains("3.42 TB"));
    assert!(body.contains("Share 30%"));
    assert!(body.contains("Projects"));
    assert!(body.contains("Scan disks"));
}

#[test]
fn quick_action_replies_with_running_toast() {
    let (_dir, db) = init_test_db();

    let body = body_string(TestRequest::post("/actions/large-files", "").htmx().send(&db).unwrap());
    assert!(body.contains("Running: Find large files"));
    assert!(!body.contains("<html"));

    assert!(matches!(
        TestRequest::post("/actions/format-disk", "").htmx().send_err(&db),
        ServerError::NotFound
    ));
}

#[test]
fn export_list_respects_explicit_range() {
    let (_dir, db) = init_test_db();

    let body = body_string(
        TestRequest::get("/dashboard/export-files?start=2024-02-01&end=2024-03-31")
            .htmx()
            .send(&db)
            .unwrap(),
    );
    assert!(body.contains("render_001.exr"));
    assert!(body.contains("texture_diffuse.jpg"));
    assert!(!body.contains("project_v1.psd"));
    assert!(body.contains("2024-02-01 to 2024-03-31"));
    assert!(!body.contains("<html"));
}

#[test]
fn export_builds_a_workbook() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/export?start=2024-01-01&end=2024-12-31&file=1&file=4")
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Disposition").contains(".xlsx"));

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_without_selection_is_bad_request() {
    let (_dir, db) = init_test_db();

    let err = TestRequest::get("/export?start=2024-01-01&end=2024-12-31").send_err(&db);
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = TestRequest::get("/export?range=fortnight&file=1").send_err(&db);
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn stylesheet_is_served() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/static/main.css").send(&db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
}
