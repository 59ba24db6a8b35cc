use crate::errors::ServerError;
use crate::tests::utils::{body_string, header, init_test_db, sign_in, TestRequest};

#[test]
fn anonymous_visitor_sees_locked_page() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/admin").send(&db).unwrap();
    assert_eq!(resp.status(), 403);

    let body = body_string(resp);
    assert!(body.contains("No access"));
    assert!(!body.contains("zhangsan@company.com"));
}

#[test]
fn user_role_is_locked_out_too() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Li", "user");

    let resp = TestRequest::get("/admin").cookie(&cookie).send(&db).unwrap();
    assert_eq!(resp.status(), 403);
}

#[test]
fn admin_sees_users_stats_and_activity() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let resp = TestRequest::get("/admin").cookie(&cookie).send(&db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin panel"));
    assert!(body.contains("zhangsan@company.com"));
    assert!(body.contains("Disabled"));
    assert!(body.contains("Grant access"));
    // the sign-in itself is logged
    assert!(body.contains("Signed in as Administrator"));
}

#[test]
fn admin_search_narrows_the_list() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let body = body_string(
        TestRequest::get("/admin?tab=users&q=WANG")
            .cookie(&cookie)
            .send(&db)
            .unwrap(),
    );
    assert!(body.contains("wangwu@company.com"));
    assert!(!body.contains("zhangsan@company.com"));
}

#[test]
fn disks_tab_lists_disks() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let body = body_string(TestRequest::get("/admin?tab=disks").cookie(&cookie).send(&db).unwrap());
    assert!(body.contains("NAS Storage"));
    assert!(body.contains("8.00 TB"));
}

#[test]
fn admin_adds_a_user() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let resp = TestRequest::post("/admin/users", "name=Sun+Qi&email=SunQi%40Company.com")
        .cookie(&cookie)
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/admin?tab=users");

    let body = body_string(TestRequest::get("/admin").cookie(&cookie).send(&db).unwrap());
    assert!(body.contains("sunqi@company.com"));
    assert!(body.contains("Added Sun Qi to the directory"));
}

#[test]
fn duplicate_email_rerenders_with_message() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let resp = TestRequest::post("/admin/users", "name=Again&email=lisi%40company.com")
        .cookie(&cookie)
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("lisi@company.com already exists"));
}

#[test]
fn non_admin_cannot_add_users_or_boards() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Li", "user");

    let err = TestRequest::post("/admin/users", "name=X&email=x%40y.z")
        .cookie(&cookie)
        .send_err(&db);
    assert!(matches!(err, ServerError::Forbidden(_)));

    let err = TestRequest::post("/boards", "name=Mine&color=blue").send_err(&db);
    assert!(matches!(err, ServerError::Forbidden(_)));
}

#[test]
fn admin_creates_a_board() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let resp = TestRequest::post("/boards", "name=Project+C+-+FX&color=pink")
        .cookie(&cookie)
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 302);
    let location = header(&resp, "Location");
    assert!(location.starts_with("/project/proj-"));

    let body = body_string(TestRequest::get(&location).cookie(&cookie).send(&db).unwrap());
    assert!(body.contains("Project C - FX"));
    assert!(body.contains("No matching folders"));
}

#[test]
fn blank_board_name_is_rejected() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Root", "admin");

    let err = TestRequest::post("/boards", "name=++&color=blue")
        .cookie(&cookie)
        .send_err(&db);
    match err {
        ServerError::BadRequest(msg) => assert_eq!(msg, "Please enter a board name"),
        other => panic!("unexpected error: {other:?}"),
    }
}
