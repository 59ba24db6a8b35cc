use crate::tests::utils::{body_string, header, init_test_db, sign_in, TestRequest};

#[test]
fn login_page_loads_successfully() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/login").send(&db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains(r#"name="role""#));
}

#[test]
fn blank_username_is_rejected() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::post("/login", "username=+&password=admin&role=admin")
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please enter a username"));
}

#[test]
fn wrong_password_keeps_the_typed_name() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::post("/login", "username=Zhang&password=nope&role=admin")
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 401);

    let body = body_string(resp);
    assert!(body.contains("Wrong username or password"));
    assert!(body.contains(r#"value="Zhang""#));
    assert!(body.contains("Not signed in"));
}

#[test]
fn successful_login_sets_cookie_and_redirects() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::post("/login", "username=Alice&password=user&role=user")
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");
    assert!(header(&resp, "Set-Cookie").starts_with("session="));
    assert!(header(&resp, "Set-Cookie").contains("HttpOnly"));
}

#[test]
fn signed_in_user_appears_in_sidebar() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Alice", "user");

    let resp = TestRequest::get("/dashboard").cookie(&cookie).send(&db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Alice"));
    assert!(body.contains(">AL<"));
    assert!(body.contains("User"));
    assert!(!body.contains("Admin panel"));
}

#[test]
fn logout_revokes_the_session() {
    let (_dir, db) = init_test_db();
    let cookie = sign_in(&db, "Alice", "admin");

    let resp = TestRequest::post("/logout", "").cookie(&cookie).send(&db).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));

    let body = body_string(TestRequest::get("/dashboard").cookie(&cookie).send(&db).unwrap());
    assert!(body.contains("Not signed in"));
}

#[test]
fn garbage_cookie_is_anonymous() {
    let (_dir, db) = init_test_db();

    let resp = TestRequest::get("/dashboard")
        .cookie("session=not-a-real-token")
        .send(&db)
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Not signed in"));
}
