use super::*;
use crate::web::{self, tests::prelude::*};

use homesit_entities::{
    address::Address,
    profile::{PendingVerification, Role},
};

fn default_cfg() -> Cfg {
    Cfg {
        api_tokens: ["test-app-token".to_string()].into_iter().collect(),
        admin_tokens: ["test-admin-token".to_string()].into_iter().collect(),
        rate_limit: RateLimitCfg::default(),
    }
}

fn setup() -> (Client, FakeGeoCodingGateway, FakeDirectoryGateway) {
    setup_with(default_cfg())
}

fn setup_with(cfg: Cfg) -> (Client, FakeGeoCodingGateway, FakeDirectoryGateway) {
    let geocoding = FakeGeoCodingGateway::default();
    let directory = FakeDirectoryGateway::default();
    let client = web::tests::setup_with_cfg(
        vec![("/", routes())],
        cfg,
        geocoding.clone(),
        directory.clone(),
    );
    (client, geocoding, directory)
}

fn app_auth() -> Header<'static> {
    Header::new("Authorization", "Bearer test-app-token")
}

fn admin_auth() -> Header<'static> {
    Header::new("Authorization", "Bearer test-admin-token")
}

fn test_json(r: &LocalResponse) {
    assert_eq!(
        r.headers().get("Content-Type").collect::<Vec<_>>()[0],
        "application/json"
    );
}

fn body_json(r: LocalResponse) -> serde_json::Value {
    serde_json::from_str(&r.into_string().unwrap()).unwrap()
}

#[test]
fn get_version() {
    let (client, _, _) = setup();
    let response = client.get("/server/version").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().unwrap(), DUMMY_VERSION);
}

#[test]
fn geocode_without_credential() {
    let (client, gw, _) = setup();
    let response = client
        .post("/geocode")
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
    assert_eq!(gw.calls(), 0);
}

#[test]
fn geocode_with_unknown_credential() {
    let (client, _, _) = setup();
    let response = client
        .post("/geocode")
        .header(Header::new("Authorization", "Bearer wrong"))
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
fn forward_geocode_passes_provider_results_through() {
    let (client, gw, _) = setup();
    let mut carlton = place("Carlton, Melbourne, Victoria, Australia", -37.8001, 144.9674);
    carlton.category = Some("place".into());
    carlton.place_type = Some("suburb".into());
    carlton.importance = Some(0.62);
    gw.add_forward_result(
        "Carlton, VIC",
        vec![
            carlton,
            place("Carlton, Sydney, New South Wales, Australia", -33.9690, 151.1210),
        ],
    );

    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"query":"Carlton, VIC"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let body = body_json(response);
    let candidates = body.as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(
        candidates[0]["display_name"],
        "Carlton, Melbourne, Victoria, Australia"
    );
    // Coordinates stay the provider's strings; extra fields survive
    // under the provider's own names.
    assert_eq!(candidates[0]["lat"], "-37.8001");
    assert_eq!(candidates[0]["class"], "place");
    assert_eq!(candidates[0]["type"], "suburb");
    assert_eq!(candidates[1]["lon"], "151.121");
}

#[test]
fn forward_geocode_with_unknown_location() {
    let (client, _, _) = setup();
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"query":"Atlantis"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(body_json(response), serde_json::json!([]));
}

#[test]
fn forward_geocode_rejects_short_query() {
    let (client, gw, _) = setup();
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"query":"x"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let body = body_json(response);
    assert_eq!(body["error"], "Query must be between 2 and 500 characters");
    // Rejected before any outbound call.
    assert_eq!(gw.calls(), 0);
}

#[test]
fn forward_geocode_rejects_overlong_query() {
    let (client, gw, _) = setup();
    let query = "x".repeat(501);
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(format!(r#"{{"query":"{query}"}}"#))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(gw.calls(), 0);
}

#[test]
fn geocode_without_mode() {
    let (client, _, _) = setup();
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn reverse_geocode_rejects_out_of_range_latitude() {
    let (client, gw, _) = setup();
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"lat":91,"lon":10}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let body = body_json(response);
    assert_eq!(body["error"], "Invalid coordinates");
    assert_eq!(gw.calls(), 0);
}

#[test]
fn reverse_geocode_returns_place_description() {
    let (client, gw, _) = setup();
    gw.set_reverse_result(Some(place_with_address(
        "Carlton, Melbourne, Victoria, 3053, Australia",
        -37.8001,
        144.9674,
        Address {
            suburb: Some("Carlton".into()),
            city: Some("Melbourne".into()),
            state: Some("Victoria".into()),
            ..Default::default()
        },
    )));

    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"lat":-37.8001,"lon":144.9674}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let body = body_json(response);
    assert_eq!(
        body["display_name"],
        "Carlton, Melbourne, Victoria, 3053, Australia"
    );
    assert_eq!(body["address"]["suburb"], "Carlton");
    assert_eq!(body["address"]["state"], "Victoria");
}

#[test]
fn reverse_geocode_without_result() {
    let (client, _, _) = setup();
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"lat":0,"lon":0}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = body_json(response);
    assert_eq!(body["display_name"], "");
    assert!(body["address"].as_object().unwrap().is_empty());
}

#[test]
fn reverse_mode_takes_precedence_over_query() {
    let (client, gw, _) = setup();
    gw.set_reverse_result(Some(place("Somewhere", -33.9, 151.2)));
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW","lat":-33.9,"lon":151.2}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = body_json(response);
    assert_eq!(body["display_name"], "Somewhere");
}

#[test]
fn upstream_failure_is_a_server_error() {
    let (client, gw, _) = setup();
    gw.set_failing(true);
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    let body = body_json(response);
    assert_eq!(body["error"], "Geocoding service error (status 502)");
}

#[test]
fn rate_limit_rejects_the_21st_request() {
    let (client, _, _) = setup();
    for _ in 0..20 {
        let response = client
            .post("/geocode")
            .header(app_auth())
            .header(ContentType::JSON)
            .body(r#"{"query":"Sydney, NSW"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
    }
    let response = client
        .post("/geocode")
        .header(app_auth())
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::TooManyRequests);
    let body = body_json(response);
    assert_eq!(body["error"], "Too many requests. Please try again later.");
}

#[test]
fn rate_limit_accounts_forwarded_clients_separately() {
    let cfg = Cfg {
        rate_limit: RateLimitCfg {
            max_requests: 1,
            ..Default::default()
        },
        ..default_cfg()
    };
    let (client, _, _) = setup_with(cfg);

    let first = client
        .post("/geocode")
        .header(app_auth())
        .header(Header::new("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(first.status(), Status::Ok);

    let same_client = client
        .post("/geocode")
        .header(app_auth())
        .header(Header::new("X-Forwarded-For", "203.0.113.7"))
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(same_client.status(), Status::TooManyRequests);

    let other_client = client
        .post("/geocode")
        .header(app_auth())
        .header(Header::new("X-Real-IP", "198.51.100.4"))
        .header(ContentType::JSON)
        .body(r#"{"query":"Sydney, NSW"}"#)
        .dispatch();
    assert_eq!(other_client.status(), Status::Ok);
}

#[test]
fn pending_users_require_an_admin_credential() {
    let (client, _, _) = setup();

    let response = client.get("/users/pending").dispatch();
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client.get("/users/pending").header(app_auth()).dispatch();
    assert_eq!(response.status(), Status::Forbidden);
}

#[test]
fn list_pending_users() {
    let (client, _, directory) = setup();
    let mut alice = profile("p1", "Alice", Some("Carlton, VIC"));
    alice.role = Some(Role::Sitter);
    directory.add_pending(PendingVerification {
        profile: alice,
        email: Some("alice@example.com".into()),
        document_url: Some("identity-documents/u1/passport.jpg".into()),
    });
    let mut bob = profile("p2", "Bob", None);
    bob.role = None;
    directory.add_pending(PendingVerification {
        profile: bob,
        email: None,
        document_url: None,
    });

    let response = client.get("/users/pending").header(admin_auth()).dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let body = body_json(response);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "alice@example.com");
    assert_eq!(users[0]["role"], "sitter");
    assert_eq!(users[1]["email"], "N/A");
    assert_eq!(users[1]["role"], "N/A");
}

#[test]
fn nearby_profiles_are_ranked_and_cached() {
    let (client, gw, directory) = setup();
    directory.add_profile(profile("ref", "Ref", Some("Sydney, NSW")));
    directory.add_profile(profile("far", "Far", Some("Melbourne, VIC")));
    directory.add_profile(profile("near", "Near", Some("Parramatta, NSW")));
    directory.add_profile(profile("none", "None", None));
    gw.add_forward_result("Sydney, NSW", vec![place("Sydney", -33.8688, 151.2093)]);
    gw.add_forward_result("Melbourne, VIC", vec![place("Melbourne", -37.8136, 144.9631)]);
    gw.add_forward_result("Parramatta, NSW", vec![place("Parramatta", -33.8150, 151.0011)]);

    let response = client
        .get("/profiles/ref/nearby")
        .header(app_auth())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let body = body_json(response);
    let ranked = body.as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["id"], "near");
    assert_eq!(ranked[1]["id"], "far");
    assert!(ranked[0]["distance_km"].as_f64().unwrap() < 30.0);
    let calls_after_first = gw.calls();

    // A second request is served entirely from the geocode cache.
    let response = client
        .get("/profiles/ref/nearby")
        .header(app_auth())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(gw.calls(), calls_after_first);
}

#[test]
fn nearby_profiles_with_limit() {
    let (client, gw, directory) = setup();
    directory.add_profile(profile("ref", "Ref", Some("Sydney, NSW")));
    directory.add_profile(profile("far", "Far", Some("Melbourne, VIC")));
    directory.add_profile(profile("near", "Near", Some("Parramatta, NSW")));
    gw.add_forward_result("Sydney, NSW", vec![place("Sydney", -33.8688, 151.2093)]);
    gw.add_forward_result("Melbourne, VIC", vec![place("Melbourne", -37.8136, 144.9631)]);
    gw.add_forward_result("Parramatta, NSW", vec![place("Parramatta", -33.8150, 151.0011)]);

    let response = client
        .get("/profiles/ref/nearby?limit=1")
        .header(app_auth())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = body_json(response);
    let ranked = body.as_array().unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0]["id"], "near");

    let response = client
        .get("/profiles/ref/nearby?limit=0")
        .header(app_auth())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn nearby_profiles_of_unknown_profile() {
    let (client, _, _) = setup();
    let response = client
        .get("/profiles/ghost/nearby")
        .header(app_auth())
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = body_json(response);
    assert_eq!(body["error"], "The profile does not exist");
}
