use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::model::farm::{Event, Farm, Owner, Plot};
use rusqlite::params;
use tempfile::TempDir;

use super::configure_routes;
use crate::db::ProfileStore;

fn temp_store() -> (TempDir, ProfileStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = ProfileStore::new(dir.path().join("farms.sqlite"));
    store.init_schema().expect("schema");
    (dir, store)
}

fn farm(name: &str, uri: &str, plots: Vec<Plot>) -> Farm {
    Farm {
        name: name.to_string(),
        surface: 10.0,
        owner: Owner {
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
        },
        document_uri: uri.to_string(),
        plots,
    }
}

fn plot(name: &str, events: Vec<Event>) -> Plot {
    Plot {
        name: name.to_string(),
        surface: 2.5,
        document_uri: String::new(),
        events,
    }
}

fn event(event_type: &str) -> Event {
    Event {
        document_uri: String::new(),
        date: "2024-03-01".to_string(),
        event_type: event_type.to_string(),
        description: String::new(),
    }
}

macro_rules! service {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store.clone()))
                .service(configure_routes()),
        )
        .await
    };
}

#[actix_web::test]
async fn save_assigns_uris_and_list_keeps_order() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    let north = farm(
        "North Field",
        "",
        vec![plot("A", vec![event("Siembra"), event("Cosecha")]), plot("B", vec![])],
    );
    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(&north)
        .to_request();
    let saved: Farm = test::call_and_read_body_json(&app, req).await;
    assert!(saved.document_uri.starts_with('/'));
    assert!(saved.plots.iter().all(|p| p.document_uri.starts_with('/')));

    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(farm("South Field", "/south", vec![]))
        .to_request();
    let _: Farm = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/profile/farms?webId=alice")
        .to_request();
    let farms: Vec<Farm> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(farms.len(), 2);
    assert_eq!(farms[0].name, "North Field");
    assert_eq!(farms[1].name, "South Field");
    assert_eq!(farms[0].plots[0].name, "A");
    assert_eq!(farms[0].plots[1].name, "B");
    assert_eq!(farms[0].plots[0].events[1].event_type, "Cosecha");
    assert!(farms[1].plots.is_empty());
}

#[actix_web::test]
async fn resaving_keeps_position_and_replaces_plots() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    for f in [
        farm("First", "/first", vec![plot("Old", vec![])]),
        farm("Second", "/second", vec![]),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/profile/farms?webId=alice")
            .set_json(&f)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(farm("First renamed", "/first", vec![plot("New", vec![])]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/profile/farms?webId=alice")
        .to_request();
    let farms: Vec<Farm> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(farms[0].name, "First renamed");
    assert_eq!(farms[0].plots.len(), 1);
    assert_eq!(farms[0].plots[0].name, "New");
    assert_eq!(farms[1].name, "Second");
}

#[actix_web::test]
async fn farms_are_scoped_to_their_identity() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(farm("Alice farm", "/abc123", vec![]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/profile/farms?webId=bob")
        .to_request();
    let farms: Vec<Farm> = test::call_and_read_body_json(&app, req).await;
    assert!(farms.is_empty());

    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=bob")
        .set_json(farm("Stolen", "/abc123", vec![]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/profile/farms/abc123?webId=bob")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_by_bare_id_cascades_to_plots_and_events() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(farm("North Field", "/abc123", vec![plot("A", vec![event("Riego")])]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri("/api/profile/farms/abc123?webId=alice")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let conn = store.open().unwrap();
    let plots: i64 = conn
        .query_row("SELECT COUNT(*) FROM plots", params![], |row| row.get(0))
        .unwrap();
    let events: i64 = conn
        .query_row("SELECT COUNT(*) FROM events", params![], |row| row.get(0))
        .unwrap();
    assert_eq!((plots, events), (0, 0));

    let req = test::TestRequest::delete()
        .uri("/api/profile/farms/abc123?webId=alice")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn rejects_empty_identity_and_non_bare_ids() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    let req = test::TestRequest::get()
        .uri("/api/profile/farms?webId=")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/profile/farms").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri("/api/profile/farms/a%20b?webId=alice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_FARM_ID");
}

#[actix_web::test]
async fn delete_removes_only_the_confirmed_farm() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    for (name, uri) in [("AB", "/ab"), ("AB2", "/ab2")] {
        let req = test::TestRequest::post()
            .uri("/api/profile/farms?webId=alice")
            .set_json(farm(name, uri, vec![]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    // URIs that do not reduce to exactly one bare id are refused up front.
    for uri in ["/a/b", "/campo norte", "https://pod/farm"] {
        let req = test::TestRequest::post()
            .uri("/api/profile/farms?webId=alice")
            .set_json(farm("Rejected", uri, vec![]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_DOCUMENT_URI");
    }

    let req = test::TestRequest::delete()
        .uri("/api/profile/farms/ab?webId=alice")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/profile/farms?webId=alice")
        .to_request();
    let farms: Vec<Farm> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = farms.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["AB2"]);
}

#[actix_web::test]
async fn reusing_a_plot_or_event_uri_of_another_record_is_a_conflict() {
    let (_dir, store) = temp_store();
    let app = service!(store);

    let mut field = plot("P1", vec![event("Riego")]);
    field.document_uri = "/p1".to_string();
    field.events[0].document_uri = "/e1".to_string();

    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(farm("One", "/one", vec![field.clone()]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Resaving the owning farm with the same subtree is fine.
    let req = test::TestRequest::post()
        .uri("/api/profile/farms?webId=alice")
        .set_json(farm("One", "/one", vec![field.clone()]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let mut foreign_event = plot("Other", vec![event("Siembra")]);
    foreign_event.events[0].document_uri = "/e1".to_string();
    let mut duplicated = plot("Dup", vec![]);
    duplicated.document_uri = "/dup".to_string();

    for (web_id, candidate) in [
        ("bob", farm("Two", "/two", vec![field.clone()])),
        ("alice", farm("Three", "/three", vec![foreign_event])),
        ("alice", farm("Four", "/four", vec![duplicated.clone(), duplicated])),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/profile/farms?webId={web_id}"))
            .set_json(&candidate)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT, "{}", candidate.name);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "DOCUMENT_URI_CONFLICT");
    }

    // Failed saves leave nothing behind.
    for web_id in ["alice", "bob"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/profile/farms?webId={web_id}"))
            .to_request();
        let farms: Vec<Farm> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = farms.iter().map(|f| f.name.as_str()).collect();
        let expected: Vec<&str> = if web_id == "alice" { vec!["One"] } else { vec![] };
        assert_eq!(names, expected);
    }
}
