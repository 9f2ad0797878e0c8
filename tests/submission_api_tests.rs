// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission endpoint tests (POST /api/{activity}).

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_json, get, post_json};

#[tokio::test]
async fn test_number_rule_guess_round_trip() {
    let (app, _db) = common::create_test_app();

    let payload = json!({
        "guessID": "s1",
        "guessList": [],
        "finalGuess": "A",
        "actualAnswer": "A",
        "isCorrect": true
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/numberRuleGuessApi", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Answers Submitted" })
    );

    let response = app
        .oneshot(get("/api/numberRuleGuessApi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let records = body_json(response).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record["guessID"], "s1");
    assert_eq!(record["guessList"], json!([]));
    assert_eq!(record["finalGuess"], "A");
    assert_eq!(record["actualAnswer"], "A");
    assert_eq!(record["isCorrect"], true);
    assert!(record["_id"].is_string());
    assert!(record["createdAt"].is_string());
}

#[tokio::test]
async fn test_dag_diagram_round_trip() {
    let (app, _db) = common::create_test_app();

    let flow = json!({
        "nodes": [{ "id": "1", "data": { "label": "Flu shot" } }],
        "edges": []
    })
    .to_string();
    let payload = json!({
        "flow": flow,
        "description": "vaccination lowers hospitalization",
        "groupId": "lab-7",
        "userName": "John Doe",
        "userId": "456"
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/fluDagApi", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({ "message": "DAG Submitted" }));

    let records = body_json(
        app.oneshot(get("/api/fluDagApi?groupId=lab-7"))
            .await
            .unwrap(),
    )
    .await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["flow"], flow);
    assert_eq!(records[0]["description"], "vaccination lowers hospitalization");
    assert_eq!(records[0]["userId"], "456");
}

#[tokio::test]
async fn test_sticky_note_scores_round_trip() {
    let (app, _db) = common::create_test_app();

    let scores = json!([{ "note-1": 3, "note-2": -1 }]);
    for (user, session) in [("u1", "s1"), ("u2", "s1"), ("u3", "s2")] {
        let payload = json!({ "userID": user, "sessionID": session, "noteScores": scores });
        let response = app
            .clone()
            .oneshot(post_json("/api/stickyNoteApi", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let records = body_json(
        app.oneshot(get("/api/stickyNoteApi?sessionID=s1"))
            .await
            .unwrap(),
    )
    .await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["userID"], "u1");
    assert_eq!(records[1]["userID"], "u2");
    assert_eq!(records[0]["noteScores"], scores);
}

#[tokio::test]
async fn test_nmda_session_gets_top_level_timestamp() {
    let (app, _db) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/nmda-sessions", &json!({ "sessionId": "n1" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/nmda-sessions",
            &json!({ "sessionId": "n2", "timestamp": "2025-05-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let records = body_json(app.oneshot(get("/api/nmda-sessions")).await.unwrap()).await;
    assert!(records[0]["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(records[1]["timestamp"], "2025-05-01T00:00:00.000Z");
}

#[tokio::test]
async fn test_nested_guesses_are_stored() {
    let (app, _db) = common::create_test_app();

    let payload = json!({
        "guessID": "g2",
        "sessionID": "class-a",
        "guessList": [
            { "guessNumber": "1", "guessValue1": 2, "guessValue2": 4, "guessValue3": 6,
              "matchesRule": "TRUE", "guessHypothesis": "even numbers" },
            { "guessNumber": 2, "guessValue1": 1, "guessValue2": 2, "guessValue3": 3,
              "matchesRule": true, "guessHypothesis": "ascending" }
        ],
        "finalGuess": "ascending",
        "actualAnswer": "ascending",
        "isCorrect": true
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/numberRuleGuessApi", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let records = body_json(app.oneshot(get("/api/numberRuleGuessApi?guessID=g2")).await.unwrap()).await;
    let guesses = records[0]["guessList"].as_array().unwrap();
    assert_eq!(guesses.len(), 2);
    assert_eq!(guesses[0]["guessNumber"], 1);
    // "TRUE" is not a recognised boolean spelling, so the default applies
    assert_eq!(guesses[0]["matchesRule"], false);
    assert_eq!(guesses[1]["matchesRule"], true);
    assert_eq!(guesses[1]["guessHypothesis"], "ascending");
}

#[tokio::test]
async fn test_missing_fields_are_stored_as_defaults() {
    let (app, _db) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/saveFlow", &json!({ "nodes": [{ "label": "Coin flip" }] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Flowchart saved successfully." })
    );

    let records = body_json(app.oneshot(get("/api/saveFlow")).await.unwrap()).await;
    let record = &records[0];
    assert_eq!(record["submissionID"], "placeholder-submission");
    assert_eq!(record["sessionID"], "placeholder-session");
    assert_eq!(
        record["nodes"],
        json!([{ "label": "Coin flip", "position": { "x": null, "y": null } }])
    );
}

#[tokio::test]
async fn test_type_mismatches_are_coerced_not_rejected() {
    let (app, _db) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/questions",
            &json!({
                "sessionId": 1001,
                "userId": "u1",
                "questionText": "Why randomize?",
                "selectedSection": "3",
                "unknownField": "dropped"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let records = body_json(app.oneshot(get("/api/questions")).await.unwrap()).await;
    let record = records[0].as_object().unwrap();
    assert_eq!(record["sessionId"], "1001");
    assert_eq!(record["selectedSection"], 3);
    assert_eq!(record["sessionType"], "group");
    assert!(!record.contains_key("unknownField"));
}

#[tokio::test]
async fn test_identical_posts_create_distinct_records() {
    let (app, db) = common::create_test_app();
    let payload = json!({ "sessionID": "s9", "userInputs": ["a", "b"] });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/api/rigorFilesApi", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(db.count("rigor_files"), 2);

    let records = body_json(app.oneshot(get("/api/rigorFilesApi?sessionID=s9")).await.unwrap()).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0]["_id"], records[1]["_id"]);
    assert_eq!(records[0]["userInputs"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_client_cannot_set_server_fields() {
    let (app, _db) = common::create_test_app();

    app.clone()
        .oneshot(post_json(
            "/api/garden",
            &json!({ "_id": "forged", "createdAt": "1999-01-01T00:00:00Z", "sessionID": "s1" }),
        ))
        .await
        .unwrap();

    let records = body_json(app.oneshot(get("/api/garden")).await.unwrap()).await;
    assert_ne!(records[0]["_id"], "forged");
    assert_ne!(records[0]["createdAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    let app = common::create_offline_app();

    let response = app
        .oneshot(post_json("/api/garden", &json!({ "sessionID": "s1" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "database_error" }));
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let (app, db) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/garden", &json!([{ "sessionID": "s1" }])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/garden")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "bad_request");

    assert_eq!(db.count("gardens"), 0);
}

#[tokio::test]
async fn test_unknown_activity_is_not_found() {
    let (app, _db) = common::create_test_app();

    let response = app
        .oneshot(post_json("/api/notAnActivity", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "not_found");
}
