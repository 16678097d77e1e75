use aoc_common::client::{AocClient, Verdict};
use aoc_common::error::ClientError;
use httpmock::prelude::*;

#[test]
fn fetches_input_with_session_cookie() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/2022/day/22/input")
            .header("cookie", "session=abc123");
        then.status(200).body("        ...#\n\n10R5L5R10L4R5L5\n");
    });

    let client = AocClient::new(&server.base_url(), Some("abc123")).unwrap();
    let input = client.fetch_input(2022, 22).unwrap();

    mock.assert();
    assert!(input.ends_with("10R5L5R10L4R5L5\n"));
}

#[test]
fn submits_answer_as_form() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/2021/day/16/answer")
            .header("cookie", "session=abc123")
            .x_www_form_urlencoded_tuple("level", "2")
            .x_www_form_urlencoded_tuple("answer", "54");
        then.status(200).body("<article><p>That's the right answer!  You are one gold star closer.</p></article>");
    });

    let client = AocClient::new(&server.base_url(), Some("abc123")).unwrap();
    let verdict = client.submit(2021, 16, 2, "54").unwrap();

    mock.assert();
    assert_eq!(verdict, Verdict::Correct);
}

#[test]
fn wrong_answer_hint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/2022/day/1/answer");
        then.status(200).body("<p>That's not the right answer; your answer is too high.</p>");
    });

    let client = AocClient::new(&server.base_url(), Some("abc123")).unwrap();
    let verdict = client.submit(2022, 1, 1, "999999").unwrap();
    assert_eq!(verdict, Verdict::Incorrect {hint: Some("too high".to_owned())});
}

#[test]
fn server_errors_surface() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/2022/day/26/input");
        then.status(404);
    });

    let client = AocClient::new(&server.base_url(), Some("abc123")).unwrap();
    let err = client.fetch_input(2022, 26).unwrap_err();
    assert!(matches!(err, ClientError::Status {status: 404, ..}));
}
