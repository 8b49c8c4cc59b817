use std::io::Read;

use flate2::read::GzDecoder;

use ember::http::encoding::Encoding;
use ember::http::response::{Response, ResponseBuilder, StatusCode};
use ember::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("content-type", "text/plain")
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
    assert_eq!(response.headers.get("content-type").unwrap(), "text/plain");
}

#[test]
fn test_builder_does_not_set_content_length() {
    // content-length belongs to finalize, after any encoding transform.
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"test".to_vec())
        .build();

    assert!(response.headers.get("content-length").is_none());
}

#[test]
fn test_finalize_without_encoding_sets_content_length() {
    let mut response = ResponseBuilder::new(StatusCode::Ok)
        .header("content-type", "text/plain")
        .body(b"abc".to_vec())
        .build();
    response.finalize(None).unwrap();

    assert_eq!(response.headers.get("content-length").unwrap(), "3");
    assert!(response.headers.get("content-encoding").is_none());
    assert_eq!(response.body, b"abc".to_vec());
}

#[test]
fn test_finalize_empty_body_sets_zero_content_length() {
    let mut response = Response::ok_empty();
    response.finalize(None).unwrap();

    assert_eq!(response.headers.get("content-length").unwrap(), "0");
    assert!(response.body.is_empty());
}

#[test]
fn test_finalize_gzip_round_trips() {
    let plain = b"abcabcabcabcabcabcabcabcabcabc".to_vec();
    let mut response = ResponseBuilder::new(StatusCode::Ok)
        .header("content-type", "text/plain")
        .body(plain.clone())
        .build();
    response.finalize(Some(Encoding::Gzip)).unwrap();

    assert_eq!(response.headers.get("content-encoding").unwrap(), "gzip");
    assert_ne!(response.body, plain);

    let mut decoder = GzDecoder::new(&response.body[..]);
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded).unwrap();
    assert_eq!(decoded, plain);
}

#[test]
fn test_finalize_content_length_reflects_encoded_body() {
    let plain = vec![b'x'; 1000];
    let mut response = ResponseBuilder::new(StatusCode::Ok)
        .body(plain.clone())
        .build();
    response.finalize(Some(Encoding::Gzip)).unwrap();

    let content_length: usize = response
        .headers
        .get("content-length")
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(content_length, response.body.len());
    assert_ne!(content_length, plain.len());
}

#[test]
fn test_not_found_helper() {
    let mut response = Response::not_found();
    response.finalize(None).unwrap();

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
    assert!(response.headers.get("content-type").is_none());
}

#[test]
fn test_serialize_status_line_and_framing() {
    let mut response = ResponseBuilder::new(StatusCode::Ok)
        .header("content-type", "text/plain")
        .body(b"hi".to_vec())
        .build();
    response.finalize(None).unwrap();

    let wire = serialize_response(&response);
    let expected =
        b"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ncontent-length: 2\r\n\r\nhi";
    assert_eq!(wire, expected.to_vec());
}

#[test]
fn test_serialize_empty_body_ends_with_blank_line() {
    let mut response = Response::ok_empty();
    response.finalize(None).unwrap();

    let wire = serialize_response(&response);
    assert_eq!(wire, b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n".to_vec());
}

#[test]
fn test_serialize_header_order_is_insertion_order() {
    let mut response = ResponseBuilder::new(StatusCode::Created)
        .header("b-header", "2")
        .header("a-header", "1")
        .build();
    response.finalize(None).unwrap();

    let wire = String::from_utf8(serialize_response(&response)).unwrap();
    let b_at = wire.find("b-header").unwrap();
    let a_at = wire.find("a-header").unwrap();
    assert!(b_at < a_at);
    assert!(wire.starts_with("HTTP/1.1 201 Created\r\n"));
}
