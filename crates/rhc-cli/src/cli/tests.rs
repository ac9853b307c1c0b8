use super::commands::{parse_field, parse_header};
use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_get() {
    match parse(&["rhc", "get", "https://example.com/"]) {
        CliCommand::Get {
            url,
            headers,
            insecure,
            head,
        } => {
            assert_eq!(url, "https://example.com/");
            assert!(headers.is_empty());
            assert!(!insecure);
            assert!(!head);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_with_headers_and_flags() {
    match parse(&[
        "rhc",
        "get",
        "https://example.com/",
        "-H",
        "X-Custom: 1",
        "--header",
        "From: someone@example.com",
        "--insecure",
        "--head",
    ]) {
        CliCommand::Get {
            headers,
            insecure,
            head,
            ..
        } => {
            assert_eq!(headers, vec!["X-Custom: 1", "From: someone@example.com"]);
            assert!(insecure);
            assert!(head);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_post_json() {
    match parse(&["rhc", "post", "http://httpbin.org/post", "--json", "{}"]) {
        CliCommand::Post { url, json } => {
            assert_eq!(url, "http://httpbin.org/post");
            assert_eq!(json, "{}");
        }
        _ => panic!("expected Post"),
    }
}

#[test]
fn cli_parse_form_fields() {
    match parse(&["rhc", "form", "http://httpbin.org/post", "name=cays", "password=123456"]) {
        CliCommand::Form { url, fields } => {
            assert_eq!(url, "http://httpbin.org/post");
            assert_eq!(fields, vec!["name=cays", "password=123456"]);
        }
        _ => panic!("expected Form"),
    }
}

#[test]
fn cli_parse_upload() {
    match parse(&[
        "rhc",
        "upload",
        "http://httpbin.org/post",
        "a.txt",
        "--name",
        "attachment",
        "--text",
        "message=hello",
    ]) {
        CliCommand::Upload {
            url,
            file,
            name,
            texts,
        } => {
            assert_eq!(url, "http://httpbin.org/post");
            assert_eq!(file.to_str(), Some("a.txt"));
            assert_eq!(name, "attachment");
            assert_eq!(texts, vec!["message=hello"]);
        }
        _ => panic!("expected Upload"),
    }
}

#[test]
fn cli_parse_redirects() {
    match parse(&["rhc", "redirects", "http://httpbin.org/redirect/3"]) {
        CliCommand::Redirects { url } => assert_eq!(url, "http://httpbin.org/redirect/3"),
        _ => panic!("expected Redirects"),
    }
}

#[test]
fn parse_header_trims_name_and_value() {
    let (name, value) = parse_header("X-Custom:  spaced value ").unwrap();
    assert_eq!(name, "X-Custom");
    assert_eq!(value, "spaced value");
}

#[test]
fn parse_header_rejects_missing_colon() {
    assert!(parse_header("not-a-header").is_err());
    assert!(parse_header(": empty name").is_err());
}

#[test]
fn parse_field_splits_on_first_equals() {
    let (key, value) = parse_field("message=a=b").unwrap();
    assert_eq!(key, "message");
    assert_eq!(value, "a=b");
}

#[test]
fn parse_field_rejects_missing_key() {
    assert!(parse_field("novalue").is_err());
    assert!(parse_field("=x").is_err());
}
