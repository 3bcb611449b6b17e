//! Tests for query-string to qualifier-fragment translation.

use repostats::{SearchFilter, search_fragment};

#[test]
fn renders_each_key_once_in_insertion_order() {
    let filter = SearchFilter::parse("lang=go&min_stars=10").unwrap();
    assert_eq!(filter.fragment(), "lang:go,min_stars:10");
}

#[test]
fn single_pair_has_no_trailing_delimiter() {
    let filter = SearchFilter::parse("language=rust").unwrap();
    assert_eq!(filter.fragment(), "language:rust");
}

#[test]
fn duplicate_keys_keep_first_value() {
    let filter = SearchFilter::parse("stars=10&stars=20&lang=go").unwrap();
    assert_eq!(filter.fragment(), "stars:10,lang:go");
}

#[test]
fn percent_escapes_decode_in_keys_and_values() {
    let filter = SearchFilter::parse("topic=web%20server&q=a%2Bb").unwrap();
    assert_eq!(filter.fragment(), "topic:web server,q:a+b");
}

#[test]
fn plus_decodes_to_space() {
    let filter = SearchFilter::parse("topic=web+server").unwrap();
    assert_eq!(filter.fragment(), "topic:web server");
}

#[test]
fn bare_key_keeps_empty_value() {
    let filter = SearchFilter::parse("archived").unwrap();
    assert_eq!(filter.fragment(), "archived:");
}

#[test]
fn empty_query_renders_empty_fragment() {
    let filter = SearchFilter::parse("").unwrap();
    assert!(filter.is_empty());
    assert_eq!(filter.fragment(), "");
}

#[test]
fn dangling_ampersands_are_ignored() {
    let filter = SearchFilter::parse("&lang=go&&min_stars=10&").unwrap();
    assert_eq!(filter.len(), 2);
    assert_eq!(filter.fragment(), "lang:go,min_stars:10");
}

#[test]
fn invalid_percent_escape_is_an_error() {
    assert!(SearchFilter::parse("%ZZ").is_err());
    assert!(SearchFilter::parse("a=%2").is_err());
    assert!(SearchFilter::parse("a=%G1&b=c").is_err());
}

#[test]
fn lenient_wrapper_degrades_to_empty_fragment() {
    assert_eq!(search_fragment("%ZZ"), "");
    assert_eq!(search_fragment("lang=go&min_stars=10"), "lang:go,min_stars:10");
}

#[test]
fn delimiters_in_values_pass_through_verbatim() {
    let filter = SearchFilter::parse("created=%3C2024-01-01&topics=a%2Cb").unwrap();
    assert_eq!(filter.fragment(), "created:<2024-01-01,topics:a,b");
}
