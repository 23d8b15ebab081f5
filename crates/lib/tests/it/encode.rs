//! Entity-codec traversal behavior.

use nestkit::{
    encode::{EntityCodec, html_decode, html_encode},
    map,
};

struct TestCodec;

impl EntityCodec for TestCodec {
    fn encode(&self, raw: &str) -> String {
        raw.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    fn decode(&self, encoded: &str) -> String {
        encoded
            .replace("&quot;", "\"")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }
}

#[test]
fn test_values_only_leaves_keys_alone() {
    let data = map! {
        "a<>" => "b<>",
        "c" => map! { "<>" => "<>" },
        "n" => 42,
    };
    assert_eq!(
        html_encode(&data, &TestCodec, true),
        map! {
            "a<>" => "b&lt;&gt;",
            "c" => map! { "<>" => "&lt;&gt;" },
            "n" => 42,
        }
    );
}

#[test]
fn test_keys_encoded_when_requested() {
    let data = map! { "a<>" => "b<>", 0 => "<x>" };
    assert_eq!(
        html_encode(&data, &TestCodec, false),
        map! { "a&lt;&gt;" => "b&lt;&gt;", 0 => "&lt;x&gt;" }
    );
}

#[test]
fn test_decode_inverts_encode() {
    let data = map! { "k" => "say \"hi\" & <wave>" };
    let encoded = html_encode(&data, &TestCodec, true);
    assert_eq!(html_decode(&encoded, &TestCodec, true), data);
}
