/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! `multipart/form-data` encoding of a nested field set plus one file
//!
//! Nested fields are flattened with bracket notation (`a[b][c]`), the same
//! convention HTML forms use. The file always travels as the last part under
//! the field name `file`, with a MIME type sniffed from its contents.

use crate::constants::{BOUNDARY_PREFIX, DISALLOWED_NAME_CHARS, NAME_REPLACEMENT_CHAR};
use crate::model::http::FileAttachment;
use crate::utils::mime::sniff_mime;
use chrono::Utc;
use serde_json::{Number, Value};
use std::collections::HashMap;

const LINE_BREAK: &str = "\r\n";

/// Generates a fresh boundary.
///
/// Unique per call, not cryptographically strong: a random value combined
/// with the current time in microseconds.
#[must_use]
pub fn generate_boundary() -> String {
    let random: u64 = rand::random();
    let micros = Utc::now().timestamp_micros() as u64;
    format!("{BOUNDARY_PREFIX}{random:016x}{micros:016x}")
}

/// `Content-Type` value announcing `boundary`
#[must_use]
pub fn multipart_content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Replaces NUL, double quote, CR and LF with an underscore
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if DISALLOWED_NAME_CHARS.contains(&c) {
                NAME_REPLACEMENT_CHAR
            } else {
                c
            }
        })
        .collect()
}

/// Flattens a nested field structure into `(key, value)` pairs.
///
/// `{"a": {"b": 1, "c": [2, 3]}}` becomes `a[b]=1`, `a[c][0]=2`, `a[c][1]=3`.
/// Pairs come out in traversal order. Empty containers vanish and a scalar
/// root yields nothing, it has no name to be sent under.
///
/// Keys are unique. When two paths produce the same key (`{"a[b]": 1,
/// "a": {"b": 2}}`) the later value replaces the earlier one at its original
/// position.
#[must_use]
pub fn flatten_fields(fields: &Value) -> Vec<(String, String)> {
    let mut flattened: Vec<(String, String)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut stack: Vec<(String, &Value)> = Vec::new();
    push_children(&mut stack, None, fields);

    while let Some((key, value)) = stack.pop() {
        match value {
            Value::Object(_) | Value::Array(_) => push_children(&mut stack, Some(&key), value),
            scalar => {
                let value = display_value(scalar);
                match positions.get(&key) {
                    Some(&index) => flattened[index].1 = value,
                    None => {
                        positions.insert(key.clone(), flattened.len());
                        flattened.push((key, value));
                    }
                }
            }
        }
    }
    flattened
}

/// Pushes the children of `container` in reverse so they pop in order
fn push_children<'a>(stack: &mut Vec<(String, &'a Value)>, parent: Option<&str>, container: &'a Value) {
    let children: Vec<(String, &'a Value)> = match container {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (child_key(parent, key), value))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, value)| (child_key(parent, &index.to_string()), value))
            .collect(),
        _ => return,
    };
    stack.extend(children.into_iter().rev());
}

fn child_key(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}[{key}]"),
        None => key.to_string(),
    }
}

/// Form representation of a scalar: booleans as `1`/empty, null as empty
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Number(number) => display_number(number),
        other => other.to_string(),
    }
}

/// Integers verbatim, floats in shortest form so `1.0` is sent as `1`
fn display_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}

/// Encodes `fields` and `file` as a `multipart/form-data` body
///
/// Field parts come first in flattening order, then the file part, then the
/// closing `--<boundary>--` line followed by an empty line.
#[must_use]
pub fn encode_multipart(fields: Option<&Value>, file: &FileAttachment, boundary: &str) -> Vec<u8> {
    let mut parts: Vec<Vec<u8>> = fields
        .map(flatten_fields)
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            format!(
                "Content-Disposition: form-data; name=\"{}\"{LINE_BREAK}{LINE_BREAK}{}",
                sanitize_name(&key),
                value
            )
            .into_bytes()
        })
        .collect();

    let mut file_part = format!(
        "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"{LINE_BREAK}Content-Type: {}{LINE_BREAK}{LINE_BREAK}",
        sanitize_name(&file.file_name()),
        sniff_mime(file.data())
    )
    .into_bytes();
    file_part.extend_from_slice(file.data());
    parts.push(file_part);

    let mut body = Vec::with_capacity(parts.iter().map(|p| p.len() + boundary.len() + 8).sum());
    for part in parts {
        body.extend_from_slice(format!("--{boundary}{LINE_BREAK}").as_bytes());
        body.extend_from_slice(&part);
        body.extend_from_slice(LINE_BREAK.as_bytes());
    }
    body.extend_from_slice(format!("--{boundary}--{LINE_BREAK}").as_bytes());
    body
}
