#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use bytejson::{JsonParser, ParserOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // depth selector

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly defers to libFuzzer; one run in ten it writes a fresh, valid
/// document padded with JSON whitespace so the deep paths stay reachable.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || !(size < HEADER || seed.is_multiple_of(10)) {
        return fuzzer_mutate(data, size, max_size);
    }

    data[0] = with_rng(|rng| rng.next_u32() as u8);
    let limit = max_size - HEADER;
    let mut written = HEADER;
    written += append_whitespace(&mut data[written..], limit);
    written += append_value(&mut data[written..], size.max(16), max_size - written);
    written += append_whitespace(&mut data[written..], max_size - written);
    written
}

/// Append 1‒8 whitespace bytes to `buf`, never exceeding `limit`.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let n = rng.random_range(1..=limit.min(8));
        for slot in &mut buf[..n] {
            *slot = WS_TABLE[rng.random_range(0..WS_TABLE.len())][0];
        }
        n
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// serde_json's own recursion limit.
const SERDE_JSON_DEPTH: usize = 128;

fn parser(data: &[u8]) {
    let Some((&selector, doc)) = data.split_first() else {
        return;
    };
    let max_depth = match selector % 4 {
        0 => usize::from(selector),
        _ => bytejson::DEFAULT_MAX_DEPTH,
    };
    let parser = JsonParser::new(ParserOptions { max_depth });

    let parsed = parser.parse(doc);

    if max_depth >= SERDE_JSON_DEPTH && serde_json::from_slice::<Value>(doc).is_ok() {
        assert!(parsed.is_ok(), "serde_json accepted a document we rejected: {parsed:?}");
    }

    let Ok(value) = parsed else {
        return;
    };

    let canonical = bytejson::to_bytes(&value);
    let reparsed = parser
        .parse(&canonical)
        .expect("canonical output must parse with the same options");
    assert_eq!(reparsed, value);
    assert_eq!(bytejson::to_bytes(&reparsed), canonical);
}

fuzz_target!(|data: &[u8]| parser(data));
