use msgpack_core::{Config, Error, Tag, Track, Tracker, Type};

fn tracker() -> Tracker {
    Tracker::reader(&Config::tracking())
}

#[test]
fn array_of_three() {
    let mut t = tracker();
    t.push(Type::Array, 3).unwrap();
    for _ in 0..3 {
        t.element().unwrap();
    }
    t.pop(Type::Array).unwrap();
    assert_eq!(t.close(false), Ok(()));
}

#[test]
fn fourth_element_is_misuse() {
    let mut t = tracker();
    t.push(Type::Array, 3).unwrap();
    for _ in 0..3 {
        t.element().unwrap();
    }
    assert_eq!(t.element(), Err(Error::ApiMisuse));
    assert_eq!(t.error(), Some(Error::ApiMisuse));
}

#[test]
fn early_pop_is_misuse() {
    let mut t = tracker();
    t.push(Type::Array, 3).unwrap();
    t.element().unwrap();
    t.element().unwrap();
    assert_eq!(t.pop(Type::Array), Err(Error::ApiMisuse));
    assert_eq!(t.depth(), 1);
}

#[test]
fn map_needs_four_elements_for_two_pairs() {
    let mut t = tracker();
    t.push(Type::Map, 2).unwrap();
    for _ in 0..4 {
        t.element().unwrap();
    }
    t.pop(Type::Map).unwrap();
    assert_eq!(t.depth(), 0);
}

#[test]
fn string_bytes() {
    let mut t = tracker();
    t.push(Type::Str, 5).unwrap();
    t.bytes(5).unwrap();
    t.pop(Type::Str).unwrap();

    let mut t = tracker();
    t.push(Type::Str, 5).unwrap();
    assert_eq!(t.bytes(6), Err(Error::ApiMisuse));
}

#[test]
fn latched_error_freezes_the_stack() {
    let mut t = tracker();
    t.push(Type::Array, 1).unwrap();
    t.flag(Error::InvalidEncoding);

    assert_eq!(t.push(Type::Map, 1), Err(Error::InvalidEncoding));
    assert_eq!(t.depth(), 1);
    assert_eq!(t.error(), Some(Error::InvalidEncoding));

    assert_eq!(t.element(), Err(Error::InvalidEncoding));
    assert_eq!(t.error(), Some(Error::InvalidEncoding));

    // open compounds are not reported on an errored teardown
    assert_eq!(t.close(false), Err(Error::InvalidEncoding));
}

#[test]
fn map_overflow_is_size_exceeded() {
    let mut track = Track::new();
    assert_eq!(track.push(Type::Map, u64::MAX / 2 + 1), Err(Error::SizeExceeded));
    assert_eq!(track.push(Type::Map, u64::MAX / 2), Ok(()));

    let mut t = tracker();
    assert_eq!(t.push(Type::Map, u64::MAX), Err(Error::SizeExceeded));
    assert_eq!(t.error(), Some(Error::SizeExceeded));
    assert_eq!(t.depth(), 0);
}

#[test]
fn unclosed_compound_on_close() {
    let mut t = tracker();
    t.push(Type::Bin, 2).unwrap();
    assert_eq!(t.check_empty(), Err(Error::ApiMisuse));

    let mut t = tracker();
    t.push(Type::Bin, 2).unwrap();
    assert_eq!(t.close(false), Err(Error::ApiMisuse));

    let mut t = tracker();
    t.push(Type::Bin, 2).unwrap();
    assert_eq!(t.close(true), Ok(()));
}

/// Walks a header sequence the way a writer emits `[1, {"ab": <bin 3>}, []]`.
#[test]
fn nested_document() {
    let mut t = Tracker::writer(&Config::tracking());
    let headers = [Tag::array(3), Tag::uint(1), Tag::map(1), Tag::str(2), Tag::bin(3), Tag::array(0)];

    t.push(headers[0].tag_type(), headers[0].count().unwrap() as u64).unwrap();

    t.element().unwrap();

    t.element().unwrap();
    t.push(Type::Map, headers[2].count().unwrap() as u64).unwrap();

    t.element().unwrap();
    t.push(Type::Str, headers[3].length().unwrap() as u64).unwrap();
    t.bytes(1).unwrap();
    t.bytes(1).unwrap();
    t.pop(Type::Str).unwrap();

    t.element().unwrap();
    t.push(Type::Bin, headers[4].length().unwrap() as u64).unwrap();
    t.bytes(3).unwrap();
    t.pop(Type::Bin).unwrap();

    t.pop(Type::Map).unwrap();

    t.element().unwrap();
    t.push(Type::Array, 0).unwrap();
    t.pop(Type::Array).unwrap();

    t.pop(Type::Array).unwrap();
    t.check_empty().unwrap();
    assert_eq!(t.close(false), Ok(()));
}

#[test]
fn deep_nesting_without_recursion() {
    let config = Config {
        initial_track_capacity: 1,
        ..Config::tracking()
    };
    let mut t = Tracker::reader(&config);
    const DEPTH: usize = 10_000;
    for i in 0..DEPTH {
        if i > 0 {
            t.element().unwrap();
        }
        let count = if i == DEPTH - 1 { 0 } else { 1 };
        t.push(Type::Array, count).unwrap();
    }
    assert_eq!(t.depth(), DEPTH);
    for _ in 0..DEPTH {
        t.pop(Type::Array).unwrap();
    }
    assert_eq!(t.close(false), Ok(()));
}

#[test]
fn reserve_failure_on_init() {
    assert_eq!(
        Track::with_capacity(usize::MAX / 2).map(|track| track.depth()),
        Err(Error::AllocationFailure)
    );
}

#[test]
fn growth_failure_latches_allocation_failure() {
    let config = Config {
        initial_track_capacity: usize::MAX / 2,
        ..Config::tracking()
    };
    let mut t = Tracker::reader(&config);
    assert_eq!(t.push(Type::Array, 1), Err(Error::AllocationFailure));
    assert_eq!(t.error(), Some(Error::AllocationFailure));
    assert_eq!(t.depth(), 0);

    assert_eq!(t.push(Type::Array, 1), Err(Error::AllocationFailure));
    assert_eq!(t.depth(), 0);

    assert_eq!(t.close(false), Err(Error::AllocationFailure));
}

#[test]
fn growth_failure_does_not_assert() {
    let config = Config {
        assert_on_misuse: true,
        initial_track_capacity: usize::MAX / 2,
        ..Config::tracking()
    };
    let mut t = Tracker::writer(&config);
    assert_eq!(t.push(Type::Map, 1), Err(Error::AllocationFailure));
}

#[test]
#[should_panic(expected = "msgpack api misuse")]
fn early_pop_asserts_when_configured() {
    let config = Config {
        assert_on_misuse: true,
        ..Config::tracking()
    };
    let mut t = Tracker::writer(&config);
    t.push(Type::Array, 2).unwrap();
    t.element().unwrap();
    let _ = t.pop(Type::Array);
}

#[test]
#[should_panic(expected = "msgpack api misuse: too_big")]
fn map_overflow_asserts_when_configured() {
    let config = Config {
        assert_on_misuse: true,
        ..Config::tracking()
    };
    let mut t = Tracker::reader(&config);
    let _ = t.push(Type::Map, u64::MAX);
}

#[test]
fn bare_track_does_not_latch() {
    let mut track = Track::new();
    assert_eq!(track.pop(Type::Array), Err(Error::ApiMisuse));
    track.push(Type::Array, 1).unwrap();
    track.element(true).unwrap();
    track.pop(Type::Array).unwrap();
    assert_eq!(track.depth(), 0);
}
