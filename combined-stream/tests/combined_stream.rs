//! Integration tests for CombinedStream
//!
//! These tests cover:
//! - Length of combined streams (including no segments)
//! - Reads stitched across segment boundaries, with any chunking
//! - Seeking to every position through every origin
//! - Failed seeks before the start leaving the position untouched
//! - std::io and embedded_io interop

#![cfg(feature = "std")]

use std::io::Cursor;

use combined_stream::{
    CombinedStream, IoSegment, SEEK_BEFORE_BEGIN_MESSAGE, SeekFrom, StreamError,
};
use embedded_io_adapters::std::FromStd;

type MemSegment = IoSegment<FromStd<Cursor<Vec<u8>>>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mem_segment(bytes: &[u8]) -> MemSegment {
    IoSegment::from_std(Cursor::new(bytes.to_vec()))
}

fn combined(parts: &[&[u8]]) -> anyhow::Result<CombinedStream<MemSegment>> {
    init_logger();
    Ok(CombinedStream::new(parts.iter().map(|p| mem_segment(p)).collect())?)
}

/// Uneven segments, including empty ones, holding 0..=19
fn uneven_parts() -> Vec<Vec<u8>> {
    vec![
        vec![0, 1, 2],
        vec![],
        vec![3],
        vec![4, 5, 6, 7, 8, 9, 10],
        vec![],
        vec![],
        vec![11, 12],
        vec![13, 14, 15, 16, 17, 18, 19],
    ]
}

fn uneven() -> anyhow::Result<CombinedStream<MemSegment>> {
    let parts = uneven_parts();
    let parts: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
    combined(&parts)
}

#[test]
fn length_is_sum_of_underlying_lengths() -> anyhow::Result<()> {
    let stream = combined(&[&[0x1], &[0x1, 0x2], &[0x1, 0x2, 0x3]])?;
    assert_eq!(stream.length(), 6);
    assert_eq!(stream.position(), 0);
    Ok(())
}

#[test]
fn no_segments_is_a_zero_length_stream() -> anyhow::Result<()> {
    let mut stream = combined(&[])?;
    let mut buf = [0u8; 8];

    assert_eq!(stream.length(), 0);
    assert_eq!(stream.read(&mut buf)?, 0);
    assert_eq!(stream.seek(SeekFrom::End(0))?, 0);
    Ok(())
}

#[test]
fn read_whole_stream() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1], &[0x2], &[0x3]])?;
    let mut buf = [0u8; 3];

    assert_eq!(stream.read(&mut buf)?, 3);
    assert_eq!(buf, [0x1, 0x2, 0x3]);
    Ok(())
}

#[test]
fn chunked_reads_reproduce_concatenation() -> anyhow::Result<()> {
    let expected: Vec<u8> = uneven_parts().concat();

    for chunk in 1..=expected.len() + 1 {
        let mut stream = uneven()?;
        let mut out = Vec::new();
        let mut buf = vec![0u8; chunk];

        loop {
            let n = stream.read(&mut buf)?;
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }

        assert_eq!(out, expected, "chunk size {}", chunk);
        assert_eq!(stream.position(), stream.length());
    }
    Ok(())
}

#[test]
fn reads_from_every_position() -> anyhow::Result<()> {
    let expected: Vec<u8> = uneven_parts().concat();
    let mut stream = uneven()?;

    for start in 0..=expected.len() {
        for len in 0..=expected.len() - start {
            let mut buf = vec![0u8; len];
            stream.seek(SeekFrom::Start(start as u64))?;

            assert_eq!(stream.read(&mut buf)?, len);
            assert_eq!(buf, &expected[start..start + len]);
            assert_eq!(stream.position(), (start + len) as u64);
        }
    }
    Ok(())
}

#[test]
fn read_at_end_returns_zero() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1], &[0x2]])?;
    let mut buf = [0u8; 4];

    assert_eq!(stream.read(&mut buf)?, 2);
    assert_eq!(stream.position(), stream.length());
    assert_eq!(stream.read(&mut buf)?, 0);
    assert_eq!(stream.position(), 2);
    Ok(())
}

#[test]
fn can_seek_to_end() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1], &[0x2], &[0x3]])?;

    assert_eq!(stream.seek(SeekFrom::End(0))?, 3);
    assert_eq!(stream.position(), 3);
    Ok(())
}

#[test]
fn can_seek_to_all_positions_across_multiple_streams() -> anyhow::Result<()> {
    let cases = [
        (SeekFrom::Start(0), 0),
        (SeekFrom::Start(1), 1),
        (SeekFrom::Start(2), 2),
        (SeekFrom::Start(3), 3),
        (SeekFrom::Start(4), 4),
        (SeekFrom::Start(5), 5),
        (SeekFrom::End(0), 5),
        (SeekFrom::End(-1), 4),
        (SeekFrom::End(-5), 0),
    ];

    for (target, expected) in cases {
        let byte: &[u8] = &[0x0];
        let mut stream = combined(&[byte; 5])?;
        assert_eq!(stream.length(), 5);

        stream.seek(target)?;
        assert_eq!(stream.position(), expected, "{:?}", target);
    }
    Ok(())
}

#[test]
fn every_origin_reaches_every_position() -> anyhow::Result<()> {
    let mut stream = uneven()?;
    let length = stream.length();

    for p in 0..=length {
        assert_eq!(stream.seek(SeekFrom::Start(p))?, p);
        assert_eq!(stream.seek(SeekFrom::End(p as i64 - length as i64))?, p);

        stream.seek(SeekFrom::Start(length / 2))?;
        let relative = p as i64 - (length / 2) as i64;
        assert_eq!(stream.seek(SeekFrom::Current(relative))?, p);
        assert_eq!(stream.position(), p);
    }
    Ok(())
}

#[test]
fn cant_seek_before_begin_of_first_underlying_stream() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1], &[0x2], &[0x3]])?;

    let assert_rejected = |result: Result<u64, StreamError<std::io::Error>>| {
        let error = result.expect_err("seek before the start must fail");
        assert!(matches!(error, StreamError::SeekBeforeBegin));
        assert_eq!(error.to_string(), SEEK_BEFORE_BEGIN_MESSAGE);
        assert_eq!(
            error.to_string(),
            "An attempt was made to move the position before the beginning of the stream."
        );
    };

    // Start takes a u64, so step back from 0 instead
    assert_rejected(stream.seek(SeekFrom::Current(-1)));
    assert_eq!(stream.position(), 0);

    // seek from Current
    stream.seek(SeekFrom::Start(1))?;
    assert_rejected(stream.seek(SeekFrom::Current(-2)));
    assert_eq!(stream.position(), 1);

    // seek from End
    assert_rejected(stream.seek(SeekFrom::End(-4)));
    assert_eq!(stream.position(), 1);
    Ok(())
}

#[test]
fn seek_past_end_is_allowed() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1], &[0x2]])?;
    let mut buf = [0u8; 2];

    assert_eq!(stream.seek(SeekFrom::End(10))?, 12);
    assert_eq!(stream.read(&mut buf)?, 0);
    assert_eq!(stream.remaining(), 0);

    assert_eq!(stream.seek(SeekFrom::Current(-11))?, 1);
    assert_eq!(stream.read(&mut buf)?, 1);
    assert_eq!(buf[0], 0x2);
    Ok(())
}

#[test]
fn seek_overflow_keeps_position() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1]])?;

    stream.seek(SeekFrom::Start(u64::MAX))?;
    let result = stream.seek(SeekFrom::Current(1));

    assert!(matches!(result, Err(StreamError::PositionOverflow)));
    assert_eq!(stream.position(), u64::MAX);
    Ok(())
}

#[test]
fn segments_can_be_reused_after_the_stream() -> anyhow::Result<()> {
    let mut stream = combined(&[&[0x1, 0x2], &[0x3]])?;
    let mut buf = [0u8; 3];
    assert_eq!(stream.read(&mut buf)?, 3);

    let segments = stream.into_segments();
    assert_eq!(segments.len(), 2);

    // A fresh stream over the same segments starts from the beginning again
    let mut again = CombinedStream::new(segments)?;
    let mut buf = [0u8; 3];
    assert_eq!(again.read(&mut buf)?, 3);
    assert_eq!(buf, [0x1, 0x2, 0x3]);
    Ok(())
}

#[test]
fn locate_reports_segment_and_offset() -> anyhow::Result<()> {
    let stream = uneven()?;

    let location = stream.locate(3).expect("position 3 is inside the stream");
    assert_eq!((location.index, location.offset), (2, 0));

    let location = stream.locate(12).expect("position 12 is inside the stream");
    assert_eq!((location.index, location.offset), (6, 1));

    assert!(stream.locate(20).is_none());
    assert_eq!(stream.segment_map().segment_start(7), Some(13));
    Ok(())
}

#[test]
fn std_io_consumers_can_use_the_stream() -> anyhow::Result<()> {
    use std::io::{Read, Seek};

    let stream = uneven()?;
    let mut reader = std::io::BufReader::with_capacity(4, stream);

    reader.seek(std::io::SeekFrom::Start(5))?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    assert_eq!(bytes, (5..20).collect::<Vec<u8>>());
    Ok(())
}
