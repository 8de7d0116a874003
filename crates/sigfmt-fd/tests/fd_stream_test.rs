//! End-to-end descriptor tests: format through a real fd and read back.

use std::fs::{self, File};
use std::os::fd::AsRawFd;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("sigfmt-fd-{}-{}", std::process::id(), name));
    path
}

#[test]
fn test_formatted_stream_reaches_the_descriptor() {
    let path = temp_path("stream");
    let file = File::create(&path).expect("create temp file");

    let mut storage = [0u8; 64];
    let mut wb = sigfmt_fd::fd_buf(file.as_raw_fd(), &mut storage);
    wb.puts("charge ");
    wb.printf("u", 97u8);
    wb.putc(b'.');
    wb.printf("0.2u", 5u8);
    wb.puts("%\n");
    assert_eq!(wb.flush(), 0);
    drop(wb);
    drop(file);

    let content = fs::read_to_string(&path).expect("read back");
    assert_eq!(content, "charge 97.05%\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn test_oversized_write_bypasses_but_keeps_order() {
    let path = temp_path("bypass");
    let file = File::create(&path).expect("create temp file");

    let big = [b'x'; 100];
    let mut storage = [0u8; 16];
    let mut wb = sigfmt_fd::fd_buf(file.as_raw_fd(), &mut storage);
    wb.puts("head:");
    assert_eq!(wb.write(&big), 100);
    assert_eq!(wb.flush(), 0);
    drop(wb);
    drop(file);

    let content = fs::read(&path).expect("read back");
    assert_eq!(&content[..5], b"head:");
    assert_eq!(&content[5..], &big[..]);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_coalesced_writes_stay_buffered_until_flush() {
    let path = temp_path("coalesce");
    let file = File::create(&path).expect("create temp file");

    let mut storage = [0u8; 64];
    let mut wb = sigfmt_fd::fd_buf(file.as_raw_fd(), &mut storage);
    wb.printf("#x", 0xABu32);
    wb.printf("-4d", 7i8);
    assert_eq!(fs::read(&path).expect("read back").len(), 0);
    assert_eq!(wb.flush(), 0);
    drop(wb);
    drop(file);

    let content = fs::read_to_string(&path).expect("read back");
    assert_eq!(content, "0xab7   ");
    let _ = fs::remove_file(&path);
}
