use chore_fs::{
    AtomicWriteOptions, BoundaryExpectations, Error, LineBuffer, LineRange, StripOptions, StripPlan,
    atomic_read, commit_strip, plan_strip, strip_lines,
};
use std::path::Path;
use tempfile::tempdir;

fn write_numbered(path: &Path, n: usize) {
    let text: String = (1..=n).map(|i| format!("line {i}\n")).collect();
    std::fs::write(path, text).unwrap();
}

fn range(start: usize, end: usize) -> LineRange { LineRange::new(start, end).unwrap() }

#[test]
fn test_strip_lines_basic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("source.tsx");
    write_numbered(&path, 6);

    let report = strip_lines(&path, range(2, 4), &StripOptions::new()).unwrap();

    assert!(report.written);
    assert_eq!(report.plan.start_line(), "line 2");
    assert_eq!(report.plan.end_line(), "line 4");
    assert_eq!(atomic_read(&path).unwrap(), b"line 1\nline 5\nline 6\n");
}

#[test]
fn test_strip_lines_preserves_terminators() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    std::fs::write(&path, "keep\r\ndrop\r\ndrop\nkeep\r\ntail").unwrap();

    strip_lines(&path, range(2, 3), &StripOptions::new()).unwrap();

    assert_eq!(atomic_read(&path).unwrap(), b"keep\r\nkeep\r\ntail");
}

#[test]
fn test_strip_lines_boundaries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("b.txt");

    write_numbered(&path, 3);
    strip_lines(&path, range(2, 2), &StripOptions::new()).unwrap();
    assert_eq!(atomic_read(&path).unwrap(), b"line 1\nline 3\n");

    write_numbered(&path, 3);
    strip_lines(&path, range(1, 2), &StripOptions::new()).unwrap();
    assert_eq!(atomic_read(&path).unwrap(), b"line 3\n");

    write_numbered(&path, 3);
    strip_lines(&path, range(2, 3), &StripOptions::new()).unwrap();
    assert_eq!(atomic_read(&path).unwrap(), b"line 1\n");
}

#[test]
fn test_strip_twice_matches_single_strip() {
    let dir = tempdir().unwrap();
    let once = dir.path().join("once.txt");
    let twice = dir.path().join("twice.txt");
    write_numbered(&once, 10);
    write_numbered(&twice, 10);

    strip_lines(&once, range(3, 7), &StripOptions::new()).unwrap();

    strip_lines(&twice, range(3, 5), &StripOptions::new()).unwrap();
    strip_lines(&twice, range(3, 4), &StripOptions::new()).unwrap();

    assert_eq!(atomic_read(&once).unwrap(), atomic_read(&twice).unwrap());

    // Replaying the original numbers on the shorter file must fail untouched.
    let before = atomic_read(&once).unwrap();
    let err = strip_lines(&once, range(3, 7), &StripOptions::new()).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { end: 7, total: 5 }));
    assert_eq!(atomic_read(&once).unwrap(), before);
}

#[test]
fn test_out_of_range_leaves_file_unmodified() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.txt");
    write_numbered(&path, 4);
    let before = atomic_read(&path).unwrap();

    let err = strip_lines(&path, range(2, 9), &StripOptions::new()).unwrap_err();

    assert!(matches!(err, Error::OutOfRange { end: 9, total: 4 }));
    assert_eq!(atomic_read(&path).unwrap(), before);
}

#[test]
fn test_empty_file_is_out_of_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let err = strip_lines(&path, range(1, 1), &StripOptions::new()).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { end: 1, total: 0 }));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = strip_lines(dir.path().join("absent.txt"), range(1, 1), &StripOptions::new()).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.dat");
    std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

    let err = strip_lines(&path, range(1, 1), &StripOptions::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidUtf8 { .. }));
}

#[test]
fn test_boundary_mismatch_aborts_before_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("component.tsx");
    std::fs::write(
        &path,
        "const a = 1;\n    const ncrNos = generatedNCRNumber || \"Preview-Draft\";\n    render();\n};\nexport default A;\n",
    )
    .unwrap();
    let before = atomic_read(&path).unwrap();

    let expect = BoundaryExpectations::new()
        .start(r"const ncrNos")
        .unwrap()
        .end(r"^\}\)$")
        .unwrap();
    let err = strip_lines(&path, range(2, 4), &StripOptions::new().expect(expect)).unwrap_err();
    assert!(matches!(err, Error::BoundaryMismatch { line: 4, .. }));
    assert_eq!(atomic_read(&path).unwrap(), before);

    let expect = BoundaryExpectations::new()
        .start(r"const ncrNos")
        .unwrap()
        .end(r"^\};$")
        .unwrap();
    strip_lines(&path, range(2, 4), &StripOptions::new().expect(expect)).unwrap();
    assert_eq!(atomic_read(&path).unwrap(), b"const a = 1;\nexport default A;\n");
}

#[test]
fn test_dry_run_does_not_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dry.txt");
    write_numbered(&path, 5);
    let before = atomic_read(&path).unwrap();

    let report = strip_lines(&path, range(1, 5), &StripOptions::new().dry_run(true)).unwrap();

    assert!(!report.written);
    assert_eq!(report.plan.removed(), 5);
    assert_eq!(report.plan.remaining(), 0);
    assert_eq!(atomic_read(&path).unwrap(), before);
}

#[test]
fn test_plan_apply_step_by_step() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("steps.txt");
    write_numbered(&path, 4);

    let buffer = LineBuffer::read(&path).unwrap();
    let plan = StripPlan::new(&buffer, range(4, 4)).unwrap();
    plan.apply(&buffer, &path, AtomicWriteOptions::new().sync(true)).unwrap();

    assert_eq!(atomic_read(&path).unwrap(), b"line 1\nline 2\nline 3\n");
}

#[test]
fn test_plan_then_commit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two_step.txt");
    write_numbered(&path, 5);

    let (buffer, plan) = plan_strip(&path, range(2, 3)).unwrap();
    assert_eq!(plan.start_line(), "line 2");
    assert_eq!(plan.end_line(), "line 3");
    assert_eq!(atomic_read(&path).unwrap(), b"line 1\nline 2\nline 3\nline 4\nline 5\n");

    let report = commit_strip(&path, &buffer, plan, &StripOptions::new()).unwrap();
    assert!(report.written);
    assert_eq!(atomic_read(&path).unwrap(), b"line 1\nline 4\nline 5\n");
}

#[test]
fn test_plan_strip_out_of_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.txt");
    write_numbered(&path, 2);

    let err = plan_strip(&path, range(1, 3)).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { end: 3, total: 2 }));
}

#[cfg(unix)]
#[test]
fn test_strip_through_symlink_edits_target() {
    let dir = tempdir().unwrap();
    let real = dir.path().join("real.txt");
    let link = dir.path().join("link.txt");
    std::fs::write(&real, "a\nb\nc\n").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    strip_lines(&link, range(2, 2), &StripOptions::new()).unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(atomic_read(&real).unwrap(), b"a\nc\n");
}

#[test]
fn test_strip_readonly_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("locked.txt");
    std::fs::write(&path, "a\nb\nc\n").unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(&path, perms).unwrap();

    let err = strip_lines(&path, range(2, 2), &StripOptions::new()).unwrap_err();

    assert!(matches!(
        &err,
        Error::Write { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied
    ));
    assert_eq!(atomic_read(&path).unwrap(), b"a\nb\nc\n");
}
