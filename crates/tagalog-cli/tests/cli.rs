use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_tts(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagalog-tts"))
        .args(args)
        .output()
        .expect("run tagalog-tts")
}

fn wav_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "wav"))
        .collect()
}

fn is_timestamp_name(name: &str, speed_suffix: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix("tagalog_tts_")
        .and_then(|rest| rest.strip_suffix(&format!("{speed_suffix}.wav")))
    else {
        return false;
    };
    let parts: Vec<&str> = stamp.split('_').collect();
    parts.len() == 3
        && [8, 6, 3]
            .iter()
            .zip(&parts)
            .all(|(len, part)| part.len() == *len && part.chars().all(|c| c.is_ascii_digit()))
}

#[test]
fn help_lists_flags() {
    let output = run_tts(&["--help"]);
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    for flag in ["--text", "--speech-rate", "--output-dir", "--model-dir", "--backend"] {
        assert!(help.contains(flag), "missing {flag} in:\n{help}");
    }
}

#[test]
fn tone_backend_writes_one_slowed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_dir = dir.path().join("output");

    let output = run_tts(&[
        "--backend",
        "tone",
        "-t",
        "magandang tanghali",
        "-s",
        "0.7",
        "-o",
        out_dir.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let files = wav_files(&out_dir);
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(is_timestamp_name(&name, "_speed0.7"), "{name}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Audio saved to:"), "{stdout}");
    assert!(stdout.contains(&name), "{stdout}");

    // 17 letters of 80 ms each at 16 kHz, stretched by 1 / 0.7
    let audio = tagalog_speech::read_wav(&files[0]).expect("read wav");
    assert_eq!(audio.sample_rate, 16_000);
    assert_eq!(audio.samples.len(), 31_085);
}

#[test]
fn normal_rate_has_no_speed_suffix() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_tts(&[
        "--backend",
        "tone",
        "-s",
        "1.0",
        "-o",
        dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let files = wav_files(dir.path());
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(is_timestamp_name(&name, ""), "{name}");
}

#[test]
fn out_of_range_rate_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_tts(&[
        "--backend",
        "tone",
        "-s",
        "-1",
        "-o",
        dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let files = wav_files(dir.path());
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(is_timestamp_name(&name, "_speed0.7"), "{name}");
}

#[test]
fn blank_text_fails_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_tts(&[
        "--backend",
        "tone",
        "-t",
        "   ",
        "-o",
        dir.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!dir.path().exists() || wav_files(dir.path()).is_empty());
}

#[test]
#[ignore = "requires HuggingFace model download"]
fn mms_backend_speaks_tagalog() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_tts(&["-t", "magandang tanghali", "-o", dir.path().to_str().unwrap()]);
    assert!(output.status.success());

    let files = wav_files(dir.path());
    assert_eq!(files.len(), 1);
    let audio = tagalog_speech::read_wav(&files[0]).expect("read wav");
    assert_eq!(audio.sample_rate, 16_000);
    assert!(audio.duration_ms() > 500);
}
