#![forbid(unsafe_code)]

use std::fs::File;
use std::io::Read;

/// Load a file of little-endian `f32` values into a `Vec<f32>`.
/// Trailing bytes that do not fill a whole float are dropped.
pub fn load_f32_file(path: &str) -> Result<Vec<f32>, std::io::Error> {
    let mut f = File::open(path)?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let mut out = Vec::with_capacity(buf.len() / 4);
    for b in buf.chunks_exact(4) {
        out.push(f32::from_le_bytes([b[0], b[1], b[2], b[3]]));
    }
    Ok(out)
}

/// Load a word list, one entry per line; blank lines are skipped.
pub fn load_vocab_file(path: &str) -> Result<Vec<String>, std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("engine-loader-{}-{name}", std::process::id()));
        p
    }

    #[test]
    fn f32_roundtrip_little_endian() {
        let path = temp_path("weights.bin");
        let values = [1.5f32, -2.25, 0.0, 3.0e7];
        let mut f = File::create(&path).unwrap();
        for v in values {
            f.write_all(&v.to_le_bytes()).unwrap();
        }
        f.write_all(&[0xAA, 0xBB]).unwrap(); // trailing partial float
        drop(f);

        let loaded = load_f32_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, values);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn vocab_file_skips_blank_lines() {
        let path = temp_path("vocab.txt");
        std::fs::write(&path, "<PAD>\n<UNK>\n\n<START>\n  marry  \n").unwrap();
        let words = load_vocab_file(path.to_str().unwrap()).unwrap();
        assert_eq!(words, ["<PAD>", "<UNK>", "<START>", "marry"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(load_f32_file("/nonexistent/weights.bin").is_err());
    }
}
