//! All-or-nothing file output.
//!
//! Every file is first written under a temporary name next to its
//! destination. Destinations are then replaced one by one, with any
//! existing file moved aside first. If a replacement fails, the files
//! already replaced are removed and the moved-aside originals restored, so
//! the output directory ends up as it was before the call.

use crate::error::CodegenError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A file staged under a temporary name.
struct Staged {
    tmp: PathBuf,
    dest: PathBuf,
    backup: Option<PathBuf>,
}

/// Writes `(file name, contents)` pairs into `out_dir`.
///
/// Either every file is written or the directory is left unchanged.
///
/// # Arguments
/// * `out_dir` - Output directory, created if missing
/// * `files` - File names relative to `out_dir` and their contents
///
/// # Returns
/// Paths of the written files, in input order.
///
/// # Errors
/// Returns `Io` naming the path that failed.
pub fn write_files(out_dir: &Path, files: &[(&str, &str)]) -> Result<Vec<PathBuf>, CodegenError> {
    for (name, _) in files {
        let dest = out_dir.join(name);
        if dest.is_dir() {
            return Err(CodegenError::io(
                dest,
                io::Error::new(io::ErrorKind::AlreadyExists, "destination is a directory"),
            ));
        }
    }
    fs::create_dir_all(out_dir).map_err(|e| CodegenError::io(out_dir, e))?;

    let mut staged = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let tmp = out_dir.join(format!(".{name}.tmp"));
        if let Err(e) = fs::write(&tmp, contents) {
            discard(&staged);
            let _ = fs::remove_file(&tmp);
            return Err(CodegenError::io(tmp, e));
        }
        staged.push(Staged {
            tmp,
            dest: out_dir.join(name),
            backup: None,
        });
    }

    for idx in 0..staged.len() {
        if let Err(e) = commit(&mut staged[idx]) {
            rollback(&staged, idx);
            return Err(e);
        }
    }

    for file in &staged {
        if let Some(backup) = &file.backup {
            let _ = fs::remove_file(backup);
        }
        tracing::info!("Wrote {}", file.dest.display());
    }
    Ok(staged.into_iter().map(|file| file.dest).collect())
}

fn commit(file: &mut Staged) -> Result<(), CodegenError> {
    if file.dest.exists() {
        let backup = file.tmp.with_extension("bak");
        fs::rename(&file.dest, &backup).map_err(|e| CodegenError::io(&file.dest, e))?;
        file.backup = Some(backup);
    }
    fs::rename(&file.tmp, &file.dest).map_err(|e| CodegenError::io(&file.dest, e))
}

/// Undoes the commits before `failed` and drops the staged files from
/// `failed` on.
fn rollback(staged: &[Staged], failed: usize) {
    for done in staged[..failed].iter().rev() {
        let _ = fs::remove_file(&done.dest);
        restore(done);
    }
    restore(&staged[failed]);
    discard(&staged[failed..]);
}

fn restore(file: &Staged) {
    if let Some(backup) = &file.backup {
        let _ = fs::rename(backup, &file.dest);
    }
}

fn discard(pending: &[Staged]) {
    for file in pending {
        let _ = fs::remove_file(&file.tmp);
    }
}
