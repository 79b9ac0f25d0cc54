//! File reading utilities

use crate::error::{Result, SyscontrolError};
use std::fs;
use std::path::{Path, PathBuf};

/// Read first line of a file, trimmed
/// Optimized for single-value sysfs attributes like /sys/block/sda/size
/// Uses direct syscalls, sysfs attributes fit in one page
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| SyscontrolError::parse("Invalid path"))?;

    unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY);
        if fd < 0 {
            return Err(SyscontrolError::from(std::io::Error::last_os_error()));
        }

        let mut buffer = [0u8; 4096];
        let bytes_read = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        // Capture errno before close() can clobber it
        let read_error = std::io::Error::last_os_error();
        libc::close(fd);

        if bytes_read < 0 {
            return Err(SyscontrolError::from(read_error));
        }

        let content = String::from_utf8_lossy(&buffer[..bytes_read as usize]);
        Ok(content.lines().next().unwrap_or("").trim().to_string())
    }
}

/// First line of an attribute file, `None` when unreadable or blank
pub fn read_value<P: AsRef<Path>>(path: P) -> Option<String> {
    read_first_line(path).ok().filter(|v| !v.is_empty())
}

/// Directory entries whose names start with `prefix`, sorted by name
///
/// Names are compared with trailing digits as numbers so `card10`
/// sorts after `card2`.
pub fn list_entries<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Vec<(String, PathBuf)>> {
    let mut entries: Vec<(String, PathBuf)> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            name.starts_with(prefix).then(|| (name, entry.path()))
        })
        .collect();
    entries.sort_by(|(a, _), (b, _)| natural_key(a).cmp(&natural_key(b)));
    Ok(entries)
}

fn natural_key(name: &str) -> (String, u64) {
    let split = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(name.len());
    let (stem, digits) = name.split_at(split);
    (stem.to_string(), digits.parse().unwrap_or(0))
}
